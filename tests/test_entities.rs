use yars_revenge::compute::init_state;
use yars_revenge::entities::*;

#[test]
fn phase_clone_and_eq() {
    assert_eq!(GamePhase::Start, GamePhase::Start);
    assert_ne!(GamePhase::Start, GamePhase::Playing);
    assert_ne!(GamePhase::Playing, GamePhase::GameOver);

    let phase = GamePhase::GameOver;
    assert_eq!(phase.clone(), GamePhase::GameOver);
}

#[test]
fn frame_state_clone_is_independent() {
    let original = init_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.barrier.clear(0, 0);
    cloned.projectiles.push(Projectile { x: 5.0, y: 5.0, dx: 6.0, dy: 0.0 });

    assert_eq!(original.player.x, 100.0);
    assert_eq!(original.score, 0);
    assert!(original.barrier.is_occupied(0, 0));
    assert!(original.projectiles.is_empty());
}

#[test]
fn actor_boxes() {
    let player = Player { x: 10.0, y: 20.0 };
    let r = player.rect();
    assert_eq!((r.x, r.y, r.width, r.height), (10.0, 20.0, 16.0, 16.0));
    assert_eq!(player.center(), (18.0, 28.0));

    let target = Target { x: 700.0, y: 300.0, destroyed: false };
    assert_eq!(target.rect().width, 24.0);

    let shot = Projectile { x: 1.0, y: 2.0, dx: 6.0, dy: 0.0 };
    assert_eq!((shot.rect().width, shot.rect().height), (4.0, 2.0));

    let hazard = Hazard::idle();
    assert!(!hazard.active);
    assert_eq!(hazard.x, 800.0);
    assert_eq!(hazard.rect().height, 8.0);
}
