use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use yars_revenge::compute::{init_state, step};
use yars_revenge::consts::{BARRIER_COLS, BARRIER_ROWS, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_SIZE};
use yars_revenge::entities::{FrameState, GamePhase};
use yars_revenge::input::{InputState, Key};

/// Held keys only; presses are already consumed so no phase change can be
/// triggered mid-run.
fn held_input(keys: [bool; 5]) -> InputState {
    let mut input = InputState::new();
    for (&key, on) in Key::ALL.iter().zip(keys) {
        if on {
            input.press(key);
        }
    }
    let _ = input.snapshot();
    input
}

fn started(seed: u64) -> (FrameState, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut fire = InputState::new();
    fire.press(Key::Fire);
    let state = step(&init_state(), &fire, Duration::ZERO, &mut rng);
    (state, rng)
}

proptest! {
    #[test]
    fn projectiles_never_exceed_three(
        seed in any::<u64>(),
        frames in prop::collection::vec(any::<[bool; 5]>(), 1..300),
    ) {
        let (mut s, mut rng) = started(seed);
        for keys in frames {
            s = step(&s, &held_input(keys), Duration::ZERO, &mut rng);
            prop_assert!(s.projectiles.len() <= 3);
        }
    }

    #[test]
    fn player_stays_on_field(
        seed in any::<u64>(),
        frames in prop::collection::vec(any::<[bool; 5]>(), 1..300),
    ) {
        let (mut s, mut rng) = started(seed);
        for keys in frames {
            s = step(&s, &held_input(keys), Duration::ZERO, &mut rng);
            prop_assert!(s.player.x >= 0.0 && s.player.x <= FIELD_WIDTH - PLAYER_SIZE);
            prop_assert!(s.player.y >= 0.0 && s.player.y <= FIELD_HEIGHT - PLAYER_SIZE);
        }
    }

    /// With the clock frozen no respawn can come due, so nothing rebuilds the
    /// barrier and cleared cells must stay cleared.
    #[test]
    fn cleared_cells_stay_cleared(
        seed in any::<u64>(),
        frames in prop::collection::vec(any::<[bool; 5]>(), 1..300),
    ) {
        let (mut s, mut rng) = started(seed);
        for keys in frames {
            let before = s.barrier.clone();
            let score_before = s.score;
            s = step(&s, &held_input(keys), Duration::ZERO, &mut rng);
            for row in 0..BARRIER_ROWS {
                for col in 0..BARRIER_COLS {
                    if !before.is_occupied(row, col) {
                        prop_assert!(!s.barrier.is_occupied(row, col));
                    }
                }
            }
            prop_assert!(s.score >= score_before);
        }
    }

    #[test]
    fn game_over_is_sticky_without_fire_press(
        seed in any::<u64>(),
        frames in prop::collection::vec(any::<[bool; 5]>(), 1..50),
    ) {
        let (mut s, mut rng) = started(seed);
        s.phase = GamePhase::GameOver;
        s.lives = 0;
        let frozen = s.clone();
        for keys in frames {
            s = step(&s, &held_input(keys), Duration::from_secs(100), &mut rng);
            prop_assert_eq!(s.phase, GamePhase::GameOver);
            prop_assert_eq!(&s.player, &frozen.player);
            prop_assert_eq!(s.score, frozen.score);
        }
    }
}
