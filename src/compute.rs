/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `FrameState` (plus input, the game clock and an RNG handle where needed)
/// and returns a brand-new `FrameState`.  Side effects are limited to the
/// injected RNG and log output.

use std::time::Duration;

use rand::Rng;

use crate::barrier::BarrierGrid;
use crate::consts::*;
use crate::entities::{FrameState, GamePhase, Hazard, Player, Projectile, Target};
use crate::input::{InputState, Key};

// ── Constructors ─────────────────────────────────────────────────────────────

fn starting_player() -> Player {
    Player {
        x: PLAYER_START_X,
        y: PLAYER_START_Y,
    }
}

/// The title-screen state: full barrier, nothing moving.
pub fn init_state() -> FrameState {
    FrameState {
        player: starting_player(),
        target: Target {
            x: TARGET_X,
            y: FIELD_HEIGHT / 2.0,
            destroyed: false,
        },
        barrier: BarrierGrid::full(),
        projectiles: Vec::new(),
        hazard: Hazard::idle(),
        score: 0,
        lives: STARTING_LIVES,
        phase: GamePhase::Start,
        input: InputState::new(),
        pending_respawn: None,
        frame: 0,
    }
}

// ── Phase transitions ────────────────────────────────────────────────────────

/// Start → Playing, with a freshly rolled barrier.
pub fn start_round(state: &FrameState, rng: &mut impl Rng) -> FrameState {
    log::info!("round started");
    FrameState {
        phase: GamePhase::Playing,
        barrier: BarrierGrid::reinitialize(rng),
        ..state.clone()
    }
}

/// GameOver → Start.  Score, lives, actors and any queued respawn go back to
/// their initial values; only the frame counter carries over.
pub fn reset_to_start(state: &FrameState) -> FrameState {
    log::info!("back to title, final score {}", state.score);
    FrameState {
        frame: state.frame,
        ..init_state()
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Move the player by `PLAYER_SPEED` per held direction, clamped to the field.
pub fn move_player(state: &FrameState, input: &InputState) -> FrameState {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.is_held(Key::MoveUp) {
        dy -= PLAYER_SPEED;
    }
    if input.is_held(Key::MoveDown) {
        dy += PLAYER_SPEED;
    }
    if input.is_held(Key::MoveLeft) {
        dx -= PLAYER_SPEED;
    }
    if input.is_held(Key::MoveRight) {
        dx += PLAYER_SPEED;
    }

    FrameState {
        player: Player {
            x: (state.player.x + dx).clamp(0.0, FIELD_WIDTH - PLAYER_SIZE),
            y: (state.player.y + dy).clamp(0.0, FIELD_HEIGHT - PLAYER_SIZE),
        },
        ..state.clone()
    }
}

/// Fire from the player's centre while fire is held — capped at
/// `MAX_PROJECTILES` live shots.
pub fn player_fire(state: &FrameState, input: &InputState) -> FrameState {
    if !input.is_held(Key::Fire) || state.projectiles.len() >= MAX_PROJECTILES {
        return state.clone();
    }
    let (x, y) = state.player.center();
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile {
        x,
        y,
        dx: PROJECTILE_SPEED,
        dy: 0.0,
    });
    FrameState {
        projectiles,
        ..state.clone()
    }
}

// ── Per-frame updates ────────────────────────────────────────────────────────

fn off_field(p: &Projectile) -> bool {
    p.x > FIELD_WIDTH || p.x < 0.0 || p.y > FIELD_HEIGHT || p.y < 0.0
}

/// Advance every shot, then resolve it against the barrier and the target.
/// A shot is spent by the first thing it hits; barrier cells take priority.
pub fn update_projectiles(state: &FrameState) -> FrameState {
    let mut barrier = state.barrier.clone();
    let mut target = state.target.clone();
    let mut score = state.score;

    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .filter_map(|p| {
            let moved = Projectile {
                x: p.x + p.dx,
                y: p.y + p.dy,
                ..p.clone()
            };
            if off_field(&moved) {
                return None;
            }
            if barrier.clear_at(moved.x, moved.y) {
                score += SCORE_BARRIER_SHOT;
                return None;
            }
            if !target.destroyed && moved.rect().overlaps(&target.rect()) {
                log::debug!("target destroyed at y={}", target.y);
                target.destroyed = true;
                score += SCORE_TARGET;
                return None;
            }
            Some(moved)
        })
        .collect();

    FrameState {
        projectiles,
        barrier,
        target,
        score,
        ..state.clone()
    }
}

/// The player eats whatever barrier cell lies under its position.
pub fn erode_barrier(state: &FrameState) -> FrameState {
    let mut barrier = state.barrier.clone();
    if !barrier.clear_at(state.player.x, state.player.y) {
        return state.clone();
    }
    FrameState {
        barrier,
        score: state.score + SCORE_BARRIER_EATEN,
        ..state.clone()
    }
}

/// Roll for an idle hazard to launch from the right edge.
pub fn activate_hazard(state: &FrameState, rng: &mut impl Rng) -> FrameState {
    if state.hazard.active || !rng.gen_bool(HAZARD_ACTIVATION_CHANCE) {
        return state.clone();
    }
    let hazard = Hazard {
        x: FIELD_WIDTH,
        y: rng.gen_range(0.0..FIELD_HEIGHT - HAZARD_SPAWN_MARGIN),
        dx: -HAZARD_SPEED,
        dy: rng.gen_range(-1.0..=1.0),
        active: true,
    };
    log::debug!("hazard launched at y={:.1} dy={:.2}", hazard.y, hazard.dy);
    FrameState {
        hazard,
        ..state.clone()
    }
}

/// Move an active hazard and resolve its contact with the player.
pub fn update_hazard(state: &FrameState) -> FrameState {
    if !state.hazard.active {
        return state.clone();
    }

    let mut hazard = Hazard {
        x: state.hazard.x + state.hazard.dx,
        y: state.hazard.y + state.hazard.dy,
        ..state.hazard.clone()
    };
    if hazard.y <= 0.0 || hazard.y >= FIELD_HEIGHT - HAZARD_SIZE {
        hazard.dy = -hazard.dy;
    }
    if hazard.x < HAZARD_EXIT_X {
        hazard.active = false;
    }

    if !hazard.active || !hazard.rect().overlaps(&state.player.rect()) {
        return FrameState {
            hazard,
            ..state.clone()
        };
    }

    // ── Player hit ───────────────────────────────────────────────────────────
    hazard.active = false;
    let lives = state.lives.saturating_sub(1);
    if lives == 0 {
        log::info!("last life lost, game over with score {}", state.score);
        FrameState {
            hazard,
            lives,
            phase: GamePhase::GameOver,
            ..state.clone()
        }
    } else {
        log::info!("player hit, {} lives left", lives);
        FrameState {
            hazard,
            lives,
            player: starting_player(),
            ..state.clone()
        }
    }
}

// ── Target respawn ───────────────────────────────────────────────────────────

/// Queue the target's return once per destruction.
pub fn schedule_respawn(state: &FrameState, now: Duration) -> FrameState {
    if !state.target.destroyed || state.pending_respawn.is_some() {
        return state.clone();
    }
    FrameState {
        pending_respawn: Some(now + TARGET_RESPAWN_DELAY),
        ..state.clone()
    }
}

/// Apply a queued respawn whose deadline has passed: the target returns at a
/// random height and the barrier is rebuilt.
pub fn apply_due_respawn(state: &FrameState, now: Duration, rng: &mut impl Rng) -> FrameState {
    match state.pending_respawn {
        Some(deadline) if now >= deadline => {
            let target = Target {
                x: TARGET_X,
                y: rng.gen_range(0.0..FIELD_HEIGHT - TARGET_SIZE),
                destroyed: false,
            };
            log::debug!("target respawned at y={:.1}", target.y);
            FrameState {
                target,
                barrier: BarrierGrid::reinitialize(rng),
                pending_respawn: None,
                ..state.clone()
            }
        }
        _ => state.clone(),
    }
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the game by one frame.  `now` is the game clock (time since the
/// session began) and drives the respawn timer; all randomness comes through
/// `rng` so callers control determinism.
///
/// Fire doubles as the start/restart button: outside `Playing` a fresh press
/// changes phase and nothing else runs that frame.
pub fn step(
    state: &FrameState,
    input: &InputState,
    now: Duration,
    rng: &mut impl Rng,
) -> FrameState {
    let frame = state.frame + 1;

    let next = match state.phase {
        GamePhase::Start if input.was_pressed(Key::Fire) => start_round(state, rng),
        GamePhase::GameOver if input.was_pressed(Key::Fire) => reset_to_start(state),
        GamePhase::Start | GamePhase::GameOver => state.clone(),
        GamePhase::Playing => {
            let s = apply_due_respawn(state, now, rng);
            let s = move_player(&s, input);
            let s = player_fire(&s, input);
            let s = update_projectiles(&s);
            let s = erode_barrier(&s);
            let s = activate_hazard(&s, rng);
            let s = update_hazard(&s);
            schedule_respawn(&s, now)
        }
    };

    FrameState {
        input: input.clone(),
        frame,
        ..next
    }
}
