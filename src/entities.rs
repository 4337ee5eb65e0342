/// All game entity types — pure data, no logic beyond bounding boxes.

use std::time::Duration;

use crate::barrier::BarrierGrid;
use crate::collision::Rect;
use crate::consts::{
    FIELD_WIDTH, HAZARD_SIZE, PLAYER_SIZE, PROJECTILE_HEIGHT, PROJECTILE_WIDTH, TARGET_SIZE,
};
use crate::input::InputState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for fire.
    Start,
    Playing,
    /// Run ended; fire returns to the title screen.
    GameOver,
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Muzzle position: the centre of the sprite.
    pub fn center(&self) -> (f32, f32) {
        (self.x + PLAYER_SIZE / 2.0, self.y + PLAYER_SIZE / 2.0)
    }
}

// ── Target ───────────────────────────────────────────────────────────────────

/// The stationary objective on the right of the barrier.  While `destroyed`
/// it is neither drawn nor hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub destroyed: bool,
}

impl Target {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, TARGET_SIZE, TARGET_SIZE)
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

// ── Hazard ───────────────────────────────────────────────────────────────────

/// The missile.  Idle most of the time; when launched it crosses the field
/// right to left, bouncing off the top and bottom edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub active: bool,
}

impl Hazard {
    /// Parked, inactive hazard as it sits before its first launch.
    pub fn idle() -> Self {
        Hazard {
            x: FIELD_WIDTH,
            y: 0.0,
            dx: -3.0,
            dy: 2.0,
            active: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, HAZARD_SIZE, HAZARD_SIZE)
    }
}

// ── Master frame state ───────────────────────────────────────────────────────

/// Everything the simulation knows for one tick.  Cloneable so the step
/// function can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    pub player: Player,
    pub target: Target,
    pub barrier: BarrierGrid,
    /// Live player shots, oldest first.
    pub projectiles: Vec<Projectile>,
    pub hazard: Hazard,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// Input snapshot the last step ran with.
    pub input: InputState,
    /// Game-clock time at which the destroyed target comes back, if one is
    /// queued.
    pub pending_respawn: Option<Duration>,
    pub frame: u64,
}
