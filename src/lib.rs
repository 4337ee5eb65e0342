//! Yars' Revenge - a single-screen terminal arcade game
//!
//! Core modules:
//! - `entities`: pure game data, no logic
//! - `compute`: the deterministic per-frame step
//! - `barrier`: destructible barrier grid
//! - `collision`: axis-aligned box overlap
//! - `input`: held/pressed key state fed into each step
//! - `settings`: host settings loaded from JSON

pub mod barrier;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod input;
pub mod settings;

pub use settings::Settings;

/// Field geometry and gameplay constants
pub mod consts {
    use std::time::Duration;

    /// Playfield dimensions (field units)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Everything right of this line is the neutral zone
    pub const NEUTRAL_ZONE_X: f32 = 600.0;

    pub const PLAYER_SIZE: f32 = 16.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = FIELD_HEIGHT / 2.0;
    pub const STARTING_LIVES: u32 = 3;

    pub const TARGET_SIZE: f32 = 24.0;
    pub const TARGET_X: f32 = FIELD_WIDTH - 100.0;
    /// Wall-clock delay between destroying the target and its respawn
    pub const TARGET_RESPAWN_DELAY: Duration = Duration::from_millis(2000);

    pub const PROJECTILE_WIDTH: f32 = 4.0;
    pub const PROJECTILE_HEIGHT: f32 = 2.0;
    pub const PROJECTILE_SPEED: f32 = 6.0;
    pub const MAX_PROJECTILES: usize = 3;

    pub const HAZARD_SIZE: f32 = 8.0;
    pub const HAZARD_SPEED: f32 = 4.0;
    /// Per-tick chance that an idle hazard launches
    pub const HAZARD_ACTIVATION_CHANCE: f64 = 0.002;
    /// Launch heights are drawn from [0, FIELD_HEIGHT - HAZARD_SPAWN_MARGIN)
    pub const HAZARD_SPAWN_MARGIN: f32 = 50.0;
    /// Hazard is retired once it passes this x
    pub const HAZARD_EXIT_X: f32 = -20.0;

    /// Barrier grid layout
    pub const BARRIER_ROWS: usize = 20;
    pub const BARRIER_COLS: usize = 40;
    pub const BARRIER_ORIGIN_X: f32 = 200.0;
    pub const BARRIER_CELL_WIDTH: f32 = 10.0;
    pub const BARRIER_CELL_HEIGHT: f32 = 20.0;
    /// Chance that a cell survives a reinitialize
    pub const BARRIER_DENSITY: f64 = 0.9;

    /// Scoring
    pub const SCORE_BARRIER_SHOT: u32 = 1;
    pub const SCORE_BARRIER_EATEN: u32 = 2;
    pub const SCORE_TARGET: u32 = 1000;
}
