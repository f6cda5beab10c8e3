/// Game-logic phases.
///
/// Every public function takes the `GameState` (or the part of it it needs)
/// by mutable reference and, where needed, an RNG handle.  Side effects are
/// limited to the state and the injected RNG, so a seeded `StdRng` makes a
/// run fully reproducible in tests.
use std::time::Duration;

mod collision;
mod effects;
mod motion;
mod spawn;

pub use collision::{resolve_big_ball_collisions, resolve_power_up_collisions};
pub use effects::{advance_effect_timer, apply_power_up};
pub use motion::{advance_big_balls, advance_player, move_down, move_left, move_right, move_up};
pub use spawn::{maybe_spawn_power_up, spawn_big_ball};

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Arena half-extent.  Crossing it flips the velocity axis.
pub const ARENA_BOUND: f64 = 200.0;
/// Spawn positions are integers in `[-SPAWN_RANGE, SPAWN_RANGE]`.
pub const SPAWN_RANGE: i32 = 150;
/// Per-axis big-ball speed (world units per tick).
pub const BIG_BALL_SPEED: f64 = 0.5;
/// Player displacement per tick is `direction × STEP_FACTOR`.
pub const STEP_FACTOR: f64 = 0.05;
pub const BOOST_MULTIPLIER: f64 = 2.0;

pub const TICK: Duration = Duration::from_millis(50);
pub const COLLISION_COOLDOWN: Duration = Duration::from_millis(500);
pub const BOOST_DURATION: Duration = Duration::from_millis(5000);

pub const BIG_BALL_HIT_RADIUS: f64 = 30.0;
pub const POWER_UP_HIT_RADIUS: f64 = 20.0;
pub const POWER_UP_CHANCE: f64 = 0.01;
