/// All game entity types, plus the store that owns them.
use std::time::Duration;

/// Player speed in world units per second of input direction.
pub const PLAYER_BASE_SPEED: f64 = 60.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A point (or displacement) in world coordinates.  +y is up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Doubles player speed for a few seconds.
    Speed,
    /// Removes every big ball but one.
    Clear,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub pos: Point,
    pub kind: PowerUpKind,
}

// ── Player & big balls ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Point,
    /// Direction already scaled by `base_speed`; always axis-aligned.
    pub dx: f64,
    pub dy: f64,
    pub base_speed: f64,
    pub boosted: bool,
    pub boost_remaining: Duration,
}

impl Player {
    pub fn new() -> Self {
        Player {
            pos: Point::ORIGIN,
            dx: 0.0,
            dy: 0.0,
            base_speed: PLAYER_BASE_SPEED,
            boosted: false,
            boost_remaining: Duration::ZERO,
        }
    }

    /// Back to the centre, standing still.  Boost state is untouched.
    pub fn reset(&mut self) {
        self.pos = Point::ORIGIN;
        self.dx = 0.0;
        self.dy = 0.0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BigBall {
    pub pos: Point,
    pub dx: f64,
    pub dy: f64,
}

// ── Entity store ──────────────────────────────────────────────────────────────

/// Owns every live entity.  Other components only ever borrow it.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    pub player: Player,
    pub big_balls: Vec<BigBall>,
    pub power_ups: Vec<PowerUp>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_big_ball(&mut self, ball: BigBall) {
        self.big_balls.push(ball);
    }

    pub fn add_power_up(&mut self, power_up: PowerUp) {
        self.power_ups.push(power_up);
    }

    pub fn remove_power_up(&mut self, index: usize) -> PowerUp {
        self.power_ups.remove(index)
    }

    /// Drop big balls from the back until at most `keep` remain.
    /// Returns how many were removed.
    pub fn truncate_big_balls(&mut self, keep: usize) -> usize {
        let before = self.big_balls.len();
        self.big_balls.truncate(keep);
        before - self.big_balls.len()
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one run mutates: entities plus the score and the cooldown
/// timestamp.  Passed by `&mut` into each tick phase.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    pub store: EntityStore,
    pub score: u32,
    /// Game time of the last scoring collision, `None` before the first.
    pub last_collision: Option<Duration>,
    pub ticks: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}
