use rand::Rng;
use tracing::debug;

use crate::entities::{BigBall, EntityStore, Point, PowerUp, PowerUpKind};

use super::{BIG_BALL_SPEED, POWER_UP_CHANCE, SPAWN_RANGE};

fn random_spawn_point(rng: &mut impl Rng) -> Point {
    let x = rng.gen_range(-SPAWN_RANGE..=SPAWN_RANGE);
    let y = rng.gen_range(-SPAWN_RANGE..=SPAWN_RANGE);
    Point::new(x as f64, y as f64)
}

fn random_axis_speed(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.5) {
        BIG_BALL_SPEED
    } else {
        -BIG_BALL_SPEED
    }
}

/// Append one big ball at a random spot with a random diagonal heading.
pub fn spawn_big_ball(store: &mut EntityStore, rng: &mut impl Rng) {
    let pos = random_spawn_point(rng);
    let dx = random_axis_speed(rng);
    let dy = random_axis_speed(rng);
    debug!(x = pos.x, y = pos.y, dx, dy, "big ball spawned");
    store.add_big_ball(BigBall { pos, dx, dy });
}

/// Roll the per-tick dice for a power-up.  Returns `true` if one appeared.
pub fn maybe_spawn_power_up(store: &mut EntityStore, rng: &mut impl Rng) -> bool {
    if !rng.gen_bool(POWER_UP_CHANCE) {
        return false;
    }
    let pos = random_spawn_point(rng);
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::Speed
    } else {
        PowerUpKind::Clear
    };
    debug!(x = pos.x, y = pos.y, ?kind, "power-up spawned");
    store.add_power_up(PowerUp { pos, kind });
    true
}
