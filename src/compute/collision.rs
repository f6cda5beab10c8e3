use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::entities::GameState;

use super::{
    apply_power_up, spawn_big_ball, BIG_BALL_HIT_RADIUS, COLLISION_COOLDOWN, POWER_UP_HIT_RADIUS,
};

fn cooling_down(state: &GameState, now: Duration) -> bool {
    state
        .last_collision
        .map(|last| now.saturating_sub(last) < COLLISION_COOLDOWN)
        .unwrap_or(false)
}

/// Score at most one player/big-ball hit.  On a hit the player goes back to
/// the origin and a fresh big ball joins the arena; the ball that was hit
/// stays.  Returns `true` if a point was scored.
pub fn resolve_big_ball_collisions(
    state: &mut GameState,
    now: Duration,
    rng: &mut impl Rng,
) -> bool {
    if cooling_down(state, now) {
        return false;
    }

    let player_pos = state.store.player.pos;
    let hit = state
        .store
        .big_balls
        .iter()
        .any(|ball| ball.pos.distance(&player_pos) < BIG_BALL_HIT_RADIUS);
    if !hit {
        return false;
    }

    state.last_collision = Some(now);
    state.score += 1;
    info!(score = state.score, "big ball hit");
    spawn_big_ball(&mut state.store, rng);
    state.store.player.reset();
    true
}

/// Consume every power-up within reach of the player, applying each effect
/// in spawn order.  Returns how many were picked up.
pub fn resolve_power_up_collisions(state: &mut GameState) -> usize {
    let player_pos = state.store.player.pos;
    let pending = std::mem::take(&mut state.store.power_ups);
    let mut consumed = 0;

    for power_up in pending {
        if power_up.pos.distance(&player_pos) < POWER_UP_HIT_RADIUS {
            debug!(kind = ?power_up.kind, "power-up collected");
            apply_power_up(&mut state.store, power_up.kind);
            consumed += 1;
        } else {
            state.store.power_ups.push(power_up);
        }
    }
    consumed
}
