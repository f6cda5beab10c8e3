use crate::entities::{BigBall, GameState, Player};
use crate::error::{EntityRef, Phase, TickFault};

use super::{ARENA_BOUND, BOOST_MULTIPLIER, STEP_FACTOR};

/// Flip `velocity` when `coord` is past the arena edge and still heading
/// outward.  The position itself is never clamped, so it can sit up to one
/// step past the wall, but it always turns back in.
fn reflect(coord: f64, velocity: &mut f64) {
    if (coord > ARENA_BOUND && *velocity > 0.0) || (coord < -ARENA_BOUND && *velocity < 0.0) {
        *velocity = -*velocity;
    }
}

// ── Direction commands ───────────────────────────────────────────────────────
//
// Each one replaces the whole direction, so motion never goes diagonal.

pub fn move_up(player: &mut Player) {
    player.dx = 0.0;
    player.dy = player.base_speed;
}

pub fn move_down(player: &mut Player) {
    player.dx = 0.0;
    player.dy = -player.base_speed;
}

pub fn move_left(player: &mut Player) {
    player.dx = -player.base_speed;
    player.dy = 0.0;
}

pub fn move_right(player: &mut Player) {
    player.dx = player.base_speed;
    player.dy = 0.0;
}

// ── Per-tick motion ──────────────────────────────────────────────────────────

pub fn advance_big_balls(state: &mut GameState) -> Result<(), TickFault> {
    for (i, ball) in state.store.big_balls.iter_mut().enumerate() {
        step_big_ball(ball);
        if !ball.pos.is_finite() {
            return Err(TickFault::NonFinitePosition {
                phase: Phase::AdvanceBigBalls,
                entity: EntityRef::BigBall(i),
            });
        }
    }
    Ok(())
}

fn step_big_ball(ball: &mut BigBall) {
    ball.pos.x += ball.dx;
    ball.pos.y += ball.dy;
    reflect(ball.pos.x, &mut ball.dx);
    reflect(ball.pos.y, &mut ball.dy);
}

pub fn advance_player(state: &mut GameState) -> Result<(), TickFault> {
    let player = &mut state.store.player;
    let multiplier = if player.boosted { BOOST_MULTIPLIER } else { 1.0 };
    let step = STEP_FACTOR * multiplier;

    // A key pressed while past the wall may point back out; turn it first.
    reflect(player.pos.x, &mut player.dx);
    reflect(player.pos.y, &mut player.dy);

    player.pos.x += player.dx * step;
    player.pos.y += player.dy * step;
    reflect(player.pos.x, &mut player.dx);
    reflect(player.pos.y, &mut player.dy);

    if !player.pos.is_finite() {
        return Err(TickFault::NonFinitePosition {
            phase: Phase::AdvancePlayer,
            entity: EntityRef::Player,
        });
    }
    Ok(())
}
