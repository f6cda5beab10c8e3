/// One tick at a time: motion, spawning, collisions, effects, render.
///
/// The loop itself is a two-state machine.  A simulation fault stops it
/// for good, since every later phase would be working on a broken state.
/// A render fault only costs that frame, unless the terminal keeps failing.
use std::time::Duration;

use rand::Rng;
use tracing::{error, warn};

use crate::compute::{
    advance_big_balls, advance_effect_timer, advance_player, maybe_spawn_power_up, move_down,
    move_left, move_right, move_up, resolve_big_ball_collisions, resolve_power_up_collisions,
    spawn_big_ball,
};
use crate::entities::GameState;
use crate::error::TickFault;
use crate::input::Direction;
use crate::render::{render_frame, Renderer};

/// This many failed frames in a row ends the run.
pub const MAX_CONSECUTIVE_RENDER_FAULTS: u32 = 3;

#[derive(Debug)]
pub enum LoopState {
    Running,
    Faulted(TickFault),
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }
}

pub struct GameLoop<R: Rng> {
    pub state: GameState,
    rng: R,
    status: LoopState,
    render_faults: u32,
}

impl<R: Rng> GameLoop<R> {
    /// Set up a fresh run with its single starting big ball.
    pub fn new(mut rng: R) -> Self {
        let mut state = GameState::new();
        spawn_big_ball(&mut state.store, &mut rng);
        GameLoop {
            state,
            rng,
            status: LoopState::Running,
            render_faults: 0,
        }
    }

    pub fn status(&self) -> &LoopState {
        &self.status
    }

    /// Steer the player.  Applied between ticks, never mid-tick.
    pub fn steer(&mut self, direction: Direction) {
        let player = &mut self.state.store.player;
        match direction {
            Direction::Up => move_up(player),
            Direction::Down => move_down(player),
            Direction::Left => move_left(player),
            Direction::Right => move_right(player),
        }
    }

    /// Advance the simulation by one tick at game time `now`, then draw.
    pub fn step<D: Renderer + ?Sized>(&mut self, now: Duration, renderer: &mut D) -> &LoopState {
        if !self.status.is_running() {
            return &self.status;
        }

        if let Err(fault) = self.simulate(now) {
            error!(phase = %fault.phase(), %fault, "tick fault, halting");
            self.status = LoopState::Faulted(fault);
            return &self.status;
        }
        self.state.ticks += 1;

        match render_frame(renderer, &self.state) {
            Ok(()) => self.render_faults = 0,
            Err(err) => {
                self.render_faults += 1;
                if self.render_faults >= MAX_CONSECUTIVE_RENDER_FAULTS {
                    error!(%err, faults = self.render_faults, "renderer keeps failing, halting");
                    self.status = LoopState::Faulted(TickFault::Render(err));
                } else {
                    warn!(%err, tick = self.state.ticks, "frame skipped");
                }
            }
        }
        &self.status
    }

    fn simulate(&mut self, now: Duration) -> Result<(), TickFault> {
        let state = &mut self.state;
        advance_big_balls(state)?;
        advance_player(state)?;
        maybe_spawn_power_up(&mut state.store, &mut self.rng);
        resolve_big_ball_collisions(state, now, &mut self.rng);
        resolve_power_up_collisions(state);
        advance_effect_timer(&mut state.store.player);
        Ok(())
    }
}

/// How long to wait before the next tick.  An overrun tick gets no wait
/// and no catch-up: the cadence stalls instead of skipping.
pub fn sleep_budget(elapsed: Duration, interval: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}
