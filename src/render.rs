/// The drawing seam between the simulation and whatever shows it.
///
/// `render_frame` decides *what* to draw (sizes, colours, the score label);
/// a `Renderer` decides *how*.
use core::fmt;

use crate::entities::{GameState, Point};

/// Where the score label sits, in world coordinates.
pub const SCORE_LABEL_AT: Point = Point { x: -230.0, y: 230.0 };

pub const PLAYER_SIZE: f64 = 1.0;
pub const BIG_BALL_SIZE: f64 = 2.0;
pub const POWER_UP_SIZE: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Red,
    Yellow,
    Blue,
    Green,
    Default,
}

#[derive(Debug)]
pub struct RenderError(pub std::io::Error);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "terminal write failed: {}", self.0)
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError(err)
    }
}

pub trait Renderer {
    /// Wipe everything drawn since the last `present`.
    fn clear(&mut self) -> Result<(), RenderError>;
    /// Draw a filled circle.  `size` is relative: 1.0 is a 20-unit disc.
    fn draw_disc(&mut self, center: Point, size: f64, tint: Tint) -> Result<(), RenderError>;
    fn draw_text(&mut self, at: Point, text: &str) -> Result<(), RenderError>;
    /// Flush the batched frame.
    fn present(&mut self) -> Result<(), RenderError>;
}

pub fn player_tint(state: &GameState) -> Tint {
    if state.store.player.boosted {
        Tint::Yellow
    } else {
        Tint::Red
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Draw one complete frame and present it.
pub fn render_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
) -> Result<(), RenderError> {
    renderer.clear()?;

    for power_up in &state.store.power_ups {
        renderer.draw_disc(power_up.pos, POWER_UP_SIZE, Tint::Green)?;
    }
    for ball in &state.store.big_balls {
        renderer.draw_disc(ball.pos, BIG_BALL_SIZE, Tint::Blue)?;
    }
    renderer.draw_disc(state.store.player.pos, PLAYER_SIZE, player_tint(state))?;
    renderer.draw_text(SCORE_LABEL_AT, &score_label(state.score))?;

    renderer.present()
}
