//! Ball Collision: dodge the wandering big balls, grab power-ups, rack up
//! a score.  The simulation is terminal-agnostic; the binary supplies the
//! crossterm renderer and input thread.

pub mod compute;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
