//! # Rendering Module
//!
//! The render/notify sink the scheduler reports to, plus its implementations:
//! a plain-text console front-end and a serializable event stream.

pub mod console;
pub mod recorder;

pub use console::*;
pub use recorder::*;

use crate::ReadOnlyWorld;

/// Receiver of everything the simulation wants to show.
///
/// Calls are synchronous and best-effort: implementations deal with their own
/// I/O failures, the simulation does not wait on or retry them.
pub trait UserInterface {
    /// Called once before the first turn with the world dimensions.
    fn initialize(&mut self, x_dim: u32, y_dim: u32);

    /// Shows the whole world.
    fn render_world(&mut self, world: &dyn ReadOnlyWorld);

    /// Shows a line of narration.
    fn render_message(&mut self, message: &str);

    /// Shows the stats panel as ordered key/value pairs.
    fn render_info(&mut self, info: &[(String, usize)]);

    /// Shows an error.
    fn render_error(&mut self, message: &str);

    /// Called once after the game ends.
    fn render_finish(&mut self);
}

/// Sink that discards everything. Handy for headless runs and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUi;

impl UserInterface for NullUi {
    fn initialize(&mut self, _x_dim: u32, _y_dim: u32) {}

    fn render_world(&mut self, _world: &dyn ReadOnlyWorld) {}

    fn render_message(&mut self, _message: &str) {}

    fn render_info(&mut self, _info: &[(String, usize)]) {}

    fn render_error(&mut self, _message: &str) {}

    fn render_finish(&mut self) {}
}
