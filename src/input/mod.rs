//! # Input Module
//!
//! Where player-controlled agents get their moves from.
//!
//! The simulation only knows the [`InputSource`] contract. The console
//! front-end implements it on top of standard input, and [`ScriptedInput`]
//! replays a fixed list of moves for tests and headless runs.

pub mod commands;

pub use commands::*;

use crate::Direction;
use std::collections::VecDeque;

/// Source of directions for player-controlled agents.
///
/// Calls block until a direction is available; there is no timeout.
pub trait InputSource {
    /// Asks which way the agent labelled `agent_label` should move.
    fn input_direction(&mut self, agent_label: &str) -> Direction;
}

/// Input source that replays a queue of directions.
///
/// Once the queue runs dry every agent stays put. Every prompt is recorded
/// so tests can check who was asked, and in which order.
///
/// # Examples
///
/// ```
/// use zombies_vs_humans::{Direction, InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new(vec![Direction::Left]);
/// assert_eq!(input.input_direction("H0"), Direction::Left);
/// assert_eq!(input.input_direction("H0"), Direction::None);
/// assert_eq!(input.prompts().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    directions: VecDeque<Direction>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates an input source that will answer with `directions`, in order.
    pub fn new(directions: Vec<Direction>) -> Self {
        Self {
            directions: directions.into(),
            prompts: Vec::new(),
        }
    }

    /// Queues one more direction.
    pub fn push(&mut self, direction: Direction) {
        self.directions.push_back(direction);
    }

    /// Labels of the agents asked so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of directions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.directions.len()
    }
}

impl InputSource for ScriptedInput {
    fn input_direction(&mut self, agent_label: &str) -> Direction {
        self.prompts.push(agent_label.to_string());
        self.directions.pop_front().unwrap_or(Direction::None)
    }
}
