//! # Zombies vs Humans
//!
//! A turn-based simulation of zombies hunting humans on a toroidal grid.
//!
//! ## Architecture Overview
//!
//! The crate is split into a small simulation core and thin collaborators:
//!
//! - **Game**: toroidal world geometry, agents, movement strategies and the
//!   turn scheduler that drives them
//! - **Generation**: game configuration, validation and initial agent placement
//! - **Input**: the input source contract used by player-controlled agents
//! - **Rendering**: the render/notify sink contract plus console and JSON front-ends
//!
//! The core never reaches for global state. The scheduler receives its random
//! number generator at construction and its sink and input source on every call,
//! so a whole game can be replayed headless from a seed.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the simulation.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// One or more configuration rules were violated
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// The one-to-one mapping between occupied cells and agents was broken
    #[error("World invariant violated: {0}")]
    InvariantViolation(String),

    /// An agent ID outside the roster was looked up
    #[error("Unknown agent: {0}")]
    UnknownAgent(AgentId),
}

/// Result type used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Version information for the simulation.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default simulation parameters.
pub mod config {
    /// Default world width in cells
    pub const DEFAULT_X_DIM: u32 = 20;

    /// Default world height in cells
    pub const DEFAULT_Y_DIM: u32 = 20;

    /// Default number of zombies
    pub const DEFAULT_ZOMBIES: u32 = 10;

    /// Default number of humans
    pub const DEFAULT_HUMANS: u32 = 30;

    /// Default turn budget
    pub const DEFAULT_TURNS: u32 = 1000;
}
