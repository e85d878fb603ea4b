//! # Game Module
//!
//! Simulation core: coordinates, directions, the toroidal world, agents,
//! their movement strategies and the turn scheduler.
//!
//! This module contains the fundamental building blocks of the simulation:
//! - Toroidal world geometry and occupancy bookkeeping
//! - Agents and their per-turn resolution
//! - AI and player-driven movement strategies
//! - The scheduler that orders turns and tracks the population

pub mod agent;
pub mod movement;
pub mod state;
pub mod world;

pub use agent::*;
pub use movement::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an agent. Equal to the agent's slot in the world roster.
pub type AgentId = usize;

/// A position in the world or a displacement between two positions.
///
/// Coordinates carry no bounds of their own; the [`World`] wraps them onto
/// the torus whenever they are used for an occupancy query.
///
/// # Examples
///
/// ```
/// use zombies_vs_humans::Coord;
///
/// let pos = Coord::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// assert_eq!(Coord::new(-3, 4).signum(), Coord::new(-1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Reduces each axis to its sign (-1, 0 or 1).
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Chebyshev length of this coordinate read as a vector.
    pub fn chebyshev_len(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl std::ops::Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Coord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Movement directions. `None` means staying in place.
///
/// The y axis grows downward, matching how the world is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    None,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
    Right,
    UpRight,
}

impl Direction {
    /// Converts a direction to a unit offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombies_vs_humans::{Coord, Direction};
    ///
    /// assert_eq!(Direction::Up.to_delta(), Coord::new(0, -1));
    /// assert_eq!(Direction::None.to_delta(), Coord::new(0, 0));
    /// ```
    pub fn to_delta(self) -> Coord {
        match self {
            Direction::None => Coord::new(0, 0),
            Direction::Up => Coord::new(0, -1),
            Direction::UpLeft => Coord::new(-1, -1),
            Direction::Left => Coord::new(-1, 0),
            Direction::DownLeft => Coord::new(-1, 1),
            Direction::Down => Coord::new(0, 1),
            Direction::DownRight => Coord::new(1, 1),
            Direction::Right => Coord::new(1, 0),
            Direction::UpRight => Coord::new(1, -1),
        }
    }

    /// Maps an arbitrary vector to a direction by the sign of each axis.
    ///
    /// Every vector maps to one of the 9 values, so this never fails.
    pub fn from_vector(vector: Coord) -> Direction {
        match (vector.x.signum(), vector.y.signum()) {
            (0, -1) => Direction::Up,
            (-1, -1) => Direction::UpLeft,
            (-1, 0) => Direction::Left,
            (-1, 1) => Direction::DownLeft,
            (0, 1) => Direction::Down,
            (1, 1) => Direction::DownRight,
            (1, 0) => Direction::Right,
            (1, -1) => Direction::UpRight,
            _ => Direction::None,
        }
    }

    /// Whether this direction moves along both axes at once.
    pub fn is_diagonal(self) -> bool {
        let delta = self.to_delta();
        delta.x != 0 && delta.y != 0
    }

    /// Horizontal component of this direction.
    pub fn horizontal(self) -> Direction {
        Direction::from_vector(Coord::new(self.to_delta().x, 0))
    }

    /// Vertical component of this direction.
    pub fn vertical(self) -> Direction {
        Direction::from_vector(Coord::new(0, self.to_delta().y))
    }

    /// Returns the 8 directions that actually move.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::Up,
            Direction::UpLeft,
            Direction::Left,
            Direction::DownLeft,
            Direction::Down,
            Direction::DownRight,
            Direction::Right,
            Direction::UpRight,
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
