//! # Utilities Module
//!
//! Toroidal axis arithmetic and the seeded shuffle used by the scheduler.

pub mod math;
pub mod shuffle;

pub use math::*;
pub use shuffle::*;
