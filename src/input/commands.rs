//! # Direction Keys
//!
//! Key bindings used by the console front-end to read a direction.
//!
//! The layout follows a keyboard block and the numeric keypad:
//!
//! ```text
//!   q w e      7 8 9
//!   a s d  or  4 5 6
//!   z x c      1 2 3
//! ```

use crate::Direction;

/// Help text shown when asking a player for a direction.
pub const DIRECTION_HELP: [&str; 3] = [
    "   Q W E          7 8 9",
    "   A S D    or    4 5 6",
    "   Z X C          1 2 3",
];

/// Maps a single key to a direction.
pub fn direction_for_key(key: char) -> Option<Direction> {
    let direction = match key.to_ascii_lowercase() {
        'w' | '8' => Direction::Up,
        'q' | '7' => Direction::UpLeft,
        'a' | '4' => Direction::Left,
        'z' | '1' => Direction::DownLeft,
        'x' | '2' => Direction::Down,
        'c' | '3' => Direction::DownRight,
        'd' | '6' => Direction::Right,
        'e' | '9' => Direction::UpRight,
        's' | '5' => Direction::None,
        _ => return None,
    };
    Some(direction)
}

/// Parses a line of player input into a direction.
///
/// Only single-key answers are accepted, surrounding whitespace aside.
///
/// # Examples
///
/// ```
/// use zombies_vs_humans::{parse_direction, Direction};
///
/// assert_eq!(parse_direction(" q\n"), Some(Direction::UpLeft));
/// assert_eq!(parse_direction("6"), Some(Direction::Right));
/// assert_eq!(parse_direction("up"), None);
/// ```
pub fn parse_direction(line: &str) -> Option<Direction> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => direction_for_key(key),
        _ => None,
    }
}
