//! # Toroidal Arithmetic
//!
//! Per-axis helpers for a dimension that wraps around.

/// Wraps `value` into `[0, dim)`.
///
/// # Examples
///
/// ```
/// use zombies_vs_humans::wrap_axis;
///
/// assert_eq!(wrap_axis(-1, 5), 4);
/// assert_eq!(wrap_axis(12, 5), 2);
/// assert_eq!(wrap_axis(3, 5), 3);
/// ```
pub fn wrap_axis(value: i32, dim: i32) -> i32 {
    value.rem_euclid(dim)
}

/// Signed displacement from `from` to `to` along one wrapping axis.
///
/// The wrap-around path is taken only when it is strictly shorter than the
/// direct one, so at exactly half the dimension the direct sign is kept.
pub fn shortest_axis_delta(from: i32, to: i32, dim: i32) -> i32 {
    let direct = wrap_axis(to, dim) - wrap_axis(from, dim);
    let wrapped = dim - direct.abs();
    if wrapped < direct.abs() {
        -direct.signum() * wrapped
    } else {
        direct
    }
}

/// Minimal distance between two positions along one wrapping axis.
pub fn axis_distance(a: i32, b: i32, dim: i32) -> i32 {
    shortest_axis_delta(a, b, dim).abs()
}
