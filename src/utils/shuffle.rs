//! # Fisher-Yates Shuffle
//!
//! Uniform in-place permutation driven by a caller-supplied RNG.

use rand::Rng;

/// Shuffles `items` in place.
///
/// Walks `i` from the last index down to 1 and swaps element `i` with a
/// uniformly chosen element in `[0, i]`. The sequence of draws is fixed, so the
/// same seed always yields the same permutation.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use zombies_vs_humans::fisher_yates_shuffle;
///
/// let mut a: Vec<u32> = (0..10).collect();
/// let mut b = a.clone();
/// fisher_yates_shuffle(&mut a, &mut StdRng::seed_from_u64(7));
/// fisher_yates_shuffle(&mut b, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn fisher_yates_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
