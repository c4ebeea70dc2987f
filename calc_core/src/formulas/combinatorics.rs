//! # Permutations and Combinations
//!
//! Factorial-ratio formulas in `f64`. 170! is the largest factorial that fits in
//! an `f64`, so callers must keep `n <= MAX_FACTORIAL_N` and `0 <= r <= n`.
//! These functions do not guard against either.

/// Largest `n` whose factorial is finite in `f64`
pub const MAX_FACTORIAL_N: u32 = 170;

/// n! as a floating-point product.
pub fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Ordered selections: nPr = n! / (n − r)!
///
/// # Example
/// ```rust
/// use calc_core::formulas::combinatorics::permutation;
///
/// assert_eq!(permutation(5, 2), 20.0);
/// ```
pub fn permutation(n: u32, r: u32) -> f64 {
    factorial(n) / factorial(n - r)
}

/// Unordered selections: nCr = n! / (r! (n − r)!)
///
/// # Example
/// ```rust
/// use calc_core::formulas::combinatorics::combination;
///
/// assert_eq!(combination(5, 2), 10.0);
/// ```
pub fn combination(n: u32, r: u32) -> f64 {
    factorial(n) / (factorial(r) * factorial(n - r))
}
