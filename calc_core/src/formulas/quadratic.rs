//! # Quadratic Equations
//!
//! Roots of `ax² + bx + c = 0` for `a ≠ 0`.
//!
//! ```text
//! Δ = b² − 4ac
//! Δ ≥ 0:  x = (−b ± √Δ) / 2a
//! Δ < 0:  x = −b/2a ± i·√(−Δ)/|2a|
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A root as a real/imaginary pair. Real roots have `imaginary == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub real: f64,
    pub imaginary: f64,
}

impl Root {
    pub fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Format with a fixed number of decimals, e.g. `-1.50 + 2.00i`.
    pub fn format(&self, decimals: usize) -> String {
        let real = round_to(self.real, decimals);
        if self.is_real() {
            format!("{:.*}", decimals, real)
        } else {
            let sign = if self.imaginary < 0.0 { '−' } else { '+' };
            format!("{:.*} {} {:.*}i", decimals, real, sign, decimals, self.imaginary.abs())
        }
    }
}

/// Round to `decimals` places, with no negative zero.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(4))
    }
}

/// Roots plus the shape of the parabola.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSolution {
    pub discriminant: f64,
    pub root1: Root,
    pub root2: Root,
    pub has_real_roots: bool,
    pub has_complex_roots: bool,
    /// Vertex x-coordinate, also the axis of symmetry
    pub vertex_x: f64,
    /// Vertex y-coordinate
    pub vertex_y: f64,
}

/// b² − 4ac
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve `ax² + bx + c = 0`. The caller must ensure `a ≠ 0`.
///
/// `root1` takes the `+√Δ` branch (or the positive imaginary part when the
/// roots are complex).
///
/// # Example
/// ```rust
/// use calc_core::formulas::quadratic::solve_quadratic;
///
/// let s = solve_quadratic(1.0, 3.0, -4.0);
/// assert_eq!(s.discriminant, 25.0);
/// assert_eq!((s.root1.real, s.root2.real), (1.0, -4.0));
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticSolution {
    let d = discriminant(a, b, c);
    let two_a = 2.0 * a;
    let vertex_x = -b / two_a;
    let vertex_y = a * vertex_x * vertex_x + b * vertex_x + c;

    let (root1, root2) = if d >= 0.0 {
        let sqrt_d = d.sqrt();
        (
            Root {
                real: (-b + sqrt_d) / two_a,
                imaginary: 0.0,
            },
            Root {
                real: (-b - sqrt_d) / two_a,
                imaginary: 0.0,
            },
        )
    } else {
        let imaginary = (-d).sqrt() / two_a.abs();
        (
            Root {
                real: vertex_x,
                imaginary,
            },
            Root {
                real: vertex_x,
                imaginary: -imaginary,
            },
        )
    };

    QuadraticSolution {
        discriminant: d,
        root1,
        root2,
        has_real_roots: d >= 0.0,
        has_complex_roots: d < 0.0,
        vertex_x,
        vertex_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_never_shows_negative_zero() {
        let tiny = Root { real: -1e-17, imaginary: 0.0 };
        assert_eq!(tiny.format(2), "0.00");
        let complex = Root { real: -0.004, imaginary: 1.0 };
        assert_eq!(complex.format(2), "0.00 + 1.00i");
        let real = Root { real: -1.25, imaginary: 0.0 };
        assert_eq!(real.format(1), "-1.3");
    }

    #[test]
    fn test_distinct_real_roots() {
        let s = solve_quadratic(1.0, 3.0, -4.0);
        assert_eq!(s.discriminant, 25.0);
        assert_eq!(s.root1.real, 1.0);
        assert_eq!(s.root2.real, -4.0);
        assert!(s.has_real_roots);
        assert!(!s.has_complex_roots);
    }

    #[test]
    fn test_complex_roots() {
        let s = solve_quadratic(1.0, 0.0, 1.0);
        assert_eq!(s.discriminant, -4.0);
        assert!(s.has_complex_roots);
        assert!(!s.has_real_roots);
        assert_eq!(s.root1.real, 0.0);
        assert_eq!(s.root1.imaginary, 1.0);
        assert_eq!(s.root2.imaginary, -1.0);
        assert_eq!(s.root1.format(0), "0 + 1i");
        assert_eq!(s.root2.format(0), "0 − 1i");
    }

    #[test]
    fn test_repeated_root() {
        let s = solve_quadratic(1.0, -4.0, 4.0);
        assert_eq!(s.discriminant, 0.0);
        assert_eq!(s.root1, s.root2);
        assert_eq!(s.root1.real, 2.0);
    }

    #[test]
    fn test_negative_leading_coefficient_keeps_positive_imaginary_first() {
        let s = solve_quadratic(-2.0, 4.0, -10.0);
        assert!(s.has_complex_roots);
        assert!(s.root1.imaginary > 0.0);
        assert_eq!(s.root1.real, 1.0);
        assert_eq!(s.root1.imaginary, 2.0);
    }

    #[test]
    fn test_vertex() {
        let s = solve_quadratic(1.0, -4.0, 3.0);
        assert_eq!(s.vertex_x, 2.0);
        assert_eq!(s.vertex_y, -1.0);
    }
}
