//! # Triangle Geometry
//!
//! Area from base and height, or from three sides via Heron's formula:
//!
//! ```text
//! s = (a + b + c) / 2
//! A = √(s(s − a)(s − b)(s − c))
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

const RIGHT_ANGLE_TOLERANCE: f64 = 1e-9;

/// A = (base × height) / 2
#[inline]
pub fn area_base_height(base: f64, height: f64) -> f64 {
    base * height / 2.0
}

#[inline]
pub fn perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

#[inline]
pub fn semi_perimeter(a: f64, b: f64, c: f64) -> f64 {
    perimeter(a, b, c) / 2.0
}

/// Check that all sides are positive and satisfy the strict triangle inequality.
pub fn validate_sides(a: f64, b: f64, c: f64) -> CalcResult<()> {
    for (field, value) in [("side_a", a), ("side_b", b), ("side_c", c)] {
        if value.is_nan() || value <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Side length must be positive",
            ));
        }
    }
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(CalcError::invalid_input(
            "sides",
            format!("{}, {}, {}", a, b, c),
            "Sides violate the triangle inequality (each pair must sum to more than the third side)",
        ));
    }
    Ok(())
}

/// Area from three sides. Validates the sides first.
///
/// # Example
/// ```rust
/// use calc_core::formulas::triangle::heron_area;
///
/// assert_eq!(heron_area(3.0, 4.0, 5.0).unwrap(), 6.0);
/// assert!(heron_area(1.0, 1.0, 10.0).is_err());
/// ```
pub fn heron_area(a: f64, b: f64, c: f64) -> CalcResult<f64> {
    validate_sides(a, b, c)?;
    let s = semi_perimeter(a, b, c);
    Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
}

/// Classification by side equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideKind {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification by largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleKind {
    Acute,
    Right,
    Obtuse,
}

impl SideKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SideKind::Equilateral => "Equilateral",
            SideKind::Isosceles => "Isosceles",
            SideKind::Scalene => "Scalene",
        }
    }
}

impl AngleKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            AngleKind::Acute => "Acute",
            AngleKind::Right => "Right",
            AngleKind::Obtuse => "Obtuse",
        }
    }
}

/// Classify a valid triangle by sides and by its largest angle.
pub fn classify(a: f64, b: f64, c: f64) -> (SideKind, AngleKind) {
    let side_kind = if a == b && b == c {
        SideKind::Equilateral
    } else if a == b || b == c || a == c {
        SideKind::Isosceles
    } else {
        SideKind::Scalene
    };

    let mut sides = [a, b, c];
    sides.sort_by(|x, y| x.total_cmp(y));
    let [x, y, z] = sides;
    let legs = x * x + y * y;
    let hyp = z * z;

    let angle_kind = if ((legs - hyp) / hyp).abs() < RIGHT_ANGLE_TOLERANCE {
        AngleKind::Right
    } else if legs > hyp {
        AngleKind::Acute
    } else {
        AngleKind::Obtuse
    };

    (side_kind, angle_kind)
}

/// Interior angles in degrees, opposite sides a, b, c (law of cosines).
pub fn angles_degrees(a: f64, b: f64, c: f64) -> (f64, f64, f64) {
    let angle = |opp: f64, s1: f64, s2: f64| {
        ((s1 * s1 + s2 * s2 - opp * opp) / (2.0 * s1 * s2))
            .clamp(-1.0, 1.0)
            .acos()
            .to_degrees()
    };
    (angle(a, b, c), angle(b, a, c), angle(c, a, b))
}
