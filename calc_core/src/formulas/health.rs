//! # Health Formulas
//!
//! Body mass index and the WHO weight-status bands.
//!
//! | BMI          | Category             |
//! |--------------|----------------------|
//! | < 16.5       | Severely Underweight |
//! | 16.5 – 18.5  | Underweight          |
//! | 18.5 – 25    | Normal               |
//! | 25 – 30      | Overweight           |
//! | 30 – 35      | Obese Class I        |
//! | 35 – 40      | Obese Class II       |
//! | ≥ 40         | Obese Class III      |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound of the normal band
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// Upper bound used for the healthy weight range
pub const BMI_NORMAL_MAX: f64 = 24.9;

const KG_PER_LB: f64 = 0.453_592_37;
const M_PER_IN: f64 = 0.0254;

/// Body mass index, `weight / height²`.
///
/// Returns 0 if either argument is not positive, so a half-filled form
/// renders as an empty gauge instead of an error.
///
/// # Example
/// ```rust
/// use calc_core::formulas::health::bmi;
///
/// assert!((bmi(70.0, 1.75) - 22.857).abs() < 0.001);
/// assert_eq!(bmi(70.0, 0.0), 0.0);
/// ```
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    if weight_kg <= 0.0 || height_m <= 0.0 {
        return 0.0;
    }
    weight_kg / (height_m * height_m)
}

/// Weight status band for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClassI,
    ObeseClassII,
    ObeseClassIII,
}

impl BmiCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese Class I",
            BmiCategory::ObeseClassII => "Obese Class II",
            BmiCategory::ObeseClassIII => "Obese Class III",
        }
    }

    /// Display color (hex) for result gauges and the PDF badge
    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "#1d4ed8",
            BmiCategory::Underweight => "#3b82f6",
            BmiCategory::Normal => "#16a34a",
            BmiCategory::Overweight => "#eab308",
            BmiCategory::ObeseClassI => "#f97316",
            BmiCategory::ObeseClassII => "#dc2626",
            BmiCategory::ObeseClassIII => "#991b1b",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Piecewise lookup over the fixed thresholds 16.5, 18.5, 25, 30, 35, 40.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 16.5 {
        BmiCategory::SeverelyUnderweight
    } else if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClassI
    } else if bmi < 40.0 {
        BmiCategory::ObeseClassII
    } else {
        BmiCategory::ObeseClassIII
    }
}

/// Hex color for a BMI value.
pub fn bmi_color(bmi: f64) -> &'static str {
    bmi_category(bmi).color()
}

/// Weights (kg) that put a person of this height in the normal band.
pub fn healthy_weight_range(height_m: f64) -> (f64, f64) {
    let h2 = height_m * height_m;
    (BMI_NORMAL_MIN * h2, BMI_NORMAL_MAX * h2)
}

pub fn pounds_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / KG_PER_LB
}

pub fn inches_to_meters(inches: f64) -> f64 {
    inches * M_PER_IN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal() {
        let value = bmi(70.0, 1.75);
        assert!((value - 22.86).abs() < 0.01, "BMI = {}", value);
        assert_eq!(bmi_category(value), BmiCategory::Normal);
        assert_eq!(bmi_category(value).display_name(), "Normal");
    }

    #[test]
    fn test_bmi_non_positive_inputs() {
        assert_eq!(bmi(0.0, 1.8), 0.0);
        assert_eq!(bmi(-5.0, 1.8), 0.0);
        assert_eq!(bmi(80.0, -1.0), 0.0);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(bmi_category(16.4), BmiCategory::SeverelyUnderweight);
        assert_eq!(bmi_category(16.5), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::ObeseClassI);
        assert_eq!(bmi_category(35.0), BmiCategory::ObeseClassII);
        assert_eq!(bmi_category(40.0), BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_color_follows_category() {
        assert_eq!(bmi_color(22.0), BmiCategory::Normal.color());
        assert_ne!(bmi_color(22.0), bmi_color(31.0));
    }

    #[test]
    fn test_healthy_range() {
        let (lo, hi) = healthy_weight_range(1.75);
        assert!((lo - 56.66).abs() < 0.01);
        assert!((hi - 76.26).abs() < 0.01);
    }

    #[test]
    fn test_imperial_conversion() {
        // 154 lb, 69 in is BMI 22.7
        let value = bmi(pounds_to_kg(154.0), inches_to_meters(69.0));
        assert!((value - 22.74).abs() < 0.01, "BMI = {}", value);
        assert!((kg_to_pounds(pounds_to_kg(154.0)) - 154.0).abs() < 1e-9);
    }
}
