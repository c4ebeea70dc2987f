//! # Triangle Calculator
//!
//! Area from base and height, or from three sides via Heron's formula. The
//! three-sides mode also reports perimeter, interior angles and the
//! side/angle classification.

use serde::{Deserialize, Serialize};

use super::{highlight, row, section, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, trim_float, unknown_field, Field, FieldKind};
use crate::formulas::triangle::{
    angles_degrees, area_base_height, classify, heron_area, perimeter, semi_perimeter, AngleKind,
    SideKind,
};
use crate::settings::NumberFormat;
use crate::template::Row;

const MODE_CHOICES: &[&str] = &["base-height", "three-sides"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriangleMode {
    #[default]
    BaseHeight,
    ThreeSides,
}

impl TriangleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleMode::BaseHeight => "base-height",
            TriangleMode::ThreeSides => "three-sides",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "base-height" | "base" | "bh" => Some(TriangleMode::BaseHeight),
            "three-sides" | "sides" | "sss" | "heron" => Some(TriangleMode::ThreeSides),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleInput {
    pub mode: TriangleMode,
    pub base: f64,
    pub height: f64,
    pub side_a: f64,
    pub side_b: f64,
    pub side_c: f64,
}

impl Default for TriangleInput {
    fn default() -> Self {
        TriangleInput {
            mode: TriangleMode::BaseHeight,
            base: 5.0,
            height: 4.0,
            side_a: 3.0,
            side_b: 4.0,
            side_c: 5.0,
        }
    }
}

impl TriangleInput {
    /// Measurements used by the active mode.
    pub fn describe(&self) -> String {
        match self.mode {
            TriangleMode::BaseHeight => {
                format!("base {} × height {}", trim_float(self.base), trim_float(self.height))
            }
            TriangleMode::ThreeSides => format!(
                "sides {}, {}, {}",
                trim_float(self.side_a),
                trim_float(self.side_b),
                trim_float(self.side_c)
            ),
        }
    }
}

fn positive(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", what),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidesDetail {
    pub perimeter: f64,
    pub semi_perimeter: f64,
    pub side_kind: SideKind,
    pub angle_kind: AngleKind,
    /// Interior angles opposite sides a, b, c in degrees
    pub angles: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleResult {
    pub mode: TriangleMode,
    pub area: f64,
    /// Present in three-sides mode
    pub sides: Option<SidesDetail>,
}

pub fn calculate(input: &TriangleInput) -> CalcResult<TriangleResult> {
    match input.mode {
        TriangleMode::BaseHeight => {
            positive("base", input.base, "Base")?;
            positive("height", input.height, "Height")?;
            Ok(TriangleResult {
                mode: input.mode,
                area: area_base_height(input.base, input.height),
                sides: None,
            })
        }
        TriangleMode::ThreeSides => {
            let (a, b, c) = (input.side_a, input.side_b, input.side_c);
            let area = heron_area(a, b, c)?;
            let (side_kind, angle_kind) = classify(a, b, c);
            let (alpha, beta, gamma) = angles_degrees(a, b, c);
            tracing::debug!(input = %input.describe(), area, "triangle calculated");
            Ok(TriangleResult {
                mode: input.mode,
                area,
                sides: Some(SidesDetail {
                    perimeter: perimeter(a, b, c),
                    semi_perimeter: semi_perimeter(a, b, c),
                    side_kind,
                    angle_kind,
                    angles: [alpha, beta, gamma],
                }),
            })
        }
    }
}

pub struct TriangleCalculator;

impl Calculator for TriangleCalculator {
    type Input = TriangleInput;
    type Output = TriangleResult;

    const KIND: CalculatorKind = CalculatorKind::Triangle;

    fn fields(input: &TriangleInput) -> Vec<Field> {
        let mode = Field::new("mode", "Mode", FieldKind::Choice(MODE_CHOICES), input.mode.as_str());
        match input.mode {
            TriangleMode::BaseHeight => vec![
                mode,
                Field::number("base", "Base", input.base),
                Field::number("height", "Height", input.height),
            ],
            TriangleMode::ThreeSides => vec![
                mode,
                Field::number("side_a", "Side a", input.side_a),
                Field::number("side_b", "Side b", input.side_b),
                Field::number("side_c", "Side c", input.side_c),
            ],
        }
    }

    fn set_field(input: &mut TriangleInput, key: &str, text: &str) -> CalcResult<()> {
        let d = TriangleInput::default();
        match key {
            "mode" => input.mode = TriangleMode::parse(text).unwrap_or(d.mode),
            "base" => input.base = parse_f64_or(text, d.base),
            "height" => input.height = parse_f64_or(text, d.height),
            "side_a" => input.side_a = parse_f64_or(text, d.side_a),
            "side_b" => input.side_b = parse_f64_or(text, d.side_b),
            "side_c" => input.side_c = parse_f64_or(text, d.side_c),
            _ => return Err(unknown_field("triangle", key)),
        }
        Ok(())
    }

    fn calculate(input: &TriangleInput) -> CalcResult<TriangleResult> {
        calculate(input)
    }

    fn result_rows(result: &TriangleResult, fmt: &NumberFormat) -> Vec<Row> {
        let mut rows = vec![highlight("Area", fmt.number(result.area))];
        if let Some(sides) = &result.sides {
            rows.push(row("Perimeter", fmt.number(sides.perimeter)));
            rows.push(row("Semi-perimeter", fmt.number(sides.semi_perimeter)));
            rows.push(row(
                "Type",
                format!(
                    "{} {}",
                    sides.side_kind.display_name(),
                    sides.angle_kind.display_name().to_lowercase()
                ),
            ));
            rows.push(section("Angles"));
            for (name, angle) in ["α (opposite a)", "β (opposite b)", "γ (opposite c)"]
                .iter()
                .zip(sides.angles)
            {
                rows.push(row(*name, format!("{}°", fmt.number(angle))));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(a: f64, b: f64, c: f64) -> TriangleInput {
        TriangleInput {
            mode: TriangleMode::ThreeSides,
            side_a: a,
            side_b: b,
            side_c: c,
            ..Default::default()
        }
    }

    #[test]
    fn test_base_height() {
        let result = calculate(&TriangleInput::default()).unwrap();
        assert_eq!(result.area, 10.0);
        assert!(result.sides.is_none());
    }

    #[test]
    fn test_heron_right_triangle() {
        let result = calculate(&sides(3.0, 4.0, 5.0)).unwrap();
        assert!((result.area - 6.0).abs() < 1e-9);
        let detail = result.sides.unwrap();
        assert_eq!(detail.perimeter, 12.0);
        assert_eq!(detail.side_kind, SideKind::Scalene);
        assert_eq!(detail.angle_kind, AngleKind::Right);
        assert!((detail.angles[2] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_inequality_rejected() {
        let err = calculate(&sides(1.0, 1.0, 10.0)).unwrap_err();
        assert!(err.is_user_correctable());
    }

    #[test]
    fn test_non_positive_base() {
        let input = TriangleInput {
            base: 0.0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("base"));
    }

    #[test]
    fn test_fields_follow_mode() {
        let mut input = TriangleInput::default();
        assert_eq!(TriangleCalculator::fields(&input).len(), 3);
        TriangleCalculator::set_field(&mut input, "mode", "three-sides").unwrap();
        let fields = TriangleCalculator::fields(&input);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].cycle_choice(), Some("base-height"));
        assert_eq!(input.describe(), "sides 3, 4, 5");
    }
}
