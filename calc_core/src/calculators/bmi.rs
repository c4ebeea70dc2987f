//! # BMI Calculator
//!
//! Body mass index from weight and height in metric (kg, cm) or imperial
//! (lb, in) units, with the weight-status band and the healthy weight range
//! for the given height.

use serde::{Deserialize, Serialize};

use super::{highlight, row, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, unknown_field, Field, FieldKind};
use crate::formulas::health::{
    bmi, bmi_category, healthy_weight_range, inches_to_meters, kg_to_pounds, pounds_to_kg, BmiCategory,
};
use crate::settings::{NumberFormat, Settings, UnitSystem};
use crate::template::Row;

const UNIT_CHOICES: &[&str] = &["metric", "imperial"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub units: UnitSystem,

    /// Weight in kg (metric) or lb (imperial)
    pub weight: f64,

    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
}

impl Default for BmiInput {
    fn default() -> Self {
        BmiInput {
            units: UnitSystem::Metric,
            weight: 70.0,
            height: 175.0,
        }
    }
}

impl BmiInput {
    /// Default weight and height expressed in `units`.
    pub fn for_units(units: UnitSystem) -> Self {
        match units {
            UnitSystem::Metric => BmiInput::default(),
            UnitSystem::Imperial => BmiInput {
                units,
                weight: 154.0,
                height: 69.0,
            },
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight.to_string(),
                "Weight must be positive",
            ));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }

    pub fn weight_kg(&self) -> f64 {
        match self.units {
            UnitSystem::Metric => self.weight,
            UnitSystem::Imperial => pounds_to_kg(self.weight),
        }
    }

    pub fn height_m(&self) -> f64 {
        match self.units {
            UnitSystem::Metric => self.height / 100.0,
            UnitSystem::Imperial => inches_to_meters(self.height),
        }
    }

    fn weight_unit(&self) -> &'static str {
        match self.units {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    fn height_unit(&self) -> &'static str {
        match self.units {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Hex color of the category band
    pub color: String,
    pub units: UnitSystem,
    /// Healthy weight range for this height, in the input's weight unit
    pub healthy_weight_min: f64,
    pub healthy_weight_max: f64,
}

pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let value = bmi(input.weight_kg(), input.height_m());
    let category = bmi_category(value);
    let (min_kg, max_kg) = healthy_weight_range(input.height_m());
    let (healthy_weight_min, healthy_weight_max) = match input.units {
        UnitSystem::Metric => (min_kg, max_kg),
        UnitSystem::Imperial => (kg_to_pounds(min_kg), kg_to_pounds(max_kg)),
    };

    Ok(BmiResult {
        bmi: value,
        category,
        color: category.color().to_string(),
        units: input.units,
        healthy_weight_min,
        healthy_weight_max,
    })
}

pub struct BmiCalculator;

impl Calculator for BmiCalculator {
    type Input = BmiInput;
    type Output = BmiResult;

    const KIND: CalculatorKind = CalculatorKind::Bmi;

    fn configure(input: &mut BmiInput, settings: &Settings) {
        if settings.unit_system != input.units {
            *input = BmiInput::for_units(settings.unit_system);
        }
    }

    fn fields(input: &BmiInput) -> Vec<Field> {
        let (weight_label, height_label) = match input.units {
            UnitSystem::Metric => ("Weight (kg)", "Height (cm)"),
            UnitSystem::Imperial => ("Weight (lb)", "Height (in)"),
        };
        vec![
            Field::new("units", "Units", FieldKind::Choice(UNIT_CHOICES), input.units.as_str()),
            Field::number("weight", weight_label, input.weight),
            Field::number("height", height_label, input.height),
        ]
    }

    fn set_field(input: &mut BmiInput, key: &str, text: &str) -> CalcResult<()> {
        let d = BmiInput::for_units(input.units);
        match key {
            "units" => input.units = UnitSystem::parse(text).unwrap_or(input.units),
            "weight" => input.weight = parse_f64_or(text, d.weight),
            "height" => input.height = parse_f64_or(text, d.height),
            _ => return Err(unknown_field("bmi", key)),
        }
        Ok(())
    }

    fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
        calculate(input)
    }

    fn input_rows(input: &BmiInput, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            row("Units", input.units.as_str()),
            row("Weight", format!("{} {}", fmt.number_with(input.weight, 1), input.weight_unit())),
            row("Height", format!("{} {}", fmt.number_with(input.height, 1), input.height_unit())),
        ]
    }

    fn result_rows(result: &BmiResult, fmt: &NumberFormat) -> Vec<Row> {
        let unit = match result.units {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        };
        vec![
            highlight("BMI", fmt.number_with(result.bmi, 1)),
            row("Category", result.category.display_name()),
            row(
                "Healthy weight",
                format!(
                    "{} – {} {}",
                    fmt.number_with(result.healthy_weight_min, 1),
                    fmt.number_with(result.healthy_weight_max, 1),
                    unit
                ),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        let result = calculate(&BmiInput::default()).unwrap();
        assert!((result.bmi - 22.857).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.color, BmiCategory::Normal.color());
    }

    #[test]
    fn test_imperial_matches_metric() {
        let input = BmiInput {
            units: UnitSystem::Imperial,
            weight: 154.0,
            height: 69.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.bmi - 22.74).abs() < 0.01);
        assert!(result.healthy_weight_min > 120.0 && result.healthy_weight_max < 170.0);
    }

    #[test]
    fn test_non_positive_rejected() {
        let input = BmiInput {
            height: 0.0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("height"));

        let input = BmiInput {
            weight: -70.0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("weight"));
    }

    #[test]
    fn test_settings_select_imperial_defaults() {
        let mut input = BmiInput::default();
        let settings = Settings {
            unit_system: UnitSystem::Imperial,
            ..Settings::default()
        };
        BmiCalculator::configure(&mut input, &settings);
        assert_eq!(input.units, UnitSystem::Imperial);
        assert_eq!(BmiCalculator::fields(&input)[1].label, "Weight (lb)");
    }

    #[test]
    fn test_unit_field_parses_or_falls_back() {
        let mut input = BmiInput::default();
        BmiCalculator::set_field(&mut input, "units", "Imperial").unwrap();
        assert_eq!(input.units, UnitSystem::Imperial);
        BmiCalculator::set_field(&mut input, "units", "cubits").unwrap();
        assert_eq!(input.units, UnitSystem::Imperial);
    }

    #[test]
    fn test_bad_units_keep_configured_system() {
        let settings = Settings {
            unit_system: UnitSystem::Imperial,
            ..Settings::default()
        };
        let mut input = BmiInput::default();
        BmiCalculator::configure(&mut input, &settings);
        BmiCalculator::set_field(&mut input, "units", "stone").unwrap();
        assert_eq!(input.units, UnitSystem::Imperial);
        BmiCalculator::set_field(&mut input, "weight", "heavy").unwrap();
        assert_eq!(input.weight, 154.0);
    }
}
