//! # Dog Age Calculator

use serde::{Deserialize, Serialize};

use super::{highlight, row, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, trim_float, unknown_field, Field};
use crate::formulas::fun::dog_to_human_years;
use crate::settings::NumberFormat;
use crate::template::Row;

/// Oldest accepted dog age
pub const MAX_DOG_YEARS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogAgeInput {
    pub dog_years: f64,
}

impl Default for DogAgeInput {
    fn default() -> Self {
        DogAgeInput { dog_years: 3.0 }
    }
}

impl DogAgeInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.dog_years.is_nan() || self.dog_years < 0.0 || self.dog_years > MAX_DOG_YEARS {
            return Err(CalcError::invalid_input(
                "dog_years",
                self.dog_years.to_string(),
                format!("Dog age must be between 0 and {} years", MAX_DOG_YEARS),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogAgeResult {
    pub dog_years: f64,
    pub human_years: f64,
    pub life_stage: String,
}

fn life_stage(dog_years: f64) -> &'static str {
    if dog_years < 1.0 {
        "Puppy"
    } else if dog_years < 3.0 {
        "Young adult"
    } else if dog_years < 8.0 {
        "Adult"
    } else {
        "Senior"
    }
}

pub fn calculate(input: &DogAgeInput) -> CalcResult<DogAgeResult> {
    input.validate()?;
    Ok(DogAgeResult {
        dog_years: input.dog_years,
        human_years: dog_to_human_years(input.dog_years),
        life_stage: life_stage(input.dog_years).to_string(),
    })
}

pub struct DogAgeCalculator;

impl Calculator for DogAgeCalculator {
    type Input = DogAgeInput;
    type Output = DogAgeResult;

    const KIND: CalculatorKind = CalculatorKind::DogAge;

    fn fields(input: &DogAgeInput) -> Vec<Field> {
        vec![Field::number("dog_years", "Dog's age (years)", input.dog_years)]
    }

    fn set_field(input: &mut DogAgeInput, key: &str, text: &str) -> CalcResult<()> {
        match key {
            "dog_years" => input.dog_years = parse_f64_or(text, DogAgeInput::default().dog_years),
            _ => return Err(unknown_field("dog-age", key)),
        }
        Ok(())
    }

    fn calculate(input: &DogAgeInput) -> CalcResult<DogAgeResult> {
        calculate(input)
    }

    fn result_rows(result: &DogAgeResult, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            highlight("Human years", fmt.number_with(result.human_years, 1)),
            row("Dog years", trim_float(result.dog_years)),
            row("Life stage", result.life_stage.as_str()),
        ]
    }
}
