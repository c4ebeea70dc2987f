//! # Age Calculator
//!
//! Calendar-aware age between a birth date and a reference date, plus the
//! next birthday.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{highlight, row, section, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_date, unknown_field, Field, DATE_FORMAT};
use crate::formulas::dates::{age_breakdown, days_between, next_birthday};
use crate::settings::NumberFormat;
use crate::template::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: Option<NaiveDate>,

    /// Date the age is measured at (today by default)
    pub as_of_date: Option<NaiveDate>,
}

impl Default for AgeInput {
    fn default() -> Self {
        AgeInput {
            birth_date: None,
            as_of_date: Some(Local::now().date_naive()),
        }
    }
}

impl AgeInput {
    /// Validate and return `(birth, as_of)`.
    pub fn validate(&self) -> CalcResult<(NaiveDate, NaiveDate)> {
        let birth = self.birth_date.ok_or_else(|| CalcError::missing_field("birth_date"))?;
        let as_of = self.as_of_date.ok_or_else(|| CalcError::missing_field("as_of_date"))?;
        if birth > as_of {
            return Err(CalcError::invalid_input(
                "birth_date",
                birth.format(DATE_FORMAT).to_string(),
                "Birth date cannot be after the reference date",
            ));
        }
        Ok((birth, as_of))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_months: u32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub next_birthday: NaiveDate,
    pub days_until_next_birthday: i64,
    /// Day of the week the person was born on
    pub born_on: String,
}

pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    let (birth, as_of) = input.validate()?;

    let age = age_breakdown(birth, as_of);
    let total_days = days_between(birth, as_of);
    let (next, days_until) = next_birthday(birth, as_of).ok_or_else(|| {
        CalcError::calculation_failed("age", "Next birthday is outside the supported date range")
    })?;

    tracing::debug!(%birth, %as_of, years = age.years, "age calculated");

    Ok(AgeResult {
        years: age.years,
        months: age.months,
        days: age.days,
        total_months: age.years * 12 + age.months,
        total_days,
        total_weeks: total_days / 7,
        next_birthday: next,
        days_until_next_birthday: days_until,
        born_on: birth.weekday().to_string(),
    })
}

pub struct AgeCalculator;

impl Calculator for AgeCalculator {
    type Input = AgeInput;
    type Output = AgeResult;

    const KIND: CalculatorKind = CalculatorKind::Age;

    fn fields(input: &AgeInput) -> Vec<Field> {
        vec![
            Field::date("birth_date", "Date of birth", input.birth_date),
            Field::date("as_of_date", "Age at date", input.as_of_date),
        ]
    }

    /// Invalid date text clears the field, which surfaces as a missing field
    /// on the next calculation.
    fn set_field(input: &mut AgeInput, key: &str, text: &str) -> CalcResult<()> {
        match key {
            "birth_date" => input.birth_date = parse_date(text),
            "as_of_date" => input.as_of_date = parse_date(text),
            _ => return Err(unknown_field("age", key)),
        }
        Ok(())
    }

    fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
        calculate(input)
    }

    fn result_rows(result: &AgeResult, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            highlight(
                "Age",
                format!("{} years, {} months, {} days", result.years, result.months, result.days),
            ),
            row("Weekday of birth", result.born_on.as_str()),
            section("Totals"),
            row("Months", fmt.integer(result.total_months as f64)),
            row("Weeks", fmt.integer(result.total_weeks as f64)),
            row("Days", fmt.integer(result.total_days as f64)),
            section("Next birthday"),
            row("Date", result.next_birthday.format(DATE_FORMAT).to_string()),
            row(
                "Days to go",
                if result.days_until_next_birthday == 0 {
                    "Today!".to_string()
                } else {
                    fmt.integer(result.days_until_next_birthday as f64)
                },
            ),
        ]
    }
}
