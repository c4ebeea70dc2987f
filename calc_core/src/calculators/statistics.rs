//! # Statistics Calculator
//!
//! Descriptive statistics over a typed list of numbers.

use serde::{Deserialize, Serialize};

use super::{highlight, row, section, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{unknown_field, Field, FieldKind};
use crate::formulas::statistics::{parse_values, summarize, Summary};
use crate::settings::NumberFormat;
use crate::template::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsInput {
    /// Numbers separated by commas, semicolons or spaces
    pub values: String,
}

impl Default for StatisticsInput {
    fn default() -> Self {
        StatisticsInput {
            values: "2, 4, 4, 4, 5, 5, 7, 9".to_string(),
        }
    }
}

impl StatisticsInput {
    /// Parse the data set. Any token that is not a number is an error.
    pub fn parse(&self) -> CalcResult<Vec<f64>> {
        let (values, rejected) = parse_values(&self.values);
        if let Some(bad) = rejected.first() {
            return Err(CalcError::invalid_input("values", bad.as_str(), "Not a number"));
        }
        if values.is_empty() {
            return Err(CalcError::missing_field("values"));
        }
        Ok(values)
    }
}

pub type StatisticsResult = Summary;

pub fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
    let values = input.parse()?;
    let summary = summarize(&values)
        .ok_or_else(|| CalcError::calculation_failed("statistics", "Empty data set"))?;
    tracing::debug!(count = summary.count, "statistics calculated");
    Ok(summary)
}

pub struct StatisticsCalculator;

impl Calculator for StatisticsCalculator {
    type Input = StatisticsInput;
    type Output = StatisticsResult;

    const KIND: CalculatorKind = CalculatorKind::Statistics;

    fn fields(input: &StatisticsInput) -> Vec<Field> {
        vec![Field::new("values", "Data set", FieldKind::Text, input.values.clone())
            .with_hint("e.g. 3, 7, 7, 19")]
    }

    fn set_field(input: &mut StatisticsInput, key: &str, text: &str) -> CalcResult<()> {
        match key {
            "values" => input.values = text.to_string(),
            _ => return Err(unknown_field("statistics", key)),
        }
        Ok(())
    }

    fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
        calculate(input)
    }

    fn result_rows(s: &Summary, fmt: &NumberFormat) -> Vec<Row> {
        let modes = if s.modes.is_empty() {
            "none".to_string()
        } else {
            s.modes.iter().map(|m| fmt.number(*m)).collect::<Vec<_>>().join(", ")
        };
        let optional = |v: Option<f64>| v.map(|v| fmt.number(v)).unwrap_or_else(|| "n/a".to_string());

        vec![
            row("Count", s.count.to_string()),
            row("Sum", fmt.number(s.sum)),
            highlight("Mean", fmt.number(s.mean)),
            row("Median", fmt.number(s.median)),
            row("Mode", modes),
            row("Minimum", fmt.number(s.min)),
            row("Maximum", fmt.number(s.max)),
            row("Range", fmt.number(s.range)),
            section("Spread"),
            row("Population variance", fmt.number(s.population_variance)),
            highlight("Population std dev", fmt.number(s.population_std_dev)),
            row("Sample variance", optional(s.sample_variance)),
            row("Sample std dev", optional(s.sample_std_dev)),
        ]
    }
}
