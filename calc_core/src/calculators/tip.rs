//! # Tip Calculator
//!
//! Tip amount and an even split of the bill across a party.

use serde::{Deserialize, Serialize};

use super::{highlight, row, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, parse_u32_or, unknown_field, Field};
use crate::formulas::finance::{tip_split, TipSplit};
use crate::settings::NumberFormat;
use crate::template::Row;

/// Input parameters for the tip calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipInput {
    /// Bill before tip
    pub bill_amount: f64,

    /// Tip in percent of the bill
    pub tip_percent: f64,

    /// Number of people splitting the total
    pub people: u32,
}

impl Default for TipInput {
    fn default() -> Self {
        TipInput {
            bill_amount: 50.0,
            tip_percent: 18.0,
            people: 1,
        }
    }
}

impl TipInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.bill_amount < 0.0 {
            return Err(CalcError::invalid_input(
                "bill_amount",
                self.bill_amount.to_string(),
                "Bill cannot be negative",
            ));
        }
        if self.tip_percent < 0.0 || self.tip_percent > 100.0 {
            return Err(CalcError::invalid_input(
                "tip_percent",
                self.tip_percent.to_string(),
                "Tip must be between 0 and 100 percent",
            ));
        }
        if self.people == 0 {
            return Err(CalcError::invalid_input(
                "people",
                "0",
                "At least one person must share the bill",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipResult {
    #[serde(flatten)]
    pub split: TipSplit,
    pub people: u32,
}

pub fn calculate(input: &TipInput) -> CalcResult<TipResult> {
    input.validate()?;
    Ok(TipResult {
        split: tip_split(input.bill_amount, input.tip_percent, input.people),
        people: input.people,
    })
}

pub struct TipCalculator;

impl Calculator for TipCalculator {
    type Input = TipInput;
    type Output = TipResult;

    const KIND: CalculatorKind = CalculatorKind::Tip;

    fn fields(input: &TipInput) -> Vec<Field> {
        vec![
            Field::number("bill_amount", "Bill amount", input.bill_amount),
            Field::number("tip_percent", "Tip (%)", input.tip_percent),
            Field::integer("people", "People", input.people),
        ]
    }

    fn set_field(input: &mut TipInput, key: &str, text: &str) -> CalcResult<()> {
        let d = TipInput::default();
        match key {
            "bill_amount" => input.bill_amount = parse_f64_or(text, d.bill_amount),
            "tip_percent" => input.tip_percent = parse_f64_or(text, d.tip_percent),
            "people" => input.people = parse_u32_or(text, d.people),
            _ => return Err(unknown_field("tip", key)),
        }
        Ok(())
    }

    fn calculate(input: &TipInput) -> CalcResult<TipResult> {
        calculate(input)
    }

    fn input_rows(input: &TipInput, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            row("Bill amount", fmt.money(input.bill_amount)),
            row("Tip", fmt.percent(input.tip_percent)),
            row("People", input.people.to_string()),
        ]
    }

    fn result_rows(result: &TipResult, fmt: &NumberFormat) -> Vec<Row> {
        let mut rows = vec![
            highlight("Tip amount", fmt.money(result.split.tip_amount)),
            row("Total", fmt.money(result.split.total)),
        ];
        if result.people > 1 {
            rows.push(row("Tip per person", fmt.money(result.split.tip_per_person)));
            rows.push(highlight("Total per person", fmt.money(result.split.total_per_person)));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_four_ways() {
        let input = TipInput {
            bill_amount: 80.0,
            tip_percent: 15.0,
            people: 4,
        };
        let result = calculate(&input).unwrap();
        assert!((result.split.tip_amount - 12.0).abs() < 1e-9);
        assert!((result.split.total_per_person - 23.0).abs() < 1e-9);

        let rows = TipCalculator::result_rows(&result, &NumberFormat::default());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].value, "$23.00");
    }

    #[test]
    fn test_zero_people_rejected() {
        let input = TipInput {
            people: 0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("people"));
    }

    #[test]
    fn test_single_person_hides_split_rows() {
        let result = calculate(&TipInput::default()).unwrap();
        let rows = TipCalculator::result_rows(&result, &NumberFormat::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].value, "$59.00");
    }
}
