//! # Fraction Calculator
//!
//! Adds, subtracts, multiplies or divides two fractions and shows the result
//! in lowest terms, as a mixed number and as a decimal.

use serde::{Deserialize, Serialize};

use super::{highlight, row, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_i64_or, unknown_field, Field, FieldKind};
use crate::formulas::fraction::{Fraction, FractionOp};
use crate::settings::NumberFormat;
use crate::template::Row;

const OPERATION_CHOICES: &[&str] = &["+", "-", "*", "/"];

fn operation_key(op: FractionOp) -> &'static str {
    match op {
        FractionOp::Add => "+",
        FractionOp::Subtract => "-",
        FractionOp::Multiply => "*",
        FractionOp::Divide => "/",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionInput {
    pub numerator1: i64,
    pub denominator1: i64,
    pub operation: FractionOp,
    pub numerator2: i64,
    pub denominator2: i64,
}

impl Default for FractionInput {
    fn default() -> Self {
        FractionInput {
            numerator1: 1,
            denominator1: 2,
            operation: FractionOp::Add,
            numerator2: 1,
            denominator2: 3,
        }
    }
}

impl FractionInput {
    /// Validate and build both operands.
    pub fn operands(&self) -> CalcResult<(Fraction, Fraction)> {
        let left = operand(self.numerator1, self.denominator1, "denominator1")?;
        let right = operand(self.numerator2, self.denominator2, "denominator2")?;
        Ok((left, right))
    }
}

fn operand(numerator: i64, denominator: i64, field: &str) -> CalcResult<Fraction> {
    if denominator == 0 {
        return Err(CalcError::invalid_input(field, "0", "Denominator cannot be zero"));
    }
    Fraction::new(numerator, denominator)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionResult {
    pub left: Fraction,
    pub operation: FractionOp,
    pub right: Fraction,
    /// Lowest terms, sign on the numerator
    pub result: Fraction,
    pub mixed: String,
    pub decimal: f64,
}

pub fn calculate(input: &FractionInput) -> CalcResult<FractionResult> {
    let (left, right) = input.operands()?;
    let result = input.operation.apply(left, right)?;

    tracing::debug!(%left, %right, %result, op = input.operation.symbol(), "fraction calculated");

    Ok(FractionResult {
        left,
        operation: input.operation,
        right,
        mixed: result.mixed(),
        decimal: result.to_f64(),
        result,
    })
}

pub struct FractionCalculator;

impl Calculator for FractionCalculator {
    type Input = FractionInput;
    type Output = FractionResult;

    const KIND: CalculatorKind = CalculatorKind::Fraction;

    fn fields(input: &FractionInput) -> Vec<Field> {
        vec![
            Field::integer("numerator1", "Numerator 1", input.numerator1),
            Field::integer("denominator1", "Denominator 1", input.denominator1),
            Field::new(
                "operation",
                "Operation",
                FieldKind::Choice(OPERATION_CHOICES),
                operation_key(input.operation),
            ),
            Field::integer("numerator2", "Numerator 2", input.numerator2),
            Field::integer("denominator2", "Denominator 2", input.denominator2),
        ]
    }

    fn set_field(input: &mut FractionInput, key: &str, text: &str) -> CalcResult<()> {
        let d = FractionInput::default();
        match key {
            "numerator1" => input.numerator1 = parse_i64_or(text, d.numerator1),
            "denominator1" => input.denominator1 = parse_i64_or(text, d.denominator1),
            "operation" => input.operation = FractionOp::parse(text).unwrap_or(d.operation),
            "numerator2" => input.numerator2 = parse_i64_or(text, d.numerator2),
            "denominator2" => input.denominator2 = parse_i64_or(text, d.denominator2),
            _ => return Err(unknown_field("fraction", key)),
        }
        Ok(())
    }

    fn calculate(input: &FractionInput) -> CalcResult<FractionResult> {
        calculate(input)
    }

    fn input_rows(input: &FractionInput, _fmt: &NumberFormat) -> Vec<Row> {
        vec![
            row("First", format!("{}/{}", input.numerator1, input.denominator1)),
            row("Operation", input.operation.symbol()),
            row("Second", format!("{}/{}", input.numerator2, input.denominator2)),
        ]
    }

    fn result_rows(result: &FractionResult, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            highlight(
                "Result",
                format!(
                    "{} {} {} = {}",
                    result.left,
                    result.operation.symbol(),
                    result.right,
                    result.result
                ),
            ),
            row("Mixed number", result.mixed.as_str()),
            row("Decimal", fmt.number_with(result.decimal, fmt.decimals.max(4))),
        ]
    }
}
