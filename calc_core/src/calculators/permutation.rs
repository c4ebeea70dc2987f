//! # Permutation and Combination Calculator
//!
//! nPr and nCr for `0 <= r <= n <= 170`. Larger `n` overflows `f64` factorials.

use serde::{Deserialize, Serialize};

use super::{highlight, row, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_i64_or, unknown_field, Field};
use crate::formulas::combinatorics::{combination, permutation, MAX_FACTORIAL_N};
use crate::settings::NumberFormat;
use crate::template::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermutationInput {
    /// Items to choose from
    pub n: i64,
    /// Items chosen
    pub r: i64,
}

impl Default for PermutationInput {
    fn default() -> Self {
        PermutationInput { n: 10, r: 3 }
    }
}

impl PermutationInput {
    pub fn validate(&self) -> CalcResult<(u32, u32)> {
        if self.n < 0 {
            return Err(CalcError::invalid_input("n", self.n.to_string(), "n cannot be negative"));
        }
        if self.r < 0 {
            return Err(CalcError::invalid_input("r", self.r.to_string(), "r cannot be negative"));
        }
        if self.r > self.n {
            return Err(CalcError::invalid_input(
                "r",
                self.r.to_string(),
                "r cannot be greater than n",
            ));
        }
        if self.n > MAX_FACTORIAL_N as i64 {
            return Err(CalcError::invalid_input(
                "n",
                self.n.to_string(),
                format!("n cannot exceed {}", MAX_FACTORIAL_N),
            ));
        }
        Ok((self.n as u32, self.r as u32))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermutationResult {
    pub n: u32,
    pub r: u32,
    /// Ordered selections, nPr = n! / (n−r)!
    pub permutations: f64,
    /// Unordered selections, nCr = n! / (r!(n−r)!)
    pub combinations: f64,
}

pub fn calculate(input: &PermutationInput) -> CalcResult<PermutationResult> {
    let (n, r) = input.validate()?;
    Ok(PermutationResult {
        n,
        r,
        permutations: permutation(n, r),
        combinations: combination(n, r),
    })
}

/// Counts past 1e15 lose integer precision in `f64`; show them in scientific form.
fn count(value: f64, fmt: &NumberFormat) -> String {
    if value.abs() >= 1e15 {
        format!("{:.6e}", value)
    } else {
        fmt.integer(value)
    }
}

pub struct PermutationCalculator;

impl Calculator for PermutationCalculator {
    type Input = PermutationInput;
    type Output = PermutationResult;

    const KIND: CalculatorKind = CalculatorKind::PermutationCombination;

    fn fields(input: &PermutationInput) -> Vec<Field> {
        vec![
            Field::integer("n", "Total items (n)", input.n).with_hint("0 to 170"),
            Field::integer("r", "Items chosen (r)", input.r),
        ]
    }

    fn set_field(input: &mut PermutationInput, key: &str, text: &str) -> CalcResult<()> {
        let d = PermutationInput::default();
        match key {
            "n" => input.n = parse_i64_or(text, d.n),
            "r" => input.r = parse_i64_or(text, d.r),
            _ => return Err(unknown_field("permutation-combination", key)),
        }
        Ok(())
    }

    fn calculate(input: &PermutationInput) -> CalcResult<PermutationResult> {
        calculate(input)
    }

    fn result_rows(result: &PermutationResult, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            highlight(
                format!("Permutations {}P{}", result.n, result.r),
                count(result.permutations, fmt),
            ),
            highlight(
                format!("Combinations {}C{}", result.n, result.r),
                count(result.combinations, fmt),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_choose_three() {
        let result = calculate(&PermutationInput::default()).unwrap();
        assert_eq!(result.permutations, 720.0);
        assert_eq!(result.combinations, 120.0);

        let rows = PermutationCalculator::result_rows(&result, &NumberFormat::default());
        assert_eq!(rows[0].label, "Permutations 10P3");
        assert_eq!(rows[0].value, "720");
    }

    #[test]
    fn test_rejections() {
        let err = calculate(&PermutationInput { n: -1, r: 0 }).unwrap_err();
        assert_eq!(err.field(), Some("n"));

        let err = calculate(&PermutationInput { n: 3, r: 5 }).unwrap_err();
        assert_eq!(err.field(), Some("r"));

        let err = calculate(&PermutationInput { n: 171, r: 2 }).unwrap_err();
        assert_eq!(err.field(), Some("n"));
    }

    #[test]
    fn test_upper_bound_is_finite() {
        let result = calculate(&PermutationInput { n: 170, r: 170 }).unwrap();
        assert!(result.permutations.is_finite());
        assert!((result.combinations - 1.0).abs() < 1e-9);
        let rows = PermutationCalculator::result_rows(&result, &NumberFormat::default());
        assert!(rows[0].value.contains('e'));
    }
}
