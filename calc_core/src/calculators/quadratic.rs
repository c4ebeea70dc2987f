//! # Quadratic Equation Calculator
//!
//! Solves `ax² + bx + c = 0` and reports the discriminant, both roots (real
//! or complex conjugate) and the vertex of the parabola.

use serde::{Deserialize, Serialize};

use super::{highlight, row, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, trim_float, unknown_field, Field};
use crate::formulas::quadratic::{solve_quadratic, QuadraticSolution};
use crate::settings::NumberFormat;
use crate::template::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for QuadraticInput {
    fn default() -> Self {
        QuadraticInput {
            a: 1.0,
            b: -3.0,
            c: 2.0,
        }
    }
}

impl QuadraticInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.a == 0.0 {
            return Err(CalcError::invalid_input(
                "a",
                "0",
                "Coefficient a cannot be zero (not a quadratic)",
            ));
        }
        Ok(())
    }

    /// The equation as typed, e.g. `x² − 3x + 2 = 0`.
    pub fn equation(&self) -> String {
        let mut out = match self.a {
            a if a == 1.0 => "x²".to_string(),
            a if a == -1.0 => "−x²".to_string(),
            a => format!("{}x²", trim_float(a)),
        };
        for (coef, var) in [(self.b, "x"), (self.c, "")] {
            if coef == 0.0 {
                continue;
            }
            let sign = if coef < 0.0 { '−' } else { '+' };
            let magnitude = coef.abs();
            if magnitude == 1.0 && !var.is_empty() {
                out.push_str(&format!(" {} {}", sign, var));
            } else {
                out.push_str(&format!(" {} {}{}", sign, trim_float(magnitude), var));
            }
        }
        out.push_str(" = 0");
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticResult {
    pub equation: String,
    #[serde(flatten)]
    pub solution: QuadraticSolution,
}

pub fn calculate(input: &QuadraticInput) -> CalcResult<QuadraticResult> {
    input.validate()?;
    let solution = solve_quadratic(input.a, input.b, input.c);
    tracing::debug!(discriminant = solution.discriminant, "quadratic solved");
    Ok(QuadraticResult {
        equation: input.equation(),
        solution,
    })
}

pub struct QuadraticCalculator;

impl Calculator for QuadraticCalculator {
    type Input = QuadraticInput;
    type Output = QuadraticResult;

    const KIND: CalculatorKind = CalculatorKind::Quadratic;

    fn fields(input: &QuadraticInput) -> Vec<Field> {
        vec![
            Field::number("a", "a (x²)", input.a).with_hint("nonzero"),
            Field::number("b", "b (x)", input.b),
            Field::number("c", "c", input.c),
        ]
    }

    fn set_field(input: &mut QuadraticInput, key: &str, text: &str) -> CalcResult<()> {
        let d = QuadraticInput::default();
        match key {
            "a" => input.a = parse_f64_or(text, d.a),
            "b" => input.b = parse_f64_or(text, d.b),
            "c" => input.c = parse_f64_or(text, d.c),
            _ => return Err(unknown_field("quadratic", key)),
        }
        Ok(())
    }

    fn calculate(input: &QuadraticInput) -> CalcResult<QuadraticResult> {
        calculate(input)
    }

    fn input_rows(input: &QuadraticInput, _fmt: &NumberFormat) -> Vec<Row> {
        vec![
            row("Equation", input.equation()),
            row("a", trim_float(input.a)),
            row("b", trim_float(input.b)),
            row("c", trim_float(input.c)),
        ]
    }

    fn result_rows(result: &QuadraticResult, fmt: &NumberFormat) -> Vec<Row> {
        let s = &result.solution;
        let decimals = fmt.decimals.max(2);
        let nature = if s.has_complex_roots {
            "Two complex roots"
        } else if s.discriminant == 0.0 {
            "One repeated real root"
        } else {
            "Two real roots"
        };
        vec![
            row("Discriminant", fmt.number(s.discriminant)),
            row("Nature", nature),
            highlight("x₁", s.root1.format(decimals)),
            highlight("x₂", s.root2.format(decimals)),
            row(
                "Vertex",
                format!("({}, {})", fmt.number(s.vertex_x), fmt.number(s.vertex_y)),
            ),
            row("Axis of symmetry", format!("x = {}", fmt.number(s.vertex_x))),
        ]
    }
}
