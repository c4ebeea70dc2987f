//! # Fraction Arithmetic
//!
//! Exact rational arithmetic over `i64` numerator/denominator pairs.
//!
//! Every operation returns a simplified fraction: lowest terms by GCD with the
//! sign carried on the numerator. Intermediates are computed in `i128`, so only
//! a simplified result that does not fit back into `i64` is an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A rational number with a nonzero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Arithmetic operator for the fraction calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionOp {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FractionOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            FractionOp::Add => "+",
            FractionOp::Subtract => "−",
            FractionOp::Multiply => "×",
            FractionOp::Divide => "÷",
        }
    }

    /// Parse an operator from a symbol or name (`+`, `-`, `*`, `/`, `add`, ...).
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Some(FractionOp::Add),
            "-" | "−" | "subtract" | "sub" | "minus" => Some(FractionOp::Subtract),
            "*" | "x" | "×" | "multiply" | "mul" | "times" => Some(FractionOp::Multiply),
            "/" | "÷" | "divide" | "div" => Some(FractionOp::Divide),
            _ => None,
        }
    }

    pub fn apply(&self, a: Fraction, b: Fraction) -> CalcResult<Fraction> {
        match self {
            FractionOp::Add => add(a, b),
            FractionOp::Subtract => subtract(a, b),
            FractionOp::Multiply => multiply(a, b),
            FractionOp::Divide => divide(a, b),
        }
    }
}

/// Greatest common divisor (always non-negative).
pub fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Fraction {
    /// Create a simplified fraction. Fails on a zero denominator.
    pub fn new(numerator: i64, denominator: i64) -> CalcResult<Self> {
        if denominator == 0 {
            return Err(CalcError::invalid_input(
                "denominator",
                "0",
                "Denominator cannot be zero",
            ));
        }
        Self::simplified(numerator as i128, denominator as i128)
    }

    /// An integer as a fraction over 1.
    pub fn whole(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Reduce to lowest terms with the sign on the numerator.
    fn simplified(numerator: i128, denominator: i128) -> CalcResult<Self> {
        let divisor = gcd(numerator, denominator).max(1);
        let sign = if denominator < 0 { -1 } else { 1 };
        let n = sign * numerator / divisor;
        let d = sign * denominator / divisor;

        match (i64::try_from(n), i64::try_from(d)) {
            (Ok(numerator), Ok(denominator)) => Ok(Fraction {
                numerator,
                denominator,
            }),
            _ => Err(CalcError::calculation_failed(
                "Fraction",
                format!("Result {}/{} exceeds the 64-bit integer range", n, d),
            )),
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Mixed-number form, e.g. `-7/2` → `-3 1/2`.
    pub fn mixed(&self) -> String {
        let whole = self.numerator / self.denominator;
        let rem = (self.numerator % self.denominator).abs();
        if rem == 0 {
            whole.to_string()
        } else if whole == 0 {
            self.to_string()
        } else {
            format!("{} {}/{}", whole, rem, self.denominator)
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::whole(0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// a/b + c/d = (ad + cb) / bd
pub fn add(a: Fraction, b: Fraction) -> CalcResult<Fraction> {
    let (an, ad, bn, bd) = widen(a, b);
    Fraction::simplified(an * bd + bn * ad, ad * bd)
}

/// a/b − c/d = (ad − cb) / bd
pub fn subtract(a: Fraction, b: Fraction) -> CalcResult<Fraction> {
    let (an, ad, bn, bd) = widen(a, b);
    Fraction::simplified(an * bd - bn * ad, ad * bd)
}

/// a/b × c/d = ac / bd
pub fn multiply(a: Fraction, b: Fraction) -> CalcResult<Fraction> {
    let (an, ad, bn, bd) = widen(a, b);
    Fraction::simplified(an * bn, ad * bd)
}

/// a/b ÷ c/d = ad / bc. Fails when `c` is zero.
pub fn divide(a: Fraction, b: Fraction) -> CalcResult<Fraction> {
    if b.is_zero() {
        return Err(CalcError::invalid_input(
            "numerator2",
            "0",
            "Cannot divide by a fraction with a zero numerator",
        ));
    }
    let (an, ad, bn, bd) = widen(a, b);
    Fraction::simplified(an * bd, ad * bn)
}

fn widen(a: Fraction, b: Fraction) -> (i128, i128, i128, i128) {
    (
        a.numerator as i128,
        a.denominator as i128,
        b.numerator as i128,
        b.denominator as i128,
    )
}
