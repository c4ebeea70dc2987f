//! # Mortgage Calculator
//!
//! Monthly payment for a fixed-rate loan, with totals and a yearly
//! amortization summary.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculators::mortgage::{calculate, MortgageInput};
//!
//! let input = MortgageInput {
//!     home_price: 250_000.0,
//!     down_payment: 50_000.0,
//!     annual_rate_percent: 6.0,
//!     term_years: 30,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.monthly_payment - 1199.10).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use super::{highlight, row, section, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, parse_u32_or, unknown_field, Field};
use crate::formulas::finance::{amortization_schedule, mortgage_payment, AmortizationYear};
use crate::settings::NumberFormat;
use crate::template::Row;

/// Longest accepted loan term
pub const MAX_TERM_YEARS: u32 = 50;

/// Input parameters for a fixed-rate mortgage.
///
/// ## JSON Example
///
/// ```json
/// {
///   "home_price": 350000.0,
///   "down_payment": 70000.0,
///   "annual_rate_percent": 6.5,
///   "term_years": 30
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price
    pub home_price: f64,

    /// Cash paid up front; the loan is the remainder
    pub down_payment: f64,

    /// Annual interest rate in percent (6.5 for 6.5%)
    pub annual_rate_percent: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl Default for MortgageInput {
    fn default() -> Self {
        MortgageInput {
            home_price: 350_000.0,
            down_payment: 70_000.0,
            annual_rate_percent: 6.5,
            term_years: 30,
        }
    }
}

impl MortgageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.home_price <= 0.0 {
            return Err(CalcError::invalid_input(
                "home_price",
                self.home_price.to_string(),
                "Home price must be positive",
            ));
        }
        if self.down_payment < 0.0 {
            return Err(CalcError::invalid_input(
                "down_payment",
                self.down_payment.to_string(),
                "Down payment cannot be negative",
            ));
        }
        if self.down_payment >= self.home_price {
            return Err(CalcError::invalid_input(
                "down_payment",
                self.down_payment.to_string(),
                "Down payment must be less than the home price",
            ));
        }
        if self.annual_rate_percent < 0.0 || self.annual_rate_percent > 100.0 {
            return Err(CalcError::invalid_input(
                "interest_rate",
                self.annual_rate_percent.to_string(),
                "Interest rate must be between 0 and 100 percent",
            ));
        }
        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            return Err(CalcError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                format!("Term must be between 1 and {} years", MAX_TERM_YEARS),
            ));
        }
        Ok(())
    }

    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Monthly rate as a fraction (0.065 / 12 for 6.5%/yr)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    pub fn num_payments(&self) -> u32 {
        self.term_years * 12
    }
}

/// Mortgage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub num_payments: u32,
    /// Sum of all monthly payments
    pub total_paid: f64,
    pub total_interest: f64,
    /// Down payment as a percentage of the price
    pub down_payment_percent: f64,
    pub schedule: Vec<AmortizationYear>,
}

/// Calculate the monthly payment and amortization summary.
pub fn calculate(input: &MortgageInput) -> CalcResult<MortgageResult> {
    input.validate()?;

    let loan_amount = input.loan_amount();
    let rate = input.monthly_rate();
    let n = input.num_payments();
    let monthly_payment = mortgage_payment(loan_amount, rate, n);
    if !monthly_payment.is_finite() {
        return Err(CalcError::calculation_failed(
            "mortgage",
            "Payment is not a finite number for these inputs",
        ));
    }

    let total_paid = monthly_payment * n as f64;
    let schedule = amortization_schedule(loan_amount, rate, n, monthly_payment);

    tracing::debug!(loan_amount, monthly_payment, n, "mortgage calculated");

    Ok(MortgageResult {
        loan_amount,
        monthly_payment,
        num_payments: n,
        total_paid,
        total_interest: total_paid - loan_amount,
        down_payment_percent: input.down_payment / input.home_price * 100.0,
        schedule,
    })
}

pub struct MortgageCalculator;

impl Calculator for MortgageCalculator {
    type Input = MortgageInput;
    type Output = MortgageResult;

    const KIND: CalculatorKind = CalculatorKind::Mortgage;

    fn fields(input: &MortgageInput) -> Vec<Field> {
        vec![
            Field::number("home_price", "Home price", input.home_price),
            Field::number("down_payment", "Down payment", input.down_payment),
            Field::number("interest_rate", "Interest rate (%)", input.annual_rate_percent),
            Field::integer("term_years", "Term (years)", input.term_years),
        ]
    }

    fn set_field(input: &mut MortgageInput, key: &str, text: &str) -> CalcResult<()> {
        let d = MortgageInput::default();
        match key {
            "home_price" => input.home_price = parse_f64_or(text, d.home_price),
            "down_payment" => input.down_payment = parse_f64_or(text, d.down_payment),
            "interest_rate" => input.annual_rate_percent = parse_f64_or(text, d.annual_rate_percent),
            "term_years" => input.term_years = parse_u32_or(text, d.term_years),
            _ => return Err(unknown_field("mortgage", key)),
        }
        Ok(())
    }

    fn calculate(input: &MortgageInput) -> CalcResult<MortgageResult> {
        calculate(input)
    }

    fn input_rows(input: &MortgageInput, fmt: &NumberFormat) -> Vec<Row> {
        vec![
            row("Home price", fmt.money(input.home_price)),
            row("Down payment", fmt.money(input.down_payment)),
            row("Interest rate", fmt.percent(input.annual_rate_percent)),
            row("Term", format!("{} years", input.term_years)),
        ]
    }

    fn result_rows(result: &MortgageResult, fmt: &NumberFormat) -> Vec<Row> {
        let mut rows = vec![
            highlight("Monthly payment", fmt.money(result.monthly_payment)),
            row("Loan amount", fmt.money(result.loan_amount)),
            row("Down payment", fmt.percent(result.down_payment_percent)),
            row("Number of payments", result.num_payments.to_string()),
            row("Total interest", fmt.money(result.total_interest)),
            row("Total paid", fmt.money(result.total_paid)),
            section("Amortization by year"),
        ];
        rows.extend(result.schedule.iter().map(|y| {
            row(
                format!("Year {}", y.year),
                format!(
                    "principal {} · interest {} · balance {}",
                    fmt.money(y.principal_paid),
                    fmt.money(y.interest_paid),
                    fmt.money(y.remaining_balance)
                ),
            )
        }));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mortgage() {
        let result = calculate(&MortgageInput::default()).unwrap();
        assert_eq!(result.loan_amount, 280_000.0);
        assert_eq!(result.num_payments, 360);
        // 280k at 6.5% for 30 years
        assert!((result.monthly_payment - 1769.79).abs() < 0.01);
        assert_eq!(result.schedule.len(), 30);
        assert!(result.schedule.last().unwrap().remaining_balance < 0.01);
    }

    #[test]
    fn test_interest_equals_total_minus_loan() {
        let result = calculate(&MortgageInput::default()).unwrap();
        let interest_from_schedule: f64 = result.schedule.iter().map(|y| y.interest_paid).sum();
        assert!((result.total_interest - interest_from_schedule).abs() < 1.0);
        assert!((result.down_payment_percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate() {
        let input = MortgageInput {
            home_price: 120_000.0,
            down_payment: 0.0,
            annual_rate_percent: 0.0,
            term_years: 10,
        };
        let result = calculate(&input).unwrap();
        assert!((result.monthly_payment - 1000.0).abs() < 1e-9);
        assert!(result.total_interest.abs() < 1e-6);
    }

    #[test]
    fn test_down_payment_must_be_below_price() {
        let input = MortgageInput {
            down_payment: 350_000.0,
            ..Default::default()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("down_payment"));
    }

    #[test]
    fn test_invalid_term_and_rate() {
        let input = MortgageInput {
            term_years: 0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("term_years"));

        let input = MortgageInput {
            annual_rate_percent: -1.0,
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("interest_rate"));
    }

    #[test]
    fn test_set_field_falls_back_to_default() {
        let mut input = MortgageInput {
            home_price: 500_000.0,
            ..Default::default()
        };
        MortgageCalculator::set_field(&mut input, "home_price", "lots").unwrap();
        assert_eq!(input.home_price, 350_000.0);
        MortgageCalculator::set_field(&mut input, "interest_rate", "7.25%").unwrap();
        assert_eq!(input.annual_rate_percent, 7.25);
        assert!(MortgageCalculator::set_field(&mut input, "color", "red").is_err());
    }
}
