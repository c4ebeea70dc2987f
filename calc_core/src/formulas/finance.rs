//! # Financial Formulas
//!
//! Loan amortization and bill splitting.
//!
//! ## Notation
//!
//! - `P` = Principal (loan amount)
//! - `r` = Periodic (monthly) interest rate as a fraction, e.g. 0.005 for 6%/yr
//! - `n` = Number of payments
//! - `M` = Periodic payment

use serde::{Deserialize, Serialize};

/// Monthly payment for a fully amortizing loan.
///
/// # Formula
/// ```text
/// M = P·r(1+r)^n / ((1+r)^n − 1)     (r > 0)
/// M = P / n                          (r = 0)
/// ```
///
/// The caller must ensure `num_payments > 0`.
///
/// # Example
/// ```rust
/// use calc_core::formulas::finance::mortgage_payment;
///
/// // $200k at 6%/yr for 30 years
/// let m = mortgage_payment(200_000.0, 0.06 / 12.0, 360);
/// assert!((m - 1199.10).abs() < 0.01);
/// ```
pub fn mortgage_payment(loan_amount: f64, monthly_rate: f64, num_payments: u32) -> f64 {
    let n = num_payments as f64;
    if monthly_rate == 0.0 {
        return loan_amount / n;
    }
    let growth = (1.0 + monthly_rate).powf(n);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}

/// One year of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYear {
    /// Loan year, starting at 1
    pub year: u32,
    /// Principal repaid during this year
    pub principal_paid: f64,
    /// Interest paid during this year
    pub interest_paid: f64,
    /// Balance outstanding at year end
    pub remaining_balance: f64,
}

/// Yearly summary of a monthly amortization schedule.
///
/// The final partial year (if `num_payments` is not a multiple of 12) gets its own
/// row. The balance is clamped at zero so rounding in the last payment never
/// shows a negative balance.
pub fn amortization_schedule(
    loan_amount: f64,
    monthly_rate: f64,
    num_payments: u32,
    payment: f64,
) -> Vec<AmortizationYear> {
    let mut schedule = Vec::with_capacity((num_payments as usize).div_ceil(12));
    let mut balance = loan_amount;
    let mut year = AmortizationYear {
        year: 1,
        principal_paid: 0.0,
        interest_paid: 0.0,
        remaining_balance: balance,
    };

    for month in 1..=num_payments {
        let interest = balance * monthly_rate;
        let principal = (payment - interest).min(balance);
        balance = (balance - principal).max(0.0);

        year.interest_paid += interest;
        year.principal_paid += principal;
        year.remaining_balance = balance;

        if month % 12 == 0 || month == num_payments {
            schedule.push(year);
            year = AmortizationYear {
                year: year.year + 1,
                principal_paid: 0.0,
                interest_paid: 0.0,
                remaining_balance: balance,
            };
        }
    }

    schedule
}

/// Tip and per-person share of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipSplit {
    pub tip_amount: f64,
    pub total: f64,
    pub tip_per_person: f64,
    pub total_per_person: f64,
}

/// Split a bill plus tip evenly. The caller must ensure `people > 0`.
pub fn tip_split(bill: f64, tip_percent: f64, people: u32) -> TipSplit {
    let tip_amount = bill * tip_percent / 100.0;
    let total = bill + tip_amount;
    let people = people as f64;
    TipSplit {
        tip_amount,
        total,
        tip_per_person: tip_amount / people,
        total_per_person: total / people,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_zero_rate_is_straight_division() {
        assert_eq!(mortgage_payment(12_000.0, 0.0, 12), 1000.0);
    }

    #[test]
    fn test_standard_mortgage_payment() {
        // $300k at 4.5% for 15 years: 2294.98
        let m = mortgage_payment(300_000.0, 0.045 / 12.0, 180);
        assert!(approx_eq(m, 2294.98, 0.01), "M = {}", m);
    }

    #[test]
    fn test_schedule_pays_off_loan() {
        let loan = 100_000.0;
        let rate = 0.05 / 12.0;
        let payment = mortgage_payment(loan, rate, 120);
        let schedule = amortization_schedule(loan, rate, 120, payment);

        assert_eq!(schedule.len(), 10);
        let last = schedule.last().unwrap();
        assert!(last.remaining_balance < 0.01, "balance = {}", last.remaining_balance);

        let principal: f64 = schedule.iter().map(|y| y.principal_paid).sum();
        assert!(approx_eq(principal, loan, 0.01));
    }

    #[test]
    fn test_schedule_partial_final_year() {
        let payment = mortgage_payment(1_000.0, 0.0, 18);
        let schedule = amortization_schedule(1_000.0, 0.0, 18, payment);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[1].year, 2);
        assert!(schedule[1].remaining_balance.abs() < 1e-9);
    }

    #[test]
    fn test_tip_split() {
        let split = tip_split(80.0, 15.0, 4);
        assert!(approx_eq(split.tip_amount, 12.0, 1e-9));
        assert!(approx_eq(split.total, 92.0, 1e-9));
        assert!(approx_eq(split.total_per_person, 23.0, 1e-9));
        assert!(approx_eq(split.tip_per_person, 3.0, 1e-9));
    }
}
