//! # Date Formulas
//!
//! Calendar-aware age differencing.
//!
//! Years, months and days are computed by borrowing: a negative day difference
//! borrows one month (worth the day count of the month before the reference
//! date), and a negative month difference borrows one year. The birth day is
//! clamped to the borrowed month's length, so a birthday on the 31st measured
//! across February never leaves a negative remainder.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whole-unit difference between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Years/months/days between `birth` and `as_of`.
///
/// The caller must ensure `birth <= as_of`.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use calc_core::formulas::dates::age_breakdown;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 5, 20).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let age = age_breakdown(birth, as_of);
/// assert_eq!((age.years, age.months, age.days), (33, 9, 19));
/// ```
pub fn age_breakdown(birth: NaiveDate, as_of: NaiveDate) -> AgeBreakdown {
    let mut years = as_of.year() - birth.year();
    let mut months = as_of.month() as i32 - birth.month() as i32;
    let mut days = as_of.day() as i32 - birth.day() as i32;

    if days < 0 {
        let (prev_year, prev_month) = if as_of.month() == 1 {
            (as_of.year() - 1, 12)
        } else {
            (as_of.year(), as_of.month() - 1)
        };
        let prev_len = days_in_month(prev_year, prev_month) as i32;
        let anchor_day = (birth.day() as i32).min(prev_len);
        days = prev_len - anchor_day + as_of.day() as i32;
        months -= 1;
    }

    if months < 0 {
        months += 12;
        years -= 1;
    }

    AgeBreakdown {
        years: years.max(0) as u32,
        months: months.max(0) as u32,
        days: days.max(0) as u32,
    }
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Anniversary of `birth` in `year`. Feb 29 falls on Mar 1 in non-leap years.
pub fn anniversary_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Next birthday on or after `as_of`, and the number of days until it.
pub fn next_birthday(birth: NaiveDate, as_of: NaiveDate) -> Option<(NaiveDate, i64)> {
    let this_year = anniversary_in_year(birth, as_of.year())?;
    let next = if this_year < as_of {
        anniversary_in_year(birth, as_of.year() + 1)?
    } else {
        this_year
    };
    Some((next, days_between(as_of, next)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_leap_day_birthday() {
        let age = age_breakdown(date(2000, 2, 29), date(2023, 3, 1));
        assert_eq!((age.years, age.months, age.days), (23, 0, 1));
    }

    #[test]
    fn test_simple_borrow() {
        // Jan 15 -> Mar 10: borrow February (28 days)
        let age = age_breakdown(date(2023, 1, 15), date(2023, 3, 10));
        assert_eq!((age.years, age.months, age.days), (0, 1, 23));
    }

    #[test]
    fn test_borrow_clamps_long_day() {
        // Jan 31 -> Mar 1: anchor is Feb 28, one day later
        let age = age_breakdown(date(2023, 1, 31), date(2023, 3, 1));
        assert_eq!((age.years, age.months, age.days), (0, 1, 1));
    }

    #[test]
    fn test_year_borrow_with_zero_month_difference() {
        // Same month, earlier day: borrow month then year
        let age = age_breakdown(date(1990, 6, 20), date(2020, 6, 5));
        assert_eq!((age.years, age.months, age.days), (29, 11, 16));
    }

    #[test]
    fn test_january_borrows_december() {
        let age = age_breakdown(date(2020, 11, 25), date(2021, 1, 5));
        assert_eq!((age.years, age.months, age.days), (0, 1, 11));
    }

    #[test]
    fn test_same_day_is_zero() {
        let age = age_breakdown(date(2021, 7, 4), date(2021, 7, 4));
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
    }

    #[test]
    fn test_breakdown_matches_anchor_dates() {
        // years/months added back onto the birth date plus days lands on as_of
        let birth = date(1987, 8, 31);
        for as_of in [date(2024, 2, 29), date(2023, 9, 30), date(2025, 3, 1), date(2000, 1, 1)] {
            let age = age_breakdown(birth, as_of);
            let anchor = birth
                .checked_add_months(chrono::Months::new(age.years * 12 + age.months))
                .unwrap();
            assert_eq!(
                anchor + chrono::Duration::days(age.days as i64),
                as_of,
                "{:?} -> {:?}",
                birth,
                as_of
            );
        }
    }

    #[test]
    fn test_next_birthday_later_this_year() {
        let (next, days) = next_birthday(date(1990, 12, 25), date(2024, 12, 1)).unwrap();
        assert_eq!(next, date(2024, 12, 25));
        assert_eq!(days, 24);
    }

    #[test]
    fn test_next_birthday_rolls_to_next_year() {
        let (next, days) = next_birthday(date(1990, 1, 10), date(2024, 3, 1)).unwrap();
        assert_eq!(next, date(2025, 1, 10));
        assert_eq!(days, 315);
    }

    #[test]
    fn test_next_birthday_today() {
        let (next, days) = next_birthday(date(1990, 3, 1), date(2024, 3, 1)).unwrap();
        assert_eq!(next, date(2024, 3, 1));
        assert_eq!(days, 0);
    }

    #[test]
    fn test_leap_birthday_in_common_year() {
        let (next, _) = next_birthday(date(2000, 2, 29), date(2023, 1, 1)).unwrap();
        assert_eq!(next, date(2023, 3, 1));
    }
}
