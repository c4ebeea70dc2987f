//! # Time Sheet Formulas
//!
//! Shift lengths from 24-hour `HH:MM` clock times.

use crate::errors::{CalcError, CalcResult};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse `HH:MM` (24-hour) into minutes after midnight.
///
/// # Example
/// ```rust
/// use calc_core::formulas::timesheet::parse_time;
///
/// assert_eq!(parse_time("09:30").unwrap(), 570);
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(text: &str) -> CalcResult<u32> {
    let invalid = || CalcError::invalid_input("time", text, "Expected a 24-hour time as HH:MM");
    let (h, m) = text.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = h.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = m.trim().parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Hours worked between two minute-of-day values, less an unpaid break.
///
/// An end time earlier than the start is an overnight shift (24h is added).
/// The result is floored at zero and rounded to two decimals.
pub fn shift_hours(start_minute: u32, end_minute: u32, break_minutes: u32) -> f64 {
    let mut worked = i64::from(end_minute) - i64::from(start_minute);
    if worked < 0 {
        worked += MINUTES_PER_DAY;
    }
    let worked = (worked - i64::from(break_minutes)).max(0);
    round2(worked as f64 / 60.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("00:00").unwrap(), 0);
        assert_eq!(parse_time("7:05").unwrap(), 425);
        assert_eq!(parse_time(" 23:59 ").unwrap(), 1439);
        assert!(parse_time("12").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("ab:cd").is_err());
    }

    #[test]
    fn test_day_shift_with_break() {
        let hours = shift_hours(parse_time("09:00").unwrap(), parse_time("17:30").unwrap(), 30);
        assert_eq!(hours, 8.0);
    }

    #[test]
    fn test_overnight_shift() {
        let hours = shift_hours(parse_time("22:00").unwrap(), parse_time("06:00").unwrap(), 0);
        assert_eq!(hours, 8.0);
    }

    #[test]
    fn test_break_longer_than_shift_floors_at_zero() {
        assert_eq!(shift_hours(600, 630, 60), 0.0);
        assert_eq!(shift_hours(540, 1020, 3_000_000_000), 0.0);
        assert_eq!(shift_hours(540, 1020, 2_147_483_648), 0.0);
        assert_eq!(shift_hours(540, 1020, u32::MAX), 0.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 20 minutes = 0.333.. hours
        assert_eq!(shift_hours(0, 20, 0), 0.33);
        assert_eq!(shift_hours(0, 40, 0), 0.67);
    }
}
