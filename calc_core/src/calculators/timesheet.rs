//! # Time Sheet Calculator
//!
//! Weekly hours from per-day clock-in/clock-out times, with overtime past a
//! weekly threshold and optional gross pay.
//!
//! A day with both times blank is a day off. Hours per entry are always
//! derived from the entry's times, never stored.

use serde::{Deserialize, Serialize};

use super::{highlight, row, section, Calculator};
use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::form::{parse_f64_or, parse_u32_or, unknown_field, Field, FieldKind};
use crate::formulas::timesheet::{parse_time, round2, shift_hours};
use crate::settings::NumberFormat;
use crate::template::Row;

/// Overtime pay multiplier
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Day name plus the field keys and labels for its start, end and break.
struct DayKeys {
    day: &'static str,
    start: &'static str,
    end: &'static str,
    break_minutes: &'static str,
    start_label: &'static str,
    end_label: &'static str,
    break_label: &'static str,
}

const DAYS: [DayKeys; 7] = [
    DayKeys {
        day: "Monday",
        start: "mon_start",
        end: "mon_end",
        break_minutes: "mon_break",
        start_label: "Mon in",
        end_label: "Mon out",
        break_label: "Mon break (min)",
    },
    DayKeys {
        day: "Tuesday",
        start: "tue_start",
        end: "tue_end",
        break_minutes: "tue_break",
        start_label: "Tue in",
        end_label: "Tue out",
        break_label: "Tue break (min)",
    },
    DayKeys {
        day: "Wednesday",
        start: "wed_start",
        end: "wed_end",
        break_minutes: "wed_break",
        start_label: "Wed in",
        end_label: "Wed out",
        break_label: "Wed break (min)",
    },
    DayKeys {
        day: "Thursday",
        start: "thu_start",
        end: "thu_end",
        break_minutes: "thu_break",
        start_label: "Thu in",
        end_label: "Thu out",
        break_label: "Thu break (min)",
    },
    DayKeys {
        day: "Friday",
        start: "fri_start",
        end: "fri_end",
        break_minutes: "fri_break",
        start_label: "Fri in",
        end_label: "Fri out",
        break_label: "Fri break (min)",
    },
    DayKeys {
        day: "Saturday",
        start: "sat_start",
        end: "sat_end",
        break_minutes: "sat_break",
        start_label: "Sat in",
        end_label: "Sat out",
        break_label: "Sat break (min)",
    },
    DayKeys {
        day: "Sunday",
        start: "sun_start",
        end: "sun_end",
        break_minutes: "sun_break",
        start_label: "Sun in",
        end_label: "Sun out",
        break_label: "Sun break (min)",
    },
];

/// One day's clock times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub day: String,
    /// `HH:MM`, blank on a day off
    pub start_time: String,
    pub end_time: String,
    /// Unpaid break in minutes
    pub break_minutes: u32,
}

impl TimeEntry {
    pub fn new(day: &str, start: &str, end: &str, break_minutes: u32) -> Self {
        TimeEntry {
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            break_minutes,
        }
    }

    pub fn is_day_off(&self) -> bool {
        self.start_time.trim().is_empty() && self.end_time.trim().is_empty()
    }

    /// Hours worked, derived from the clock times and break.
    pub fn computed_hours(&self) -> CalcResult<f64> {
        if self.is_day_off() {
            return Ok(0.0);
        }
        let keys = DAYS.iter().find(|k| k.day == self.day);
        let start_key = keys.map(|k| k.start).unwrap_or("start_time");
        let end_key = keys.map(|k| k.end).unwrap_or("end_time");

        let start = self.parse_clock(&self.start_time, start_key)?;
        let end = self.parse_clock(&self.end_time, end_key)?;
        Ok(shift_hours(start, end, self.break_minutes))
    }

    fn parse_clock(&self, text: &str, key: &str) -> CalcResult<u32> {
        if text.trim().is_empty() {
            return Err(CalcError::missing_field(key));
        }
        parse_time(text).map_err(|_| {
            CalcError::invalid_input(key, text, format!("{}: expected a 24-hour time as HH:MM", self.day))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetInput {
    pub employee_name: String,

    /// Hourly rate; 0 skips the pay calculation
    pub hourly_rate: f64,

    /// Weekly hours before overtime applies
    pub overtime_after_hours: f64,

    /// Monday through Sunday
    pub entries: Vec<TimeEntry>,
}

impl Default for TimesheetInput {
    fn default() -> Self {
        let entries = DAYS
            .iter()
            .enumerate()
            .map(|(i, k)| {
                if i < 5 {
                    TimeEntry::new(k.day, "09:00", "17:00", 30)
                } else {
                    TimeEntry::new(k.day, "", "", 0)
                }
            })
            .collect();
        TimesheetInput {
            employee_name: String::new(),
            hourly_rate: 0.0,
            overtime_after_hours: 40.0,
            entries,
        }
    }
}

impl TimesheetInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.employee_name.trim().is_empty() {
            return Err(CalcError::missing_field("employee_name"));
        }
        if self.hourly_rate < 0.0 {
            return Err(CalcError::invalid_input(
                "hourly_rate",
                self.hourly_rate.to_string(),
                "Hourly rate cannot be negative",
            ));
        }
        if self.overtime_after_hours < 0.0 {
            return Err(CalcError::invalid_input(
                "overtime_after",
                self.overtime_after_hours.to_string(),
                "Overtime threshold cannot be negative",
            ));
        }
        Ok(())
    }

    fn entry_mut(&mut self, day: &str) -> &mut TimeEntry {
        if let Some(idx) = self.entries.iter().position(|e| e.day == day) {
            &mut self.entries[idx]
        } else {
            self.entries.push(TimeEntry::new(day, "", "", 0));
            let last = self.entries.len() - 1;
            &mut self.entries[last]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub day: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetResult {
    pub employee_name: String,
    pub days: Vec<DayHours>,
    pub days_worked: usize,
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    /// `None` when no hourly rate was given
    pub gross_pay: Option<f64>,
}

pub fn calculate(input: &TimesheetInput) -> CalcResult<TimesheetResult> {
    input.validate()?;

    let mut days = Vec::with_capacity(input.entries.len());
    for entry in &input.entries {
        days.push(DayHours {
            day: entry.day.clone(),
            hours: entry.computed_hours()?,
        });
    }

    let total_hours = round2(days.iter().map(|d| d.hours).sum());
    let regular_hours = total_hours.min(input.overtime_after_hours);
    let overtime_hours = round2(total_hours - regular_hours);
    let gross_pay = (input.hourly_rate > 0.0).then(|| {
        round2(input.hourly_rate * (regular_hours + overtime_hours * OVERTIME_MULTIPLIER))
    });

    tracing::debug!(total_hours, overtime_hours, "timesheet calculated");

    Ok(TimesheetResult {
        employee_name: input.employee_name.trim().to_string(),
        days_worked: days.iter().filter(|d| d.hours > 0.0).count(),
        days,
        total_hours,
        regular_hours,
        overtime_hours,
        gross_pay,
    })
}

pub struct TimesheetCalculator;

impl Calculator for TimesheetCalculator {
    type Input = TimesheetInput;
    type Output = TimesheetResult;

    const KIND: CalculatorKind = CalculatorKind::Timesheet;

    fn fields(input: &TimesheetInput) -> Vec<Field> {
        let mut fields = vec![
            Field::new("employee_name", "Employee", FieldKind::Text, input.employee_name.clone()),
            Field::number("hourly_rate", "Hourly rate", input.hourly_rate).with_hint("0 to skip pay"),
            Field::number("overtime_after", "Overtime after (h)", input.overtime_after_hours),
        ];
        for keys in &DAYS {
            let entry = input.entries.iter().find(|e| e.day == keys.day);
            let start = entry.map(|e| e.start_time.clone()).unwrap_or_default();
            let end = entry.map(|e| e.end_time.clone()).unwrap_or_default();
            let brk = entry.map(|e| e.break_minutes).unwrap_or(0);
            fields.push(Field::new(keys.start, keys.start_label, FieldKind::Time, start).with_hint("HH:MM"));
            fields.push(Field::new(keys.end, keys.end_label, FieldKind::Time, end).with_hint("HH:MM"));
            fields.push(Field::integer(keys.break_minutes, keys.break_label, brk));
        }
        fields
    }

    fn set_field(input: &mut TimesheetInput, key: &str, text: &str) -> CalcResult<()> {
        let d = TimesheetInput::default();
        match key {
            "employee_name" => input.employee_name = text.trim().to_string(),
            "hourly_rate" => input.hourly_rate = parse_f64_or(text, d.hourly_rate),
            "overtime_after" => input.overtime_after_hours = parse_f64_or(text, d.overtime_after_hours),
            _ => {
                let keys = DAYS
                    .iter()
                    .find(|k| k.start == key || k.end == key || k.break_minutes == key)
                    .ok_or_else(|| unknown_field("timesheet", key))?;
                let entry = input.entry_mut(keys.day);
                if key == keys.start {
                    entry.start_time = text.trim().to_string();
                } else if key == keys.end {
                    entry.end_time = text.trim().to_string();
                } else {
                    entry.break_minutes = parse_u32_or(text, 0);
                }
            }
        }
        Ok(())
    }

    fn calculate(input: &TimesheetInput) -> CalcResult<TimesheetResult> {
        calculate(input)
    }

    fn input_rows(input: &TimesheetInput, fmt: &NumberFormat) -> Vec<Row> {
        let mut rows = vec![row("Employee", input.employee_name.as_str())];
        if input.hourly_rate > 0.0 {
            rows.push(row("Hourly rate", fmt.money(input.hourly_rate)));
        }
        rows.push(row("Overtime after", format!("{} h", fmt.number(input.overtime_after_hours))));
        for entry in &input.entries {
            let value = if entry.is_day_off() {
                "off".to_string()
            } else {
                format!(
                    "{} – {} ({} min break)",
                    entry.start_time, entry.end_time, entry.break_minutes
                )
            };
            rows.push(row(entry.day.as_str(), value));
        }
        rows
    }

    fn result_rows(result: &TimesheetResult, fmt: &NumberFormat) -> Vec<Row> {
        let mut rows = vec![
            highlight("Total hours", fmt.number(result.total_hours)),
            row("Regular hours", fmt.number(result.regular_hours)),
            row("Overtime hours", fmt.number(result.overtime_hours)),
            row("Days worked", result.days_worked.to_string()),
        ];
        if let Some(pay) = result.gross_pay {
            rows.push(highlight("Gross pay", fmt.money(pay)));
        }
        rows.push(section("Hours by day"));
        rows.extend(result.days.iter().map(|d| row(d.day.as_str(), fmt.number(d.hours))));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named() -> TimesheetInput {
        TimesheetInput {
            employee_name: "Sam".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_week() {
        let result = calculate(&named()).unwrap();
        assert_eq!(result.days.len(), 7);
        assert_eq!(result.days[0].hours, 7.5);
        assert_eq!(result.total_hours, 37.5);
        assert_eq!(result.days_worked, 5);
        assert_eq!(result.overtime_hours, 0.0);
        assert_eq!(result.gross_pay, None);
    }

    #[test]
    fn test_overtime_and_pay() {
        let mut input = named();
        input.hourly_rate = 20.0;
        TimesheetCalculator::set_field(&mut input, "sat_start", "22:00").unwrap();
        TimesheetCalculator::set_field(&mut input, "sat_end", "06:00").unwrap();

        let result = calculate(&input).unwrap();
        // Overnight shift counts 8 hours
        assert_eq!(result.days[5].hours, 8.0);
        assert_eq!(result.total_hours, 45.5);
        assert_eq!(result.overtime_hours, 5.5);
        assert_eq!(result.gross_pay, Some(20.0 * 40.0 + 20.0 * 1.5 * 5.5));
    }

    #[test]
    fn test_computed_hours_follow_times() {
        let mut entry = TimeEntry::new("Monday", "08:00", "12:00", 0);
        assert_eq!(entry.computed_hours().unwrap(), 4.0);
        entry.end_time = "13:30".to_string();
        assert_eq!(entry.computed_hours().unwrap(), 5.5);
    }

    #[test]
    fn test_huge_break_zeroes_the_day() {
        let mut input = named();
        TimesheetCalculator::set_field(&mut input, "mon_break", "3000000000").unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.days[0].hours, 0.0);
        assert_eq!(result.total_hours, 30.0);
    }

    #[test]
    fn test_name_required() {
        let err = calculate(&TimesheetInput::default()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("employee_name"));
    }

    #[test]
    fn test_half_filled_day_and_bad_time() {
        let mut input = named();
        TimesheetCalculator::set_field(&mut input, "sun_start", "10:00").unwrap();
        assert_eq!(calculate(&input).unwrap_err(), CalcError::missing_field("sun_end"));

        TimesheetCalculator::set_field(&mut input, "sun_end", "25:61").unwrap();
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("sun_end"));
    }

    #[test]
    fn test_fields_cover_every_day() {
        let fields = TimesheetCalculator::fields(&TimesheetInput::default());
        assert_eq!(fields.len(), 3 + 7 * 3);
        assert!(fields.iter().any(|f| f.key == "wed_break" && f.value == "30"));
        assert!(TimesheetCalculator::set_field(&mut named(), "xyz_start", "09:00").is_err());
    }
}
