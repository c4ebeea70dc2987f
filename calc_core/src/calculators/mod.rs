//! # Calculators
//!
//! Each calculator follows the pattern:
//!
//! - `*Input` - Form state (JSON-serializable, `Default` gives the initial form)
//! - `*Result` - Derived outputs (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Validation plus formulas
//!
//! and implements [`Calculator`], which binds those pieces to the form-field
//! model and the two-pane template.
//!
//! ## Available Calculators
//!
//! - [`mortgage`] - Monthly payment and amortization (financial)
//! - [`tip`] - Tip and bill split (financial)
//! - [`bmi`] - Body mass index (health)
//! - [`age`] - Age breakdown and next birthday (general)
//! - [`timesheet`] - Weekly hours and pay (general)
//! - [`fraction`] - Fraction arithmetic (math)
//! - [`permutation`] - Permutations and combinations (math)
//! - [`quadratic`] - Quadratic roots (math)
//! - [`triangle`] - Triangle area and perimeter (math)
//! - [`statistics`] - Descriptive statistics (math)
//! - [`dog_age`] - Dog years (fun)

pub mod age;
pub mod bmi;
pub mod dog_age;
pub mod fraction;
pub mod mortgage;
pub mod permutation;
pub mod quadratic;
pub mod statistics;
pub mod timesheet;
pub mod tip;
pub mod triangle;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{self, CalculatorInfo, CalculatorKind};
use crate::errors::CalcResult;
use crate::form::Field;
use crate::settings::{NumberFormat, Settings};
use crate::template::Row;

pub use age::AgeCalculator;
pub use bmi::BmiCalculator;
pub use dog_age::DogAgeCalculator;
pub use fraction::FractionCalculator;
pub use mortgage::MortgageCalculator;
pub use permutation::PermutationCalculator;
pub use quadratic::QuadraticCalculator;
pub use statistics::StatisticsCalculator;
pub use timesheet::TimesheetCalculator;
pub use tip::TipCalculator;
pub use triangle::TriangleCalculator;

/// Binding between a calculator's input/result types and the shared form and
/// template machinery.
pub trait Calculator {
    type Input: Default + Clone + Debug + Serialize + DeserializeOwned;
    type Output: Clone + Debug + Serialize;

    const KIND: CalculatorKind;

    fn info() -> &'static CalculatorInfo {
        catalog::info(Self::KIND)
    }

    /// Apply user settings to a fresh input (e.g. preferred units).
    fn configure(_input: &mut Self::Input, _settings: &Settings) {}

    /// Editable fields with their current text.
    fn fields(input: &Self::Input) -> Vec<Field>;

    /// Update one field from text. Numeric text that fails to parse falls back
    /// to the field's default; an unknown key is an error.
    fn set_field(input: &mut Self::Input, key: &str, text: &str) -> CalcResult<()>;

    fn calculate(input: &Self::Input) -> CalcResult<Self::Output>;

    /// Rows describing the inputs, for the template and exports.
    fn input_rows(input: &Self::Input, _fmt: &NumberFormat) -> Vec<Row> {
        Self::fields(input)
            .into_iter()
            .map(|f| Row {
                label: f.label.to_string(),
                value: f.value,
                style: Default::default(),
            })
            .collect()
    }

    /// Rows describing a result.
    fn result_rows(output: &Self::Output, fmt: &NumberFormat) -> Vec<Row>;
}

pub(crate) fn row(label: impl Into<String>, value: impl Into<String>) -> Row {
    Row {
        label: label.into(),
        value: value.into(),
        style: crate::template::RowStyle::Normal,
    }
}

pub(crate) fn highlight(label: impl Into<String>, value: impl Into<String>) -> Row {
    Row {
        label: label.into(),
        value: value.into(),
        style: crate::template::RowStyle::Highlight,
    }
}

pub(crate) fn section(title: impl Into<String>) -> Row {
    Row {
        label: title.into(),
        value: String::new(),
        style: crate::template::RowStyle::Section,
    }
}
