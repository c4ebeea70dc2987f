//! # Calculator Controller
//!
//! [`Controller`] owns one screen visit's state: the form input, the last
//! successful result and the current notice. Results always reflect the last
//! successful calculation; a rejected calculation leaves the previous result
//! in place and explains itself through the notice.
//!
//! Front ends hold controllers as `Box<dyn Screen>` so they can switch
//! between calculators without knowing their input types.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculators::TipCalculator;
//! use calc_core::controller::{Controller, Screen};
//! use calc_core::settings::Settings;
//!
//! let mut screen = Controller::<TipCalculator>::new(&Settings::default());
//! screen.set_field("bill_amount", "80").unwrap();
//! screen.set_field("people", "4").unwrap();
//! screen.calculate().unwrap();
//! println!("{}", screen.layout().render_text(72));
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::calculators::Calculator;
use crate::catalog::CalculatorInfo;
use crate::errors::{CalcError, CalcResult};
use crate::export::{export_results_pdf, ResultSheet};
use crate::form::Field;
use crate::settings::{NumberFormat, Settings};
use crate::template::{Notice, TwoPane};

/// Form state plus last result for one calculator.
pub struct Controller<C: Calculator> {
    input: C::Input,
    result: Option<C::Output>,
    notice: Option<Notice>,
    settings: Settings,
    format: NumberFormat,
}

impl<C: Calculator> Controller<C> {
    pub fn new(settings: &Settings) -> Self {
        Controller {
            input: Self::fresh_input(settings),
            result: None,
            notice: None,
            settings: settings.clone(),
            format: settings.number_format(),
        }
    }

    fn fresh_input(settings: &Settings) -> C::Input {
        let mut input = C::Input::default();
        C::configure(&mut input, settings);
        input
    }

    pub fn input(&self) -> &C::Input {
        &self.input
    }

    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }
}

/// Object-safe view of a [`Controller`].
pub trait Screen {
    fn info(&self) -> &'static CalculatorInfo;

    fn fields(&self) -> Vec<Field>;

    /// Edit one field. Unparseable numbers fall back to the field default.
    fn set_field(&mut self, key: &str, text: &str) -> CalcResult<()>;

    /// Validate and calculate. On failure the previous result is kept and
    /// the error is also stored as the notice.
    fn calculate(&mut self) -> CalcResult<()>;

    /// Restore default inputs and clear the result and notice.
    fn reset(&mut self);

    fn has_result(&self) -> bool;

    fn notice(&self) -> Option<&Notice>;

    fn set_notice(&mut self, notice: Option<Notice>);

    /// The two-pane layout for the current state.
    fn layout(&self) -> TwoPane;

    /// Snapshot for export. Fails when nothing has been calculated.
    fn result_sheet(&self) -> CalcResult<ResultSheet>;

    /// `{ "calculator", "input", "result" }` as JSON.
    fn to_json(&self) -> CalcResult<Value>;

    /// Replace the whole input from JSON (missing keys are an error).
    fn load_input_json(&mut self, value: Value) -> CalcResult<()>;

    /// Export the current results to `dir` and record the outcome as the notice.
    fn export_pdf(&mut self, dir: &Path) -> CalcResult<PathBuf> {
        let outcome = self.result_sheet().and_then(|sheet| export_results_pdf(&sheet, dir));
        match &outcome {
            Ok(path) => self.set_notice(Some(Notice::success(format!("Saved {}", path.display())))),
            Err(e) => {
                tracing::warn!(calculator = self.info().slug, error = %e, "export failed");
                self.set_notice(Some(Notice::error(e.to_string())));
            }
        }
        outcome
    }
}

impl<C: Calculator> Screen for Controller<C> {
    fn info(&self) -> &'static CalculatorInfo {
        C::info()
    }

    fn fields(&self) -> Vec<Field> {
        C::fields(&self.input)
    }

    fn set_field(&mut self, key: &str, text: &str) -> CalcResult<()> {
        C::set_field(&mut self.input, key, text)
    }

    fn calculate(&mut self) -> CalcResult<()> {
        let slug = C::info().slug;
        match C::calculate(&self.input) {
            Ok(result) => {
                tracing::debug!(calculator = slug, "calculation succeeded");
                self.result = Some(result);
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(calculator = slug, field = ?e.field(), error = %e, "calculation rejected");
                self.notice = Some(Notice::error(e.to_string()));
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.input = Self::fresh_input(&self.settings);
        self.result = None;
        self.notice = None;
    }

    fn has_result(&self) -> bool {
        self.result.is_some()
    }

    fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn layout(&self) -> TwoPane {
        TwoPane::build(
            C::info().name,
            |inputs| {
                inputs.extend(C::input_rows(&self.input, &self.format));
            },
            |results| {
                if let Some(result) = &self.result {
                    results.extend(C::result_rows(result, &self.format));
                }
            },
        )
        .with_notice(self.notice.clone())
    }

    fn result_sheet(&self) -> CalcResult<ResultSheet> {
        let result = self
            .result
            .as_ref()
            .ok_or_else(|| CalcError::export_failed("Nothing to export yet: calculate a result first"))?;
        let info = C::info();
        Ok(ResultSheet::new(
            info.slug,
            info.name,
            info.category.display_name(),
            C::input_rows(&self.input, &self.format),
            C::result_rows(result, &self.format),
        ))
    }

    fn to_json(&self) -> CalcResult<Value> {
        Ok(serde_json::json!({
            "calculator": C::info().slug,
            "input": serde_json::to_value(&self.input)?,
            "result": serde_json::to_value(&self.result)?,
        }))
    }

    fn load_input_json(&mut self, value: Value) -> CalcResult<()> {
        self.input = serde_json::from_value(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{FractionCalculator, TipCalculator};
    use crate::template::NoticeLevel;

    #[test]
    fn test_failed_calculation_keeps_previous_result() {
        let mut screen = Controller::<FractionCalculator>::new(&Settings::default());
        screen.calculate().unwrap();
        let first = screen.result().cloned().unwrap();

        screen.set_field("denominator2", "0").unwrap();
        let err = screen.calculate().unwrap_err();
        assert_eq!(err.field(), Some("denominator2"));
        assert_eq!(screen.result(), Some(&first));
        assert_eq!(screen.notice().unwrap().level, NoticeLevel::Error);

        screen.set_field("denominator2", "4").unwrap();
        screen.calculate().unwrap();
        assert!(screen.notice().is_none());
        assert_ne!(screen.result(), Some(&first));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut screen = Controller::<TipCalculator>::new(&Settings::default());
        screen.set_field("bill_amount", "120").unwrap();
        screen.calculate().unwrap();
        screen.set_notice(Some(Notice::info("hello")));

        screen.reset();
        assert!(!screen.has_result());
        assert!(screen.notice().is_none());
        assert_eq!(screen.input().bill_amount, 50.0);
    }

    #[test]
    fn test_layout_reflects_state() {
        let mut screen = Controller::<TipCalculator>::new(&Settings::default());
        let empty = screen.layout();
        assert_eq!(empty.title, "Tip Calculator");
        assert!(empty.results.is_empty());
        assert_eq!(empty.inputs.rows.len(), 3);

        screen.calculate().unwrap();
        assert!(!screen.layout().results.is_empty());
    }

    #[test]
    fn test_result_sheet_requires_result() {
        let screen = Controller::<TipCalculator>::new(&Settings::default());
        assert_eq!(screen.result_sheet().unwrap_err().error_code(), "EXPORT_FAILED");
    }

    #[test]
    fn test_settings_drive_formatting() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        let mut screen = Controller::<TipCalculator>::new(&settings);
        screen.calculate().unwrap();
        let sheet = screen.result_sheet().unwrap();
        assert_eq!(sheet.results[0].value, "€9.00");
        assert_eq!(sheet.category, "Financial");
    }

    #[test]
    fn test_json_input_roundtrip() {
        let mut screen = Controller::<TipCalculator>::new(&Settings::default());
        screen
            .load_input_json(serde_json::json!({ "bill_amount": 10.0, "tip_percent": 20.0, "people": 2 }))
            .unwrap();
        screen.calculate().unwrap();
        let json = screen.to_json().unwrap();
        assert_eq!(json["calculator"], "tip");
        assert_eq!(json["result"]["tip_amount"], 2.0);
        assert!(screen.load_input_json(serde_json::json!({ "bill": 1 })).is_err());
    }
}
