//! # calc_core - Calculator Engine
//!
//! `calc_core` backs Calcdeck, a catalogue of everyday calculators: finance,
//! health, dates, math and a few for fun. All inputs and outputs are
//! JSON-serializable so any front end (the CLI, the TUI, a script) can
//! drive them.
//!
//! ## Design Philosophy
//!
//! - **Pure formulas**: [`formulas`] holds stateless numeric transforms
//! - **One pattern per calculator**: `*Input` → `calculate()` → `*Result`
//! - **Rich Errors**: Structured error types that name the offending field
//! - **Shared layout**: Every screen renders the same two-pane template
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::catalog;
//! use calc_core::settings::Settings;
//!
//! let mut screen = catalog::open("quadratic", &Settings::default()).unwrap();
//! screen.set_field("b", "3").unwrap();
//! screen.set_field("c", "-4").unwrap();
//! screen.calculate().unwrap();
//!
//! let json = screen.to_json().unwrap();
//! assert_eq!(json["result"]["discriminant"], 25.0);
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Stateless math, one submodule per domain
//! - [`calculators`] - Input/result types and validation per calculator
//! - [`controller`] - Per-screen state and the object-safe [`Screen`] trait
//! - [`catalog`] - Registry of calculators by slug and category
//! - [`template`] - Two-pane layout model
//! - [`export`] - PDF export via Typst
//! - [`form`] - Text field model and lenient parsing
//! - [`settings`] - User preferences and number formatting
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic writes

pub mod calculators;
pub mod catalog;
pub mod controller;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod form;
pub mod formulas;
pub mod settings;
pub mod template;

// Re-export commonly used types at crate root for convenience
pub use catalog::{open, CalculatorInfo, CalculatorKind, Category};
pub use controller::{Controller, Screen};
pub use errors::{CalcError, CalcResult};
pub use export::{export_filename, export_results_pdf, render_results_pdf, ResultSheet};
pub use settings::{NumberFormat, Settings, UnitSystem};
pub use template::{Notice, NoticeLevel, Pane, Row, RowStyle, TwoPane};
