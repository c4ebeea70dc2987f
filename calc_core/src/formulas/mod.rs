//! # Formula Library
//!
//! Every numeric transform used by the calculators lives here, one module per
//! domain. Formulas are pure: no I/O, no state kept between calls. Functions
//! that document a caller-checked precondition (e.g. a nonzero leading
//! coefficient) do not validate it themselves; the calculators in
//! [`crate::calculators`] do.
//!
//! ## Modules
//!
//! - [`finance`] - Mortgage payment, amortization schedule, tip split
//! - [`health`] - BMI and weight-status bands
//! - [`dates`] - Calendar-aware age breakdown, next birthday
//! - [`fraction`] - Exact fraction arithmetic
//! - [`combinatorics`] - Factorials, permutations, combinations
//! - [`quadratic`] - Quadratic roots (real and complex)
//! - [`triangle`] - Base-height and Heron areas, classification
//! - [`timesheet`] - Shift hours from clock times
//! - [`statistics`] - Descriptive statistics
//! - [`fun`] - Dog-to-human age

pub mod combinatorics;
pub mod dates;
pub mod finance;
pub mod fraction;
pub mod fun;
pub mod health;
pub mod quadratic;
pub mod statistics;
pub mod timesheet;
pub mod triangle;

pub use combinatorics::{combination, factorial, permutation, MAX_FACTORIAL_N};
pub use dates::{age_breakdown, next_birthday, AgeBreakdown};
pub use finance::{amortization_schedule, mortgage_payment, tip_split, AmortizationYear, TipSplit};
pub use fraction::{Fraction, FractionOp};
pub use fun::dog_to_human_years;
pub use health::{bmi, bmi_category, bmi_color, healthy_weight_range, BmiCategory};
pub use quadratic::{solve_quadratic, QuadraticSolution, Root};
pub use statistics::{summarize, Summary};
pub use timesheet::{parse_time, shift_hours};
pub use triangle::{area_base_height, classify, heron_area, perimeter, validate_sides, AngleKind, SideKind};
