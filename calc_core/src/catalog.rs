//! # Calculator Catalogue
//!
//! Static registry of every calculator: slug, display name, category and a
//! one-line description. [`open`] builds a fresh screen for a slug.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::catalog::{self, Category};
//! use calc_core::settings::Settings;
//!
//! let math: Vec<_> = catalog::by_category(Category::Math).map(|c| c.slug).collect();
//! assert!(math.contains(&"quadratic"));
//!
//! let screen = catalog::open("bmi", &Settings::default()).unwrap();
//! assert_eq!(screen.info().name, "BMI Calculator");
//! ```

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculators::{
    AgeCalculator, BmiCalculator, DogAgeCalculator, FractionCalculator, MortgageCalculator,
    PermutationCalculator, QuadraticCalculator, StatisticsCalculator, TimesheetCalculator,
    TipCalculator, TriangleCalculator,
};
use crate::controller::{Controller, Screen};
use crate::errors::{CalcError, CalcResult};
use crate::settings::Settings;

/// Catalogue grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Financial,
    Health,
    Math,
    General,
    Fun,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Financial,
        Category::Health,
        Category::Math,
        Category::General,
        Category::Fun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Math => "math",
            Category::General => "general",
            Category::Fun => "fun",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::Health => "Health",
            Category::Math => "Math",
            Category::General => "General",
            Category::Fun => "Fun",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Identifies a calculator. Discriminants index [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    Mortgage,
    Tip,
    Bmi,
    Age,
    Timesheet,
    Fraction,
    PermutationCombination,
    Quadratic,
    Triangle,
    Statistics,
    DogAge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorInfo {
    pub kind: CalculatorKind,
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

/// Every calculator, in navigation order.
pub static CATALOG: [CalculatorInfo; 11] = [
    CalculatorInfo {
        kind: CalculatorKind::Mortgage,
        slug: "mortgage",
        name: "Mortgage Calculator",
        category: Category::Financial,
        description: "Monthly payment, total interest and yearly amortization",
    },
    CalculatorInfo {
        kind: CalculatorKind::Tip,
        slug: "tip",
        name: "Tip Calculator",
        category: Category::Financial,
        description: "Tip amount and per-person split of a bill",
    },
    CalculatorInfo {
        kind: CalculatorKind::Bmi,
        slug: "bmi",
        name: "BMI Calculator",
        category: Category::Health,
        description: "Body mass index, weight category and healthy weight range",
    },
    CalculatorInfo {
        kind: CalculatorKind::Age,
        slug: "age",
        name: "Age Calculator",
        category: Category::General,
        description: "Exact age in years, months and days; days to next birthday",
    },
    CalculatorInfo {
        kind: CalculatorKind::Timesheet,
        slug: "timesheet",
        name: "Time Sheet Calculator",
        category: Category::General,
        description: "Weekly hours worked, overtime and gross pay",
    },
    CalculatorInfo {
        kind: CalculatorKind::Fraction,
        slug: "fraction",
        name: "Fraction Calculator",
        category: Category::Math,
        description: "Add, subtract, multiply and divide fractions",
    },
    CalculatorInfo {
        kind: CalculatorKind::PermutationCombination,
        slug: "permutation-combination",
        name: "Permutation & Combination Calculator",
        category: Category::Math,
        description: "nPr and nCr for n up to 170",
    },
    CalculatorInfo {
        kind: CalculatorKind::Quadratic,
        slug: "quadratic",
        name: "Quadratic Equation Solver",
        category: Category::Math,
        description: "Real or complex roots of ax² + bx + c = 0",
    },
    CalculatorInfo {
        kind: CalculatorKind::Triangle,
        slug: "triangle",
        name: "Triangle Calculator",
        category: Category::Math,
        description: "Area from base and height or from three sides",
    },
    CalculatorInfo {
        kind: CalculatorKind::Statistics,
        slug: "statistics",
        name: "Statistics Calculator",
        category: Category::Math,
        description: "Mean, median, mode, range and standard deviation",
    },
    CalculatorInfo {
        kind: CalculatorKind::DogAge,
        slug: "dog-age",
        name: "Dog Age Calculator",
        category: Category::Fun,
        description: "Your dog's age in human years",
    },
];

static BY_SLUG: Lazy<HashMap<&'static str, &'static CalculatorInfo>> =
    Lazy::new(|| CATALOG.iter().map(|info| (info.slug, info)).collect());

pub fn info(kind: CalculatorKind) -> &'static CalculatorInfo {
    &CATALOG[kind as usize]
}

pub fn all() -> impl Iterator<Item = &'static CalculatorInfo> {
    CATALOG.iter()
}

/// Look up a calculator by slug (case-insensitive).
pub fn find(slug: &str) -> CalcResult<&'static CalculatorInfo> {
    let key = slug.trim().to_ascii_lowercase();
    BY_SLUG
        .get(key.as_str())
        .copied()
        .ok_or_else(|| CalcError::calculator_not_found(slug))
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static CalculatorInfo> {
    CATALOG.iter().filter(move |info| info.category == category)
}

/// A fresh screen for `kind`.
pub fn screen(kind: CalculatorKind, settings: &Settings) -> Box<dyn Screen> {
    match kind {
        CalculatorKind::Mortgage => Box::new(Controller::<MortgageCalculator>::new(settings)),
        CalculatorKind::Tip => Box::new(Controller::<TipCalculator>::new(settings)),
        CalculatorKind::Bmi => Box::new(Controller::<BmiCalculator>::new(settings)),
        CalculatorKind::Age => Box::new(Controller::<AgeCalculator>::new(settings)),
        CalculatorKind::Timesheet => Box::new(Controller::<TimesheetCalculator>::new(settings)),
        CalculatorKind::Fraction => Box::new(Controller::<FractionCalculator>::new(settings)),
        CalculatorKind::PermutationCombination => {
            Box::new(Controller::<PermutationCalculator>::new(settings))
        }
        CalculatorKind::Quadratic => Box::new(Controller::<QuadraticCalculator>::new(settings)),
        CalculatorKind::Triangle => Box::new(Controller::<TriangleCalculator>::new(settings)),
        CalculatorKind::Statistics => Box::new(Controller::<StatisticsCalculator>::new(settings)),
        CalculatorKind::DogAge => Box::new(Controller::<DogAgeCalculator>::new(settings)),
    }
}

/// A fresh screen for `slug`.
pub fn open(slug: &str, settings: &Settings) -> CalcResult<Box<dyn Screen>> {
    let info = find(slug)?;
    tracing::debug!(slug = info.slug, "opening calculator");
    Ok(screen(info.kind, settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_indexes_catalog() {
        for (idx, entry) in CATALOG.iter().enumerate() {
            assert_eq!(entry.kind as usize, idx, "{} is out of order", entry.slug);
            assert_eq!(info(entry.kind).slug, entry.slug);
        }
    }

    #[test]
    fn test_slugs_unique() {
        assert_eq!(BY_SLUG.len(), CATALOG.len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Quadratic").unwrap().kind, CalculatorKind::Quadratic);
        let err = find("loan").unwrap_err();
        assert_eq!(err, CalcError::calculator_not_found("loan"));
    }

    #[test]
    fn test_every_category_populated() {
        for category in Category::ALL {
            assert!(by_category(category).count() > 0, "{} is empty", category);
        }
        assert_eq!(by_category(Category::Financial).count(), 2);
        assert_eq!(Category::parse("MATH"), Some(Category::Math));
        assert_eq!(Category::parse("sport"), None);
    }

    #[test]
    fn test_open_matches_info() {
        let settings = Settings::default();
        for entry in all() {
            let screen = open(entry.slug, &settings).unwrap();
            assert_eq!(screen.info(), entry);
            assert!(!screen.fields().is_empty());
        }
    }
}
