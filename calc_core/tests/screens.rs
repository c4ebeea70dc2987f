//! End-to-end checks driving calculators through the catalogue as a front end would.

use calc_core::catalog::{self, Category};
use calc_core::form::parse_assignment;
use calc_core::settings::{Settings, UnitSystem};
use calc_core::template::NoticeLevel;
use calc_core::CalcError;

fn open(slug: &str) -> Box<dyn calc_core::Screen> {
    catalog::open(slug, &Settings::default()).unwrap()
}

fn apply(screen: &mut dyn calc_core::Screen, assignments: &[&str]) {
    for a in assignments {
        let (key, value) = parse_assignment(a).unwrap();
        screen.set_field(key, value).unwrap();
    }
}

#[test]
fn every_calculator_computes_its_defaults() {
    let settings = Settings::default();
    for info in catalog::all() {
        let mut screen = catalog::open(info.slug, &settings).unwrap();
        // Required fields with no sensible default.
        match info.slug {
            "age" => apply(screen.as_mut(), &["birth_date=1990-01-01"]),
            "timesheet" => apply(screen.as_mut(), &["employee_name=Sam"]),
            _ => {}
        }
        screen.calculate().unwrap_or_else(|e| panic!("{} failed: {}", info.slug, e));
        assert!(!screen.layout().results.is_empty(), "{} rendered no results", info.slug);
    }
}

#[test]
fn category_filter_covers_catalogue() {
    let total: usize = Category::ALL.iter().map(|c| catalog::by_category(*c).count()).sum();
    assert_eq!(total, catalog::all().count());
    let math: Vec<_> = catalog::by_category(Category::Math).map(|c| c.slug).collect();
    assert_eq!(
        math,
        ["fraction", "permutation-combination", "quadratic", "triangle", "statistics"]
    );
}

#[test]
fn unknown_slug_is_not_found() {
    match catalog::open("loan-payoff", &Settings::default()) {
        Err(CalcError::CalculatorNotFound { .. }) => {}
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("unknown slug opened"),
    }
}

#[test]
fn rejected_input_keeps_previous_result() {
    let mut screen = open("statistics");
    apply(screen.as_mut(), &["values=1, 2, 3"]);
    screen.calculate().unwrap();
    let before = screen.to_json().unwrap()["result"].clone();
    assert_eq!(before["mean"], 2.0);

    apply(screen.as_mut(), &["values=1, two, 3"]);
    let err = screen.calculate().unwrap_err();
    assert_eq!(err.field(), Some("values"));
    assert_eq!(screen.to_json().unwrap()["result"], before);

    let layout = screen.layout();
    assert_eq!(layout.notice.as_ref().unwrap().level, NoticeLevel::Error);
    assert!(layout.render_text(80).contains("[!]"));
}

#[test]
fn age_requires_birth_date() {
    let mut screen = open("age");
    let err = screen.calculate().unwrap_err();
    assert_eq!(err.field(), Some("birth_date"));

    apply(screen.as_mut(), &["birth_date=1990-06-15", "as_of_date=2024-06-15"]);
    screen.calculate().unwrap();
    let json = screen.to_json().unwrap();
    assert_eq!(json["result"]["years"], 34);
    assert_eq!(json["result"]["days_until_next_birthday"], 0);
}

#[test]
fn triangle_mode_switch_changes_fields() {
    let mut screen = open("triangle");
    assert_eq!(screen.fields().len(), 3);
    apply(screen.as_mut(), &["mode=three-sides"]);
    assert_eq!(screen.fields().len(), 4);

    apply(screen.as_mut(), &["side_a=1", "side_b=2", "side_c=10"]);
    assert!(screen.calculate().is_err());
}

#[test]
fn imperial_settings_configure_bmi() {
    let settings = Settings {
        unit_system: UnitSystem::Imperial,
        ..Settings::default()
    };
    let mut screen = catalog::open("bmi", &settings).unwrap();
    assert_eq!(screen.fields()[0].value, "imperial");
    screen.calculate().unwrap();

    // Reset goes back to the configured defaults, not the metric ones.
    screen.reset();
    assert_eq!(screen.fields()[0].value, "imperial");
}

#[test]
fn export_writes_slug_named_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let mut screen = open("mortgage");

    assert!(screen.export_pdf(dir.path()).is_err());
    assert_eq!(screen.notice().unwrap().level, NoticeLevel::Error);

    screen.calculate().unwrap();
    let path = screen.export_pdf(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("mortgage-results.pdf"));
    assert_eq!(screen.notice().unwrap().level, NoticeLevel::Success);
    assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
}
