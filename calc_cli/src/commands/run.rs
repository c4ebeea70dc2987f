//! `calcdeck run`: one calculation from command-line assignments

use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_core::catalog;
use calc_core::form::parse_assignment;
use calc_core::settings::Settings;
use calc_core::Screen;
use serde_json::{json, Value};

pub struct RunArgs {
    pub slug: String,
    pub set: Vec<String>,
    pub input: Option<PathBuf>,
    pub json: bool,
    pub export: bool,
    pub out_dir: Option<PathBuf>,
    pub width: usize,
}

/// Build a screen from the arguments, without calculating.
fn prepare(settings: &Settings, args: &RunArgs) -> Result<Box<dyn Screen>> {
    let mut screen = catalog::open(&args.slug, settings)?;

    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;
        screen.load_input_json(value)?;
    }

    for assignment in &args.set {
        let (key, value) = parse_assignment(assignment)?;
        screen.set_field(key, value)?;
    }
    Ok(screen)
}

pub fn cmd_run(settings: &Settings, args: RunArgs) -> Result<()> {
    let mut screen = prepare(settings, &args)?;
    let outcome = screen.calculate();

    let export = match (&outcome, args.export) {
        (Ok(()), true) => {
            let dir = args.out_dir.clone().unwrap_or_else(|| settings.export_dir.clone());
            Some(screen.export_pdf(&dir))
        }
        _ => None,
    };

    if args.json {
        let mut output = screen.to_json()?;
        if let Err(e) = &outcome {
            output["error"] = json!({
                "code": e.error_code(),
                "field": e.field(),
                "message": e.to_string(),
            });
        }
        if let Some(Ok(path)) = &export {
            output["export"] = json!(path.display().to_string());
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", screen.layout().render_text(args.width));
    }

    outcome?;
    if let Some(export) = export {
        export?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(slug: &str, set: &[&str]) -> RunArgs {
        RunArgs {
            slug: slug.to_string(),
            set: set.iter().map(|s| s.to_string()).collect(),
            input: None,
            json: true,
            export: false,
            out_dir: None,
            width: 80,
        }
    }

    #[test]
    fn test_prepare_applies_assignments() {
        let mut screen = prepare(&Settings::default(), &args("tip", &["bill_amount=80", "people=4"])).unwrap();
        screen.calculate().unwrap();
        let json = screen.to_json().unwrap();
        assert_eq!(json["input"]["bill_amount"], 80.0);
        assert_eq!(json["input"]["people"], 4);
    }

    #[test]
    fn test_prepare_rejects_bad_assignment() {
        assert!(prepare(&Settings::default(), &args("tip", &["bill_amount"])).is_err());
        assert!(prepare(&Settings::default(), &args("tip", &["colour=red"])).is_err());
        assert!(prepare(&Settings::default(), &args("loan", &[])).is_err());
    }

    #[test]
    fn test_run_failure_is_error() {
        assert!(cmd_run(&Settings::default(), args("quadratic", &["a=0"])).is_err());
        assert!(cmd_run(&Settings::default(), args("quadratic", &["a=2"])).is_ok());
    }

    #[test]
    fn test_run_with_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut run = args("dog-age", &["dog_years=5"]);
        run.export = true;
        run.out_dir = Some(dir.path().to_path_buf());
        cmd_run(&Settings::default(), run).unwrap();
        assert!(dir.path().join("dog-age-results.pdf").exists());
    }

    #[test]
    fn test_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tip.json");
        std::fs::write(&path, r#"{"bill_amount": 40.0, "tip_percent": 25.0, "people": 2}"#).unwrap();
        let mut run = args("tip", &["people=4"]);
        run.input = Some(path);
        let mut screen = prepare(&Settings::default(), &run).unwrap();
        screen.calculate().unwrap();
        let json = screen.to_json().unwrap();
        assert_eq!(json["result"]["tip_amount"], 10.0);
        assert_eq!(json["input"]["people"], 4);
    }
}
