//! `calcdeck config` and settings discovery

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use calc_core::settings::{Settings, SETTINGS_FILE};

/// Load settings from `explicit`, or from `./calcdeck.json` when present.
///
/// An explicit path must exist; the default path falls back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<(Settings, PathBuf)> {
    match explicit {
        Some(path) => {
            let settings = Settings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            Ok((settings, path.to_path_buf()))
        }
        None => {
            let path = PathBuf::from(SETTINGS_FILE);
            let settings = Settings::load_or_default(&path)?;
            Ok((settings, path))
        }
    }
}

pub fn cmd_config_show(settings: &Settings, path: &Path) -> Result<()> {
    if path.exists() {
        println!("Using settings file: {}", path.display());
    } else {
        println!("Using default settings (no {} found)", path.display());
    }
    println!();
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

pub fn cmd_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default().save(path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcdeck.json");

        cmd_config_init(&path, false).unwrap();
        assert!(cmd_config_init(&path, false).is_err());
        cmd_config_init(&path, true).unwrap();

        let (settings, loaded_from) = load_settings(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(loaded_from, path);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(&dir.path().join("nope.json"))).is_err());
    }
}
