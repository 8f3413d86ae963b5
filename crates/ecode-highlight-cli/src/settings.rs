use anyhow::{Context, Result};
use ecode_highlight_config::Config;

use crate::build_highlighter;

/// Applies `key=value` settings, checking palette entries against the highlighter.
pub fn apply(config: &mut Config, settings: &[(String, String)]) -> Result<()> {
    for (key, value) in settings {
        config.set(key, value)?;
    }
    build_highlighter(config)?;
    Ok(())
}

/// Prints the current preferences, or stores the given changes.
pub fn run(mut config: Config, settings: &[(String, String)]) -> Result<()> {
    if settings.is_empty() {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    apply(&mut config, settings)?;
    config.save().context("Failed to save config")?;
    log::info!("Saved settings to {}", Config::config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecode_highlight_config::Theme;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn applied_settings_survive_a_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::default();

        apply(
            &mut config,
            &pairs(&[("theme", "dark"), ("font-size", "18"), ("auto-save", "true")]),
        )
        .unwrap();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.font_size, 18);
        assert!(loaded.auto_save);
    }

    #[test]
    fn unknown_palette_category_is_rejected() {
        let mut config = Config::default();
        assert!(apply(&mut config, &pairs(&[("palette.numbers", "#112233")])).is_err());
        assert!(apply(&mut config, &pairs(&[("palette.number", "#12")])).is_err());
    }
}
