//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use scorecalc_core::model::{ActVariant, SatVariant};

/// Top-level scorecalc configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecalcConfig {
    /// ACT variant used when `--variant` is not given.
    #[serde(default)]
    pub default_act_variant: ActVariant,
    /// SAT variant used when neither `--variant` nor variant-specific flags are given.
    #[serde(default)]
    pub default_sat_variant: SatVariant,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Headline points a score must move by before `compare` reports it.
    #[serde(default)]
    pub decline_threshold: u32,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./scorecalc-results")
}

impl Default for ScorecalcConfig {
    fn default() -> Self {
        Self {
            default_act_variant: ActVariant::default(),
            default_sat_variant: SatVariant::default(),
            output_dir: default_output_dir(),
            decline_threshold: 0,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `scorecalc.toml` in the current directory
/// 2. `~/.config/scorecalc/config.toml`
///
/// Environment variable overrides: `SCORECALC_ACT_VARIANT`, `SCORECALC_SAT_VARIANT`.
pub fn load_config_from(path: Option<&Path>) -> Result<ScorecalcConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("scorecalc.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ScorecalcConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ScorecalcConfig::default(),
    };

    if let Ok(variant) = std::env::var("SCORECALC_ACT_VARIANT") {
        config.default_act_variant = variant
            .parse()
            .context("invalid SCORECALC_ACT_VARIANT")?;
    }
    if let Ok(variant) = std::env::var("SCORECALC_SAT_VARIANT") {
        config.default_sat_variant = variant
            .parse()
            .context("invalid SCORECALC_SAT_VARIANT")?;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("scorecalc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: ScorecalcConfig = toml::from_str(
            r#"
default_act_variant = "legacy"
default_sat_variant = "legacy"
output_dir = "out"
decline_threshold = 20
"#,
        )
        .unwrap();
        assert_eq!(config.default_act_variant, ActVariant::Legacy);
        assert_eq!(config.default_sat_variant, SatVariant::Legacy);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.decline_threshold, 20);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: ScorecalcConfig = toml::from_str("").unwrap();
        assert_eq!(config, ScorecalcConfig::default());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/scorecalc.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "decline_threshold = 5\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.decline_threshold, 5);
    }

    #[test]
    fn rejects_unknown_variant() {
        let result = toml::from_str::<ScorecalcConfig>("default_sat_variant = \"adaptive\"\n");
        assert!(result.is_err());
    }
}
