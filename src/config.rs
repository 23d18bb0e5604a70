use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_LEFT_LABEL: &str = "Response V1";
const DEFAULT_RIGHT_LABEL: &str = "Response V2";
const DEFAULT_PANE_WIDTH: usize = 60;
const MIN_PANE_WIDTH: usize = 20;

/// Optional YAML view configuration; every field falls back to a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub pane_width: Option<usize>,
    pub truncate_after: Option<usize>,
}

/// Command-line overrides; these win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ViewOverrides {
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub pane_width: Option<usize>,
    pub truncate_after: Option<usize>,
}

/// Resolved display configuration for the side-by-side view. The loader
/// itself takes no configuration; everything here is presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub left_label: String,
    pub right_label: String,
    pub pane_width: usize,
    pub truncate_after: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            left_label: DEFAULT_LEFT_LABEL.to_string(),
            right_label: DEFAULT_RIGHT_LABEL.to_string(),
            pane_width: DEFAULT_PANE_WIDTH,
            truncate_after: 0,
        }
    }
}

impl ViewConfig {
    /// Merge defaults, an optional config file, and CLI overrides, in that
    /// order of precedence.
    pub fn load(config_path: Option<&Path>, overrides: ViewOverrides) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("config file {} is unreadable", path.display()))?;
                serde_yaml::from_str::<FileConfig>(&raw)
                    .with_context(|| format!("config file {} is not valid YAML", path.display()))?
            }
            None => FileConfig::default(),
        };

        let defaults = ViewConfig::default();
        let config = ViewConfig {
            left_label: overrides
                .left_label
                .or(file.left_label)
                .unwrap_or(defaults.left_label),
            right_label: overrides
                .right_label
                .or(file.right_label)
                .unwrap_or(defaults.right_label),
            pane_width: overrides
                .pane_width
                .or(file.pane_width)
                .unwrap_or(defaults.pane_width),
            truncate_after: overrides
                .truncate_after
                .or(file.truncate_after)
                .unwrap_or(defaults.truncate_after),
        };

        if config.pane_width < MIN_PANE_WIDTH {
            bail!(
                "pane width {} is too narrow; at least {MIN_PANE_WIDTH} columns are required",
                config.pane_width
            );
        }

        Ok(config)
    }
}
