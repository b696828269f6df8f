//! Configuration merging logic
//!
//! Priority: CLI args > ecfg.toml > defaults

use crate::editorconfig::DEFAULT_CONFIG_NAME;

use super::toml_schema::{EcfgToml, OutputFormat};

/// Effective settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_name: String,
    pub format: OutputFormat,
    pub walk: WalkSettings,
}

/// How directories named on the command line are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkSettings {
    pub hidden: bool,
    pub git_ignore: bool,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            hidden: false,
            git_ignore: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            format: OutputFormat::default(),
            walk: WalkSettings::default(),
        }
    }
}

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliSettings {
    pub config_name: Option<String>,
    pub format: Option<OutputFormat>,
    /// If Some(true), include hidden files
    pub hidden: Option<bool>,
    /// If Some(true), ignore .gitignore rules (inverted in config)
    pub no_ignore: Option<bool>,
}

/// Merge configurations from CLI, TOML, and defaults.
pub fn merge_settings(cli: &CliSettings, toml: Option<&EcfgToml>) -> Settings {
    let defaults = Settings::default();

    Settings {
        config_name: cli
            .config_name
            .clone()
            .or_else(|| toml.and_then(|t| t.resolve.config_name.clone()))
            .unwrap_or(defaults.config_name),
        format: cli
            .format
            .or_else(|| toml.and_then(|t| t.output.format))
            .unwrap_or(defaults.format),
        walk: WalkSettings {
            hidden: cli
                .hidden
                .or_else(|| toml.and_then(|t| t.walk.hidden))
                .unwrap_or(defaults.walk.hidden),
            git_ignore: cli
                .no_ignore
                .map(|no| !no)
                .or_else(|| toml.and_then(|t| t.walk.git_ignore))
                .unwrap_or(defaults.walk.git_ignore),
        },
    }
}
