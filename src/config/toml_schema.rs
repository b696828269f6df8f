//! TOML schema definitions for ecfg.toml

use serde::{Deserialize, Serialize};

/// Root structure for ecfg.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EcfgToml {
    /// Resolution settings
    #[serde(default)]
    pub resolve: ResolveSection,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,

    /// Directory walking settings
    #[serde(default)]
    pub walk: WalkSection,
}

/// `[resolve]` section in ecfg.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveSection {
    /// Config file name looked up in each directory (default: `.editorconfig`)
    pub config_name: Option<String>,
}

/// `[output]` section in ecfg.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format (default: plain)
    pub format: Option<OutputFormat>,
}

/// `[walk]` section in ecfg.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkSection {
    /// Include hidden files (default: false)
    pub hidden: Option<bool>,

    /// Respect .gitignore (default: true)
    pub git_ignore: Option<bool>,
}

/// How resolved properties are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key=value` lines, with `[path]` headers for several files
    #[default]
    Plain,
    /// One TOML table per file
    Toml,
}
