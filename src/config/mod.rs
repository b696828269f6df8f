//! Settings for the `ecfg` command.
//!
//! This module provides:
//! - Loading settings from `ecfg.toml`
//! - Settings file discovery (search upward from current directory)
//! - Merging CLI args, settings file, and defaults

mod file;
mod merge;
mod toml_schema;

pub use file::{find_config_file, find_file_upward, load_config, ConfigError, TOOL_CONFIG_NAME};
pub use merge::{merge_settings, CliSettings, Settings, WalkSettings};
pub use toml_schema::{EcfgToml, OutputFormat, OutputSection, ResolveSection, WalkSection};
