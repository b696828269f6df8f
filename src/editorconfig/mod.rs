//! `.editorconfig` file parsing.
//!
//! Parsing is split in two steps so a malformed section header only affects
//! its own section:
//! - [`parse`] turns text into a [`ConfigFile`] with raw section patterns
//! - [`ConfigLevel::compile`] compiles each pattern independently

mod level;
mod parser;

pub use level::{CompiledSection, ConfigLevel, ROOT_KEY};
pub use parser::{parse, ConfigFile, Section};

/// Default config file name looked up in each directory.
pub const DEFAULT_CONFIG_NAME: &str = ".editorconfig";
