//! A config file with its section patterns compiled

use tracing::warn;

use super::parser::{self, ConfigFile};
use crate::error::PatternError;
use crate::glob::CompiledPattern;
use crate::properties::{PropertyTable, PropertyValue};

/// Reserved preamble key that stops the upward walk when `true`.
pub const ROOT_KEY: &str = "root";

/// A section whose header may have failed to compile.
#[derive(Debug, Clone)]
pub struct CompiledSection {
    pub pattern: Result<CompiledPattern, PatternError>,
    pub properties: PropertyTable,
}

/// One directory's config file, ready for matching.
#[derive(Debug, Clone, Default)]
pub struct ConfigLevel {
    pub global: PropertyTable,
    pub sections: Vec<CompiledSection>,
    pub is_root: bool,
}

impl ConfigLevel {
    /// Compile every section of a parsed file.
    ///
    /// The `root` key is removed from the global table and recorded as
    /// [`ConfigLevel::is_root`]; it is never reported as a property.
    pub fn compile(file: ConfigFile) -> Self {
        let ConfigFile {
            mut global,
            sections,
        } = file;

        let root_keys: Vec<String> = global
            .iter()
            .map(|(key, _)| key)
            .filter(|key| key.eq_ignore_ascii_case(ROOT_KEY))
            .cloned()
            .collect();
        let mut is_root = false;
        for key in root_keys {
            if let Some(PropertyValue::Bool(true)) = global.remove(&key) {
                is_root = true;
            }
        }

        let sections = sections
            .into_iter()
            .map(|section| {
                let pattern = CompiledPattern::compile(&section.pattern);
                if let Err(e) = &pattern {
                    warn!(pattern = %section.pattern, "skipping section: {e}");
                }
                CompiledSection {
                    pattern,
                    properties: section.properties,
                }
            })
            .collect();

        Self {
            global,
            sections,
            is_root,
        }
    }

    /// Parse and compile config file text.
    pub fn from_text(text: &str) -> Self {
        Self::compile(parser::parse(text))
    }

    /// Properties of every matching section, later sections overriding earlier ones.
    pub fn matching_properties(&self, basename: &str, relative_path: &str) -> PropertyTable {
        let mut table = PropertyTable::new();
        for section in &self.sections {
            if let Ok(pattern) = &section.pattern {
                if pattern.matches(basename, relative_path) {
                    table.overlay(&section.properties);
                }
            }
        }
        table
    }

    /// Sections whose header failed to compile.
    pub fn invalid_sections(&self) -> impl Iterator<Item = &PatternError> {
        self.sections.iter().filter_map(|s| s.pattern.as_ref().err())
    }
}
