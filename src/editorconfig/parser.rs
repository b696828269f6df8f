//! Line-oriented parsing of `.editorconfig` text

use tracing::trace;

use crate::properties::{PropertyTable, PropertyValue};

/// One `[pattern]` block with its properties, pattern not yet compiled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub pattern: String,
    pub properties: PropertyTable,
}

/// A parsed config file: preamble properties plus sections in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub global: PropertyTable,
    pub sections: Vec<Section>,
}

/// Parse config file text. Never fails: lines that fit no form are skipped.
pub fn parse(text: &str) -> ConfigFile {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut file = ConfigFile::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        // Section header
        if let Some(pattern) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            file.sections.push(Section {
                pattern: pattern.to_string(),
                properties: PropertyTable::new(),
            });
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            trace!(line = index + 1, "ignoring line without `=`");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            trace!(line = index + 1, "ignoring assignment with empty key");
            continue;
        }

        let table = match file.sections.last_mut() {
            Some(section) => &mut section.properties,
            None => &mut file.global,
        };
        table.insert(key, PropertyValue::from_raw(value.trim()));
    }

    file
}
