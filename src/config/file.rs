//! Config file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::toml_schema::EcfgToml;

/// Name of the tool's own settings file
pub const TOOL_CONFIG_NAME: &str = "ecfg.toml";

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
/// Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.is_file() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find ecfg.toml by searching upward from the given directory.
///
/// Stops at the first `ecfg.toml` found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, TOOL_CONFIG_NAME, true)
}

/// Load and parse ecfg.toml from the given path.
pub fn load_config(path: &Path) -> Result<EcfgToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: EcfgToml = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("ecfg.toml");
        fs::write(&config_path, "[resolve]\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join("ecfg.toml");
        fs::write(&config_path, "[resolve]\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir);
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_ignores_directory_with_config_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("ecfg.toml")).unwrap();

        assert_eq!(find_config_file(dir.path()), None);
    }

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("ecfg.toml");
        fs::write(
            &config_path,
            r#"
[resolve]
config_name = ".styleconfig"

[output]
format = "toml"

[walk]
hidden = true
git_ignore = false
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.resolve.config_name.as_deref(), Some(".styleconfig"));
        assert_eq!(config.output.format, Some(OutputFormat::Toml));
        assert_eq!(config.walk.hidden, Some(true));
        assert_eq!(config.walk.git_ignore, Some(false));
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("ecfg.toml");
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.resolve.config_name, None);
        assert_eq!(config.output.format, None);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("ecfg.toml");
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_unknown_format() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("ecfg.toml");
        fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

        assert!(matches!(load_config(&config_path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&dir.path().join("ecfg.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
