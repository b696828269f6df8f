use std::fmt::Display;
use std::io::{self, IsTerminal};

const HEADER: &str = "\x1b[1;36m";
const KEY: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Paints parts of the plain output; a no-op when disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `[path]` line above a file's properties.
    pub fn header(&self, path: impl Display) -> String {
        self.paint(HEADER, format_args!("[{path}]"))
    }

    pub fn key(&self, key: impl Display) -> String {
        self.paint(KEY, key)
    }

    fn paint(&self, code: &str, text: impl Display) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Whether stdout gets colors: `--no-color`, then `--color`, then
/// `NO_COLOR`, then whether stdout is a terminal.
pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    match (no_color, force_color) {
        (true, _) => false,
        (false, true) => true,
        (false, false) => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}
