//! Error types for pattern compilation and resolution

use std::path::PathBuf;

use thiserror::Error;

/// A section header that failed to compile.
///
/// The failure is scoped to one section: the section never matches and the
/// rest of the file is unaffected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// `[` without a closing `]`
    #[error("unterminated character class starting at offset {offset}")]
    UnterminatedClass { offset: usize },

    /// `[]` or `[!]`
    #[error("empty character class at offset {offset}")]
    EmptyClass { offset: usize },

    /// `{` without a balancing `}`
    #[error("unterminated brace starting at offset {offset}")]
    UnterminatedBrace { offset: usize },

    /// Pattern ends with a lone `\`
    #[error("pattern ends with an unescaped backslash")]
    TrailingEscape,

    /// `**` that is not a whole path segment
    #[error("`**` at offset {offset} must be a whole path segment")]
    MisplacedGlobstar { offset: usize },

    /// `{start..end}` with `start > end` or a bound outside the supported range
    #[error("invalid numeric range {{{start}..{end}}}")]
    InvalidRange { start: String, end: String },

    /// The translated expression was rejected by the regex engine
    #[error("failed to build matcher: {0}")]
    Regex(#[from] regex::Error),
}

/// Errors surfaced by [`crate::Resolver::resolve`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Resolution is defined only for absolute paths
    #[error("path must be absolute: {}", .0.display())]
    RelativePath(PathBuf),
}
