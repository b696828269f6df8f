//! Section header glob compilation.
//!
//! Supported dialect:
//! - `*` any run of characters except `/`
//! - `**` any run including `/`, only as a whole path segment
//! - `?` exactly one character
//! - `[abc]`, `[a-z]`, `[!abc]` character classes; `{`, `}` and `,` are
//!   literal inside a class
//! - `{a,b,c}` alternation, `{1..10}` numeric ranges
//! - `\x` literal `x`
//!
//! A class matches exactly the characters it names, so `[a/b]` can match the
//! separator. A negated class never matches `/`.
//!
//! A pattern containing `/` is matched against the path relative to the
//! directory of the config file; otherwise against the file's basename.

mod range;
#[cfg(test)]
mod range_proptests;

pub use range::{numeric_range_regex, Interval};

use regex::Regex;

use crate::error::PatternError;

/// What a compiled pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    /// Final path component of the target file
    Basename,
    /// Path of the target file relative to the config file's directory, `/`-separated
    RelativePath,
}

/// An anchored matcher for one section header.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    target: MatchTarget,
}

impl CompiledPattern {
    /// Compile a section header glob.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let target = if pattern.contains('/') {
            MatchTarget::RelativePath
        } else {
            MatchTarget::Basename
        };

        // A leading `/` only anchors at the config directory.
        let (body, base) = match pattern.strip_prefix('/') {
            Some(rest) => (rest, 1),
            None => (pattern, 0),
        };
        let chars: Vec<char> = body.chars().collect();
        let translated = translate(&chars, base, true)?;
        let regex = Regex::new(&format!("(?s)^(?:{translated})$"))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            target,
        })
    }

    /// The glob text as written in the section header.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> MatchTarget {
        self.target
    }

    /// Test a candidate string directly, ignoring the match target.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Test a file given both of its candidate forms.
    pub fn matches(&self, basename: &str, relative_path: &str) -> bool {
        match self.target {
            MatchTarget::Basename => self.regex.is_match(basename),
            MatchTarget::RelativePath => self.regex.is_match(relative_path),
        }
    }
}

/// Shorthand for [`CompiledPattern::compile`].
pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern, PatternError> {
    CompiledPattern::compile(pattern)
}

/// Translate a glob (or a brace option) into an unanchored regex fragment.
///
/// `base` is the offset of `chars[0]` in the original pattern, for errors.
/// `at_segment_start` says whether `chars[0]` follows a separator or the
/// pattern start, which is where `**` may appear.
fn translate(
    chars: &[char],
    base: usize,
    at_segment_start: bool,
) -> Result<String, PatternError> {
    let mut out = String::new();
    let mut i = 0;
    let mut at_segment_start = at_segment_start;

    while i < chars.len() {
        let mut next_at_segment_start = false;
        let consumed = match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let follower = chars.get(i + 2);
                if !at_segment_start || !matches!(follower, None | Some('/')) {
                    return Err(PatternError::MisplacedGlobstar { offset: base + i });
                }
                if follower.is_some() {
                    // `**/` also matches zero directories
                    out.push_str("(?:.*/)?");
                    next_at_segment_start = true;
                    3
                } else {
                    out.push_str(".*");
                    2
                }
            }
            '*' => {
                out.push_str("[^/]*");
                1
            }
            '?' => {
                out.push('.');
                1
            }
            '/' => {
                out.push('/');
                next_at_segment_start = true;
                1
            }
            '\\' => {
                let escaped = chars.get(i + 1).ok_or(PatternError::TrailingEscape)?;
                push_literal(&mut out, *escaped);
                2
            }
            '[' => {
                let (class, consumed) = translate_class(&chars[i..], base + i)?;
                out.push_str(&class);
                consumed
            }
            '{' => {
                let close = find_closing_brace(chars, i)
                    .ok_or(PatternError::UnterminatedBrace { offset: base + i })?;
                out.push_str(&translate_brace(
                    &chars[i + 1..close],
                    base + i + 1,
                    at_segment_start,
                )?);
                close - i + 1
            }
            c => {
                push_literal(&mut out, c);
                1
            }
        };
        at_segment_start = next_at_segment_start;
        i += consumed;
    }

    Ok(out)
}

/// Translate a class starting at `chars[0] == '['`; returns the fragment and chars consumed.
fn translate_class(chars: &[char], offset: usize) -> Result<(String, usize), PatternError> {
    let negated = chars.get(1) == Some(&'!');
    let mut i = if negated { 2 } else { 1 };
    let mut members = String::new();

    loop {
        match chars.get(i) {
            None => return Err(PatternError::UnterminatedClass { offset }),
            Some(']') => break,
            Some('\\') => {
                let escaped = chars
                    .get(i + 1)
                    .ok_or(PatternError::UnterminatedClass { offset })?;
                members.push_str(&regex::escape(escaped.encode_utf8(&mut [0; 4])));
                i += 2;
            }
            Some(&c) => match (chars.get(i + 1), chars.get(i + 2)) {
                (Some('-'), Some(&end)) if end != ']' => {
                    members.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                    members.push('-');
                    members.push_str(&regex::escape(end.encode_utf8(&mut [0; 4])));
                    i += 3;
                }
                _ => {
                    members.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                    i += 1;
                }
            },
        }
    }

    if members.is_empty() {
        return Err(PatternError::EmptyClass { offset });
    }

    let class = if negated {
        format!("[^/{members}]")
    } else {
        format!("[{members}]")
    };
    Ok((class, i + 1))
}

/// Index of the `]` closing the class at `chars[open] == '['`.
///
/// Scans members the same way as [`translate_class`]. `None` when the class
/// is unterminated, in which case the `[` is scanned past as a plain char and
/// [`translate_class`] reports the error later.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if chars.get(i) == Some(&'!') {
        i += 1;
    }
    loop {
        match chars.get(i)? {
            ']' => return Some(i),
            '\\' => i += 2,
            _ => match (chars.get(i + 1), chars.get(i + 2)) {
                (Some('-'), Some(&end)) if end != ']' => i += 3,
                _ => i += 1,
            },
        }
    }
}

/// Index of the `}` balancing the `{` at `open`.
fn find_closing_brace(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' => i = class_end(chars, i).unwrap_or(i),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Translate brace content (without the braces themselves).
fn translate_brace(
    inner: &[char],
    base: usize,
    at_segment_start: bool,
) -> Result<String, PatternError> {
    let text: String = inner.iter().collect();
    if let Some(interval) = Interval::parse(&text)? {
        return Ok(interval.to_regex());
    }

    let options = split_options(inner);
    if options.len() < 2 {
        // `{}` and `{single}` are literal braces
        return Ok(format!("\\{{{}\\}}", translate(inner, base, false)?));
    }

    let alternatives = options
        .into_iter()
        .map(|(start, option)| translate(option, base + start, at_segment_start))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("(?:{})", alternatives.join("|")))
}

/// Split on top-level commas, returning each option with its start index.
fn split_options(inner: &[char]) -> Vec<(usize, &[char])> {
    let mut options = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < inner.len() {
        match inner[i] {
            '\\' => i += 1,
            '[' => i = class_end(inner, i).unwrap_or(i),
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                options.push((start, &inner[start..i]));
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    options.push((start, &inner[start.min(inner.len())..]));
    options
}

fn push_literal(out: &mut String, c: char) {
    out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}
