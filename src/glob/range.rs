//! Numeric `{start..end}` ranges translated to exact-match regular expressions.
//!
//! A range only ever matches canonical decimal numerals: no leading zeros,
//! zero written as `0`, and negatives as `-` followed by a canonical
//! magnitude. The `regex` crate has no look-around, so leading-zero rejection
//! is structural: every multi-digit alternative starts with a non-zero digit.

use crate::error::PatternError;

const ANY_DIGIT: &str = "[0-9]";

/// Inclusive integer interval from a `{start..end}` section token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Create an interval, rejecting `start > end`.
    ///
    /// `i64::MIN` is rejected as well since its magnitude is not representable.
    pub fn new(start: i64, end: i64) -> Result<Self, PatternError> {
        if start > end || start == i64::MIN {
            return Err(PatternError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse brace content of the form `[+-]digits..[+-]digits`.
    ///
    /// Returns `Ok(None)` when the text is not range syntax at all, so the
    /// caller can fall back to alternation.
    pub fn parse(text: &str) -> Result<Option<Self>, PatternError> {
        let Some((start, end)) = text.split_once("..") else {
            return Ok(None);
        };
        if !is_integer_literal(start) || !is_integer_literal(end) {
            return Ok(None);
        }

        let invalid = || PatternError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        };
        let start: i64 = start.parse().map_err(|_| invalid())?;
        let end: i64 = end.parse().map_err(|_| invalid())?;
        Self::new(start, end).map(Some)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, n: i64) -> bool {
        self.start <= n && n <= self.end
    }

    /// Unanchored expression matching exactly the canonical numerals in range.
    ///
    /// The result is either a plain concatenation or a non-capturing group,
    /// so it can be embedded anywhere in a larger expression.
    pub fn to_regex(&self) -> String {
        let (start, end) = (self.start, self.end);

        if start == end {
            return start.to_string();
        }

        // Negation cannot overflow: `new` rejects i64::MIN and start < end.
        if end < 0 {
            return format!("-{}", positive_range(-end, -start));
        }
        if start > 0 {
            return positive_range(start, end);
        }

        let mut alternatives = vec!["0".to_string()];
        if start < 0 {
            alternatives.push(format!("-{}", positive_range(1, -start)));
        }
        if end > 0 {
            alternatives.push(positive_range(1, end));
        }
        group(&alternatives)
    }
}

/// Build the range expression for `[start, end]`.
pub fn numeric_range_regex(start: i64, end: i64) -> Result<String, PatternError> {
    Interval::new(start, end).map(|interval| interval.to_regex())
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[lo, hi]` with `1 <= lo <= hi`, split into runs of equal digit count.
fn positive_range(lo: i64, hi: i64) -> String {
    let lo_len = digit_count(lo);
    let hi_len = digit_count(hi);
    let mut alternatives = Vec::new();

    for len in lo_len..=hi_len {
        let floor = if len == lo_len { lo } else { 10i64.pow(len - 1) };
        let ceil = if len == hi_len { hi } else { 10i64.pow(len) - 1 };
        alternatives.extend(same_length(
            floor.to_string().as_bytes(),
            ceil.to_string().as_bytes(),
        ));
    }

    group(&alternatives)
}

/// Digit-by-digit bounding of two numerals of equal length, most significant first.
///
/// Each returned alternative is a plain concatenation with no top-level `|`.
fn same_length(lo: &[u8], hi: &[u8]) -> Vec<String> {
    let (Some((&lo_head, lo_rest)), Some((&hi_head, hi_rest))) =
        (lo.split_first(), hi.split_first())
    else {
        return vec![String::new()];
    };

    if lo_head == hi_head {
        return prefixed(lo_head, same_length(lo_rest, hi_rest));
    }

    let width = lo_rest.len();
    let lo_is_floor = lo_rest.iter().all(|&d| d == b'0');
    let hi_is_ceil = hi_rest.iter().all(|&d| d == b'9');
    let mut alternatives = Vec::new();

    // lo_head < hi_head here, so neither bound below can underflow
    let mut first_free = lo_head;
    if !lo_is_floor {
        alternatives.extend(prefixed(lo_head, same_length(lo_rest, &vec![b'9'; width])));
        first_free = lo_head + 1;
    }

    let last_free = if hi_is_ceil { hi_head } else { hi_head - 1 };
    if first_free <= last_free {
        alternatives.push(format!(
            "{}{}",
            digit_class(first_free, last_free),
            any_digits(width)
        ));
    }

    if !hi_is_ceil {
        alternatives.extend(prefixed(hi_head, same_length(&vec![b'0'; width], hi_rest)));
    }

    alternatives
}

fn prefixed(head: u8, tails: Vec<String>) -> Vec<String> {
    tails
        .into_iter()
        .map(|tail| format!("{}{tail}", head as char))
        .collect()
}

fn digit_class(from: u8, to: u8) -> String {
    match (from, to) {
        _ if from == to => (from as char).to_string(),
        (b'0', b'9') => ANY_DIGIT.to_string(),
        _ => format!("[{}-{}]", from as char, to as char),
    }
}

fn any_digits(width: usize) -> String {
    match width {
        0 => String::new(),
        1 => ANY_DIGIT.to_string(),
        n => format!("{ANY_DIGIT}{{{n}}}"),
    }
}

fn digit_count(n: i64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

fn group(alternatives: &[String]) -> String {
    match alternatives {
        [single] => single.clone(),
        _ => format!("(?:{})", alternatives.join("|")),
    }
}
