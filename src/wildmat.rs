//! Wildmat glob matching (RFC 3977 §4.2)
//!
//! Translates each comma-separated pattern to an anchored `regex`
//! expression rather than hand-rolling a matcher.

use crate::error::{NntpError, Result};
use regex::Regex;

struct Pattern {
    negate: bool,
    re: Regex,
}

/// A compiled comma-separated wildmat pattern list.
///
/// Patterns are evaluated in order; the *last* matching pattern's polarity
/// decides the outcome. No match at all is a reject.
pub struct Wildmat {
    patterns: Vec<Pattern>,
}

const META_CHARS: &[char] = &[
    '.', '+', '(', ')', '|', '[', ']', '{', '}', '^', '$', '\\',
];

fn translate(pattern: &str) -> String {
    let mut re = String::with_capacity(pattern.len() * 2 + 2);
    re.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            c if META_CHARS.contains(&c) => {
                re.push('\\');
                re.push(c);
            }
            c => re.push(c),
        }
    }
    re.push('$');
    re
}

impl Wildmat {
    /// Compile a comma-separated wildmat, e.g. `"local.*,!local.test"`.
    ///
    /// A leading `!` on a pattern inverts its polarity; the pattern itself
    /// never includes the `!`.
    pub fn compile(wildmat: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for raw in wildmat.split(',') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let (negate, body) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw),
            };
            let re = Regex::new(&translate(body))
                .map_err(|e| NntpError::Other(format!("invalid wildmat pattern {raw:?}: {e}")))?;
            patterns.push(Pattern { negate, re });
        }
        Ok(Self { patterns })
    }

    /// Test whether `candidate` matches, applying last-match-wins polarity.
    ///
    /// No pattern matching at all rejects.
    pub fn matches(&self, candidate: &str) -> bool {
        let mut result = false;
        let mut matched_any = false;
        for pattern in &self.patterns {
            if pattern.re.is_match(candidate) {
                matched_any = true;
                result = !pattern.negate;
            }
        }
        matched_any && result
    }
}
