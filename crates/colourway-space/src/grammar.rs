//! Textual grammars shared by the colour space parsers.
//!
//! Every grammar is anchored to the whole input, allowing surrounding
//! whitespace, and is case-sensitive.

use regex::{Captures, Regex};

/// Unsigned decimal with an optional percent sign, at most three integer digits.
pub(crate) const NUMBER: &str = r"(?:0|[1-9]\d{0,2})(?:\.\d+)?%?";

/// As [`NUMBER`] but with up to four integer digits, for 12-bit codes.
pub(crate) const CODE12: &str = r"(?:0|[1-9]\d{0,3})(?:\.\d+)?%?";

/// Hue angle accepting degrees or radians.
pub(crate) const HUE: &str = r"(?:0|[1-9]\d{0,2})(?:\.\d+)?(?:°|deg|rad)?";

/// Hue angle accepting degrees, radians or gradians.
pub(crate) const HUE_GRAD: &str = r"(?:0|[1-9]\d{0,2})(?:\.\d+)?(?:°|deg|rad|grad)?";

/// Signed decimal, or the `*` wildcard.
pub(crate) const SIGNED: &str = r"[-+]?(?:0|[1-9]\d{0,2})(?:\.\d+)?|\*";

/// Build an anchored functional notation such as `name(a, b, c)`.
///
/// `separator` is placed between arguments with optional whitespace around
/// it; pass `r"\s"` for space-separated arguments.
pub(crate) fn function(name: &str, args: &[&str], separator: &str) -> Regex {
    let body = args
        .iter()
        .map(|arg| format!("({arg})"))
        .collect::<Vec<_>>()
        .join(&format!(r"\s*{separator}\s*"));
    Regex::new(&format!(r"^\s*{name}\(\s*{body}\s*\)\s*$")).expect("valid regex")
}

/// Capture the first three groups of `re` in `s`.
pub(crate) fn captures3<'s>(re: &Regex, s: &'s str) -> Option<[&'s str; 3]> {
    let caps: Captures<'s> = re.captures(s)?;
    Some([
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ])
}
