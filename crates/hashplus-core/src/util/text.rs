//! Tag text helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?s)(.*):(\d+)$").expect("static regex is valid")
});

/// Bump the numeric `:N` suffix of a tag.
///
/// `"foo"` becomes `"foo:1"`, `"foo:1"` becomes `"foo:2"`. A suffix too large
/// to increment is treated as part of the name, so a new `:1` is appended.
pub fn bump(s: &str) -> String {
    if let Some(caps) = NUMBERED.captures(s) {
        let name = &caps[1];
        if let Some(next) = caps[2].parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
            return format!("{}:{}", name, next);
        }
    }
    format!("{}:1", s)
}
