use std::sync::OnceLock;

use regex::Regex;

/// Marker types for list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dash,     // "-"
    Asterisk, // "*"
    Plus,     // "+"
    Numbered, // "1.", "2.", etc.
}

/// List item block type with owned marker detection.
pub struct ListItem;

impl ListItem {
    /// Detects a list marker at the start of `s` (already indent-stripped).
    ///
    /// Bullets are `-`, `*`, or `+` followed by whitespace; numbered items
    /// are digits, a dot, then whitespace.
    pub fn marker(s: &str) -> Option<Marker> {
        let mut chars = s.chars();
        let bullet = match chars.next()? {
            '-' => Some(Marker::Dash),
            '*' => Some(Marker::Asterisk),
            '+' => Some(Marker::Plus),
            _ => None,
        };
        if let Some(m) = bullet {
            return chars.next().filter(|c| c.is_whitespace()).map(|_| m);
        }
        if numbered_marker().is_match(s) {
            return Some(Marker::Numbered);
        }
        None
    }
}

fn numbered_marker() -> &'static Regex {
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    NUMBERED.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid list marker regex"))
}
