//! Form Intake
//!
//! Turns the free text typed into the entry dialog into task strings.

use serde::{Deserialize, Serialize};

/// How the entry dialog separates items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Delimiter {
    /// One item per line
    #[default]
    #[serde(rename = "lsv")]
    Lines,
    /// Comma separated
    #[serde(rename = "csv")]
    Commas,
}

impl Delimiter {
    /// Value submitted by the delimiter radio buttons
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Lines => "lsv",
            Delimiter::Commas => "csv",
        }
    }

    /// Anything other than `"csv"` falls back to lines, like the form default
    pub fn from_form_value(s: &str) -> Self {
        match s {
            "csv" => Delimiter::Commas,
            _ => Delimiter::Lines,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Delimiter::Lines => "One per line",
            Delimiter::Commas => "Comma separated",
        }
    }
}

/// Split raw input on the delimiter and trim every segment.
///
/// Segments that are empty after trimming are dropped, so `"a,,b"` yields
/// `["a", "b"]` and blank input yields nothing.
pub fn parse(raw: &str, delimiter: Delimiter) -> Vec<String> {
    let segments: Box<dyn Iterator<Item = &str>> = match delimiter {
        // `lines` also strips a trailing '\r'
        Delimiter::Lines => Box::new(raw.lines()),
        Delimiter::Commas => Box::new(raw.split(',')),
    };

    segments
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
