use serde::{Deserialize, Serialize};

/// First/last display strings for the two stacked chart labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub first: String,
    pub last: String,
}

/// Split a full display name into first/last label parts.
///
/// This is a word-count heuristic, not a name parser: a 3-token name folds the
/// first two tokens into the "first name" label.
///
/// - 2 tokens: first = t0, last = t1
/// - 4 tokens: first = t0, last = "t1 t2 t3"
/// - otherwise: first = "t0 t1" (clamped to the tokens that exist),
///   last = final token
pub fn split_display_name(full: &str) -> NameParts {
    let tokens: Vec<&str> = full.split_whitespace().collect();
    match tokens.len() {
        0 => NameParts {
            first: String::new(),
            last: String::new(),
        },
        2 => NameParts {
            first: tokens[0].to_string(),
            last: tokens[1].to_string(),
        },
        4 => NameParts {
            first: tokens[0].to_string(),
            last: tokens[1..4].join(" "),
        },
        n => NameParts {
            first: tokens[..n.min(2)].join(" "),
            last: tokens[n - 1].to_string(),
        },
    }
}
