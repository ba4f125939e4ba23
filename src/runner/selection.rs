//! Tool selection parsing.

use crate::registry::ToolDefinition;

/// Outcome of parsing a comma-separated list of tool indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Valid 1-based indices, in the order first entered.
    pub indices: Vec<usize>,
    /// Tokens that are not an index in range.
    pub rejected: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Parse user input such as `"1, 2"` against a catalog of `count` tools.
///
/// Tokens are trimmed and must be a plain decimal index as displayed
/// (`"1"`, not `"01"` or `"+1"`). Anything else, including a blank token,
/// is rejected. Repeated indices are kept once and are not rejected.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    let mut selection = Selection::default();

    for token in input.split(',').map(str::trim) {
        match display_index(token).filter(|i| (1..=count).contains(i)) {
            Some(index) if selection.indices.contains(&index) => {
                tracing::debug!(index, "Ignoring repeated selection");
            }
            Some(index) => selection.indices.push(index),
            None => selection.rejected.push(token.to_string()),
        }
    }

    selection
}

/// Parse a token written exactly the way indices are listed.
fn display_index(token: &str) -> Option<usize> {
    let canonical = !token.is_empty()
        && !token.starts_with('0')
        && token.bytes().all(|b| b.is_ascii_digit());
    if canonical {
        token.parse().ok()
    } else {
        None
    }
}

/// Every dependency needed by `tools`, each listed once in first-seen order.
pub fn dependency_union<'t>(tools: &[&'t ToolDefinition]) -> Vec<&'t str> {
    let mut union: Vec<&str> = Vec::new();
    for dep in tools.iter().flat_map(|t| t.dependencies.iter().copied()) {
        if !union.contains(&dep) {
            union.push(dep);
        }
    }
    union
}
