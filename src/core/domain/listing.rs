//! One page of the remote variable set.

use serde::Deserialize;

use crate::core::domain::Variable;

/// Result of a single listing call.
///
/// Only the first page is ever fetched; a present `next_page_token` means
/// the snapshot may be missing variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub items: Vec<Variable>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Listing {
    /// Whether the provider reported no further pages.
    pub fn is_complete(&self) -> bool {
        self.next_page_token
            .as_deref()
            .map_or(true, |token| token.is_empty())
    }
}
