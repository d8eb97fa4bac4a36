// ── Browsing context ──

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// The category the visitor is currently browsing, if any.
///
/// Supplied per render and immutable for its duration. The widget has no
/// state of its own between renders; whatever "current state" it appears
/// to have is reconstructed from this context every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrowsingContext {
    pub active: Option<CategoryId>,
}

impl BrowsingContext {
    /// Context with an active category.
    pub fn active(id: CategoryId) -> Self {
        Self { active: Some(id) }
    }

    /// Context outside any category page.
    pub fn none() -> Self {
        Self { active: None }
    }
}

impl From<Option<CategoryId>> for BrowsingContext {
    fn from(active: Option<CategoryId>) -> Self {
        Self { active }
    }
}
