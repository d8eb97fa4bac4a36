use thiserror::Error;

use crate::model::CategoryId;

/// Top-level error type for taxonomy queries and widget assembly.
///
/// Every failure is scoped to a single render pass. `NotFound` is the
/// benign case — callers are expected to degrade to the no-selection
/// rendering. `Inconsistent` indicates data corruption upstream and is
/// surfaced, never swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// Requested category id does not exist in the store.
    #[error("category {id} not found")]
    NotFound { id: CategoryId },

    /// A category's declared parent cannot be found, or a sibling query
    /// came back empty mid-render. Taxonomy integrity violation.
    #[error("category {id} declares parent {parent}, which is missing from the taxonomy")]
    Inconsistent { id: CategoryId, parent: CategoryId },

    /// Two categories share one id (rejected when building a store).
    #[error("duplicate category id {id}")]
    DuplicateId { id: CategoryId },
}

impl TaxonomyError {
    /// Returns `true` if this is a "not found" error, which callers may
    /// treat as an empty browsing context rather than a hard failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
