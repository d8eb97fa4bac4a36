//! Selection resolver — classifies the active category for one render.

use tracing::trace;

use crate::error::TaxonomyError;
use crate::model::{BrowsingContext, CategoryNode};
use crate::store::TaxonomyStore;

/// Outcome of classifying the browsing context against the taxonomy.
///
/// Three shapes, matching the widget's conceptual states:
/// no selection (`active == None`), a top-level category
/// (`is_top_level`, no parent), or a subcategory (parent present).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedSelection {
    pub active: Option<CategoryNode>,
    pub parent: Option<CategoryNode>,
    pub is_top_level: bool,
}

impl ResolvedSelection {
    /// The "no selection" outcome.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Classify the active category and fetch its parent where one exists.
///
/// Pure function of its inputs: no side effects, nothing cached between
/// renders.
///
/// # Errors
///
/// - [`TaxonomyError::NotFound`] if the context names a category the
///   store does not have. Callers are expected to degrade to the
///   no-selection rendering.
/// - [`TaxonomyError::Inconsistent`] if the active category declares a
///   parent the store cannot produce — corruption upstream, propagated
///   rather than silently degraded.
pub fn resolve(
    context: &BrowsingContext,
    store: &dyn TaxonomyStore,
) -> Result<ResolvedSelection, TaxonomyError> {
    let Some(active_id) = context.active else {
        trace!("no active category; selection is empty");
        return Ok(ResolvedSelection::none());
    };

    let active = store.node(active_id)?;
    let is_top_level = active.is_top_level();

    let parent = match active.parent {
        None => None,
        Some(parent_id) => {
            let parent = store.node(parent_id).map_err(|err| match err {
                TaxonomyError::NotFound { .. } => TaxonomyError::Inconsistent {
                    id: active.id,
                    parent: parent_id,
                },
                other => other,
            })?;
            Some(parent)
        }
    };

    trace!(active = %active.id, is_top_level, "resolved selection");
    Ok(ResolvedSelection {
        active: Some(active),
        parent,
        is_top_level,
    })
}
