//! Taxonomy store abstraction and the bundled in-memory implementation.

pub mod memory;

pub use memory::MemoryTaxonomy;

use crate::error::TaxonomyError;
use crate::model::{CategoryId, CategoryNode};

/// Read-only view of a taxonomy source.
///
/// Queries are assumed to be cheap local reads (no retries at this
/// layer), but the core does not assume transactional consistency across
/// two queries within one render — a shared store may change between a
/// `node` and a `children` call, and the builder reports any resulting
/// mismatch as [`TaxonomyError::Inconsistent`].
pub trait TaxonomyStore {
    /// Fetch a single category by id.
    fn node(&self, id: CategoryId) -> Result<CategoryNode, TaxonomyError>;

    /// Direct children of `parent`, or the top-level set for `None`.
    ///
    /// Ordering is store-defined (alphabetical for [`MemoryTaxonomy`]);
    /// the core preserves whatever order the store returns.
    fn children(&self, parent: Option<CategoryId>) -> Result<Vec<CategoryNode>, TaxonomyError>;
}
