// ── In-memory taxonomy store ──
//
// Indexed storage for a full taxonomy snapshot: O(1) node lookup plus a
// precomputed, name-ordered child list per parent.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::TaxonomyError;
use crate::model::{CategoryId, CategoryNode};
use crate::store::TaxonomyStore;

/// Owned snapshot of a taxonomy, built once from a flat node list.
///
/// Parent ids of 0 are normalized to "top-level" on ingest. Children are
/// ordered by name (ties by id), matching the alphabetical default of
/// the original category store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaxonomy {
    /// Primary storage, in insertion order.
    nodes: IndexMap<CategoryId, CategoryNode>,

    /// Parent id (`None` = top level) -> child ids, name-ordered.
    children: HashMap<Option<CategoryId>, Vec<CategoryId>>,
}

impl MemoryTaxonomy {
    /// Build a store from a flat node list.
    ///
    /// Fails with [`TaxonomyError::DuplicateId`] if two nodes share an
    /// id. A node whose parent is absent is accepted here — that
    /// corruption surfaces as [`TaxonomyError::Inconsistent`] when the
    /// resolver actually walks to it.
    pub fn new(
        input: impl IntoIterator<Item = CategoryNode>,
    ) -> Result<Self, TaxonomyError> {
        let mut nodes: IndexMap<CategoryId, CategoryNode> = IndexMap::new();
        for raw in input {
            let node = CategoryNode::new(raw.id, raw.name, raw.parent);
            match nodes.entry(node.id) {
                indexmap::map::Entry::Occupied(slot) => {
                    return Err(TaxonomyError::DuplicateId { id: *slot.key() });
                }
                indexmap::map::Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }
        }

        let mut children: HashMap<Option<CategoryId>, Vec<CategoryId>> = HashMap::new();
        for node in nodes.values() {
            children.entry(node.parent).or_default().push(node.id);
        }
        for bucket in children.values_mut() {
            bucket.sort_by(|a, b| {
                let (na, nb) = (&nodes[a].name, &nodes[b].name);
                na.cmp(nb).then(a.cmp(b))
            });
        }

        Ok(Self { nodes, children })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order (for listings).
    pub fn iter(&self) -> impl Iterator<Item = &CategoryNode> {
        self.nodes.values()
    }

    /// Number of direct children of `id`.
    pub fn child_count(&self, id: CategoryId) -> usize {
        self.children.get(&Some(id)).map_or(0, Vec::len)
    }
}

impl TaxonomyStore for MemoryTaxonomy {
    fn node(&self, id: CategoryId) -> Result<CategoryNode, TaxonomyError> {
        self.nodes
            .get(&id)
            .cloned()
            .ok_or(TaxonomyError::NotFound { id })
    }

    fn children(&self, parent: Option<CategoryId>) -> Result<Vec<CategoryNode>, TaxonomyError> {
        let Some(ids) = self.children.get(&parent) else {
            return Ok(Vec::new());
        };
        Ok(ids.iter().filter_map(|id| self.nodes.get(id).cloned()).collect())
    }
}
