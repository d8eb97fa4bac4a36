// ── Category domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a taxonomy category.
///
/// `CategoryId::NONE` (0) is reserved for the placeholder dropdown entry
/// and, in raw taxonomy data, for "no parent" — it never names a real
/// category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// The "none / placeholder" sentinel.
    pub const NONE: Self = Self(0);
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for CategoryId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// A taxonomy term. May have a parent and children; children are never
/// stored on the node itself but derived via [`TaxonomyStore::children`].
///
/// [`TaxonomyStore::children`]: crate::store::TaxonomyStore::children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: CategoryId,
    /// Human-facing display name; also the store's sort key.
    pub name: String,
    /// `None` for top-level categories. Raw data may encode "no parent"
    /// as id 0; [`CategoryNode::new`] and the store normalize that to
    /// `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategoryId>,
}

impl CategoryNode {
    /// Construct a node, normalizing a zero parent id to "top-level".
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        parent: impl Into<Option<CategoryId>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent: parent.into().filter(|p| *p != CategoryId::NONE),
        }
    }

    /// A node with no parent is a top-level category.
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_parent_normalizes_to_top_level() {
        let node = CategoryNode::new(CategoryId(7), "News", CategoryId::NONE);
        assert!(node.is_top_level());
        assert_eq!(node.parent, None);
    }

    #[test]
    fn nonzero_parent_is_kept() {
        let node = CategoryNode::new(CategoryId(7), "News", CategoryId(3));
        assert!(!node.is_top_level());
        assert_eq!(node.parent, Some(CategoryId(3)));
    }

    #[test]
    fn deserializes_with_and_without_parent() {
        let top: CategoryNode = serde_json::from_str(r#"{"id":1,"name":"Tech"}"#).unwrap();
        assert!(top.is_top_level());

        let sub: CategoryNode =
            serde_json::from_str(r#"{"id":10,"name":"Software","parent":1}"#).unwrap();
        assert_eq!(sub.parent, Some(CategoryId(1)));
    }
}
