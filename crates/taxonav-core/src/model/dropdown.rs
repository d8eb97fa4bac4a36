// ── Dropdown specs ──
//
// Render-ready output of the builder. The render shell turns these into
// markup; nothing here knows about HTML.

use serde::Serialize;

use super::category::{CategoryId, CategoryNode};

/// One `<option>`-to-be: a value, a label, and whether it is the
/// pre-selected entry. The placeholder carries [`CategoryId::NONE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub value: CategoryId,
    pub label: String,
    pub selected: bool,
}

impl DropdownOption {
    /// The "no selection yet" entry shown first in a dropdown.
    pub fn placeholder(label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: CategoryId::NONE,
            label: label.into(),
            selected,
        }
    }

    /// An entry backed by a real category.
    pub fn category(node: &CategoryNode, selected: bool) -> Self {
        Self {
            value: node.id,
            label: node.name.clone(),
            selected,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value == CategoryId::NONE
    }
}

/// A complete select box: namespaced element id and form name plus the
/// ordered option list (placeholder first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownSpec {
    pub element_id: String,
    pub name: String,
    pub options: Vec<DropdownOption>,
}

impl DropdownSpec {
    /// The option currently marked selected. Exactly one option is
    /// selected in every spec the builder produces.
    pub fn selected(&self) -> Option<&DropdownOption> {
        self.options.iter().find(|o| o.selected)
    }
}

/// The bundle handed to the render shell: the top-level dropdown (always
/// present), the subcategory dropdown (suppressed outside any category
/// context), and the empty-state message for a childless top-level
/// category. `sub` and `empty_message` are never both set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSpecs {
    pub top: DropdownSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<DropdownSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Stable identifier for one widget placement, used to namespace the
/// generated element ids and names so several instances can share a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetInstance {
    pub id_base: String,
    pub number: u32,
}

impl WidgetInstance {
    pub fn new(id_base: impl Into<String>, number: u32) -> Self {
        Self {
            id_base: id_base.into(),
            number,
        }
    }

    /// Element id of the top-level category select box.
    pub fn cats_dropdown_id(&self) -> String {
        format!("{}-cats-dropdown-{}", self.id_base, self.number)
    }

    /// Form name of the top-level category select box.
    pub fn cats_name(&self) -> String {
        format!("{}-cats", self.id_base)
    }

    /// Element id of the subcategory select box.
    pub fn subcats_dropdown_id(&self) -> String {
        format!("{}-subcats-dropdown-{}", self.id_base, self.number)
    }

    /// Form name of the subcategory select box.
    pub fn subcats_name(&self) -> String {
        format!("{}-subcats", self.id_base)
    }
}

impl Default for WidgetInstance {
    fn default() -> Self {
        Self::new("taxonav", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_ids_are_namespaced() {
        let a = WidgetInstance::new("taxonav", 1);
        let b = WidgetInstance::new("taxonav", 2);
        assert_eq!(a.cats_dropdown_id(), "taxonav-cats-dropdown-1");
        assert_eq!(a.subcats_dropdown_id(), "taxonav-subcats-dropdown-1");
        assert_ne!(a.cats_dropdown_id(), b.cats_dropdown_id());
        // Form names are shared across instances on purpose.
        assert_eq!(a.cats_name(), b.cats_name());
    }
}
