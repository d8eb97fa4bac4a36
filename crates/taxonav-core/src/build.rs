//! Dropdown set builder — assembles the render-ready widget specs.

use tracing::debug;

use crate::error::TaxonomyError;
use crate::model::{CategoryId, DropdownOption, DropdownSpec, WidgetInstance, WidgetSpecs};
use crate::resolve::ResolvedSelection;
use crate::store::TaxonomyStore;

/// Placeholder label of the top-level category dropdown.
pub const SELECT_CATEGORY: &str = "Select Category";

/// Assemble the two dropdown specs for one render.
///
/// The top-level dropdown is always produced. The subcategory dropdown
/// exists only when some category context does: for a top-level active
/// category it lists that category's children, for a subcategory it
/// lists the sibling set, and for a childless top-level category it is
/// replaced by an empty-state message. Store errors propagate untouched;
/// the caller decides the fallback rendering.
pub fn build(
    instance: &WidgetInstance,
    resolved: &ResolvedSelection,
    store: &dyn TaxonomyStore,
) -> Result<WidgetSpecs, TaxonomyError> {
    let top = build_top(instance, resolved, store)?;
    let (sub, empty_message) = build_sub(instance, resolved, store)?;

    debug!(
        top_options = top.options.len(),
        has_sub = sub.is_some(),
        "built widget specs"
    );
    Ok(WidgetSpecs {
        top,
        sub,
        empty_message,
    })
}

/// Top-level category dropdown: placeholder + the top-level set.
///
/// When a subcategory is active its parent is the selected entry, so the
/// top box surfaces the right category even mid-tree. When nothing
/// matches (no selection, or the parent is itself not top-level in a
/// deeper taxonomy), selection falls back to the placeholder.
fn build_top(
    instance: &WidgetInstance,
    resolved: &ResolvedSelection,
    store: &dyn TaxonomyStore,
) -> Result<DropdownSpec, TaxonomyError> {
    let marked: Option<CategoryId> = if resolved.is_top_level {
        resolved.active.as_ref().map(|n| n.id)
    } else {
        resolved.parent.as_ref().map(|n| n.id)
    };

    let categories: Vec<DropdownOption> = store
        .children(None)?
        .iter()
        .map(|node| DropdownOption::category(node, marked == Some(node.id)))
        .collect();

    let none_marked = !categories.iter().any(|o| o.selected);
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(DropdownOption::placeholder(SELECT_CATEGORY, none_marked));
    options.extend(categories);

    Ok(DropdownSpec {
        element_id: instance.cats_dropdown_id(),
        name: instance.cats_name(),
        options,
    })
}

/// Subcategory dropdown, or the empty-state message replacing it.
///
/// Returns `(None, None)` outside any category context: the sub box is
/// suppressed entirely until a top-level category has been chosen.
fn build_sub(
    instance: &WidgetInstance,
    resolved: &ResolvedSelection,
    store: &dyn TaxonomyStore,
) -> Result<(Option<DropdownSpec>, Option<String>), TaxonomyError> {
    let Some(active) = resolved.active.as_ref() else {
        return Ok((None, None));
    };

    let (pivot, children) = match resolved.parent.as_ref() {
        // Subcategory active: show the sibling set under the shared parent.
        Some(parent) => {
            let siblings = store.children(Some(parent.id))?;
            if siblings.is_empty() {
                // The active node is itself a child of `parent`, so an
                // empty sibling set means the store changed between
                // queries. Integrity violation, not an empty state.
                return Err(TaxonomyError::Inconsistent {
                    id: active.id,
                    parent: parent.id,
                });
            }
            (parent, siblings)
        }
        // Top-level active: show its children, which may be none.
        None => {
            let children = store.children(Some(active.id))?;
            if children.is_empty() {
                return Ok((None, Some(format!("No subcategories in {}", active.name))));
            }
            (active, children)
        }
    };

    // The sub box always opens on its placeholder; no child entry is
    // ever pre-selected.
    let mut options = Vec::with_capacity(children.len() + 1);
    options.push(DropdownOption::placeholder(
        format!("Select Subcategory in {}", pivot.name),
        true,
    ));
    options.extend(
        children
            .iter()
            .map(|node| DropdownOption::category(node, false)),
    );

    let spec = DropdownSpec {
        element_id: instance.subcats_dropdown_id(),
        name: instance.subcats_name(),
        options,
    };
    Ok((Some(spec), None))
}
