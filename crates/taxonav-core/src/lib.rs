//! Cascading category-selection logic for the taxonav workspace.
//!
//! This crate owns the domain model and the two-step pipeline that turns a
//! browsing context into render-ready dropdown specs:
//!
//! - **[`resolve()`]** — classifies the active category (none / top-level /
//!   subcategory) and fetches its parent where one exists, producing a
//!   [`ResolvedSelection`].
//!
//! - **[`build()`]** — consumes the resolved selection plus a
//!   [`TaxonomyStore`] and assembles the [`WidgetSpecs`] bundle: the
//!   top-level category dropdown (always present), the dependent
//!   subcategory dropdown (suppressed when there is no selection context),
//!   and the empty-state message for childless top-level categories.
//!
//! - **[`TaxonomyStore`]** — the read-only collaborator interface to the
//!   taxonomy source, with [`MemoryTaxonomy`] as the bundled
//!   implementation.
//!
//! Everything here is synchronous and pure: one render = one
//! `resolve` + `build` pass over an immutable [`BrowsingContext`] and a
//! read-only store view. Nothing is persisted between renders; the
//! "current state" of the widget is reconstructed from the context every
//! time. Render surfaces (HTML emission, CLI output) live in the sibling
//! crates.

pub mod build;
pub mod error;
pub mod model;
pub mod resolve;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use build::build;
pub use error::TaxonomyError;
pub use resolve::{ResolvedSelection, resolve};
pub use store::{MemoryTaxonomy, TaxonomyStore};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    BrowsingContext,
    CategoryId,
    CategoryNode,
    DropdownOption,
    DropdownSpec,
    WidgetInstance,
    WidgetSpecs,
};
