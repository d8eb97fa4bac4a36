//! Domain model: category nodes, browsing context, and dropdown specs.
//!
//! All types here are constructed fresh per render and never mutate the
//! taxonomy they were read from.

pub mod category;
pub mod context;
pub mod dropdown;

pub use category::{CategoryId, CategoryNode};
pub use context::BrowsingContext;
pub use dropdown::{DropdownOption, DropdownSpec, WidgetInstance, WidgetSpecs};
