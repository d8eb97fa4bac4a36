//! HTML render shell for taxonav.
//!
//! Turns the [`WidgetSpecs`] bundle produced by `taxonav-core` into
//! markup: the two select boxes with screen-reader labels, the
//! empty-state notice, and the change-triggered navigation script that
//! loads `{base_url}/?cat=<id>` when a real category is picked. That
//! immediate page load on change is the widget's external contract —
//! without it the dropdowns are inert.
//!
//! This crate owns presentation only. Which options exist and which one
//! is selected is decided entirely upstream; nothing here consults the
//! taxonomy.
//!
//! [`WidgetSpecs`]: taxonav_core::WidgetSpecs

pub mod escape;
pub mod widget;

pub use escape::{escape_html, escape_js};
pub use widget::{RenderOptions, render_select, render_widget};
