// ── Widget markup ──
//
// Emits the category browser in the shape the surrounding page expects:
// title, screen-reader labels, the two select boxes in their wrapper
// divs (or the no-subcategories notice), then the navigation script.

use tracing::debug;

use taxonav_core::{DropdownSpec, WidgetSpecs};

use crate::escape::{escape_html, escape_js};

/// Presentation knobs for one widget placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading shown above the dropdowns.
    pub title: String,
    /// Site base URL prefixed to the `?cat=<id>` navigation target.
    /// An empty base keeps navigation relative to the current origin.
    pub base_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Categories & Subcategories".into(),
            base_url: String::new(),
        }
    }
}

/// Render one select box from its spec.
///
/// The `selected` attribute lands on whichever option the builder
/// marked; no selection logic happens here.
pub fn render_select(spec: &DropdownSpec) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<select id=\"{}\" name=\"{}\">\n",
        escape_html(&spec.element_id),
        escape_html(&spec.name),
    ));
    for option in &spec.options {
        let selected = if option.selected { " selected" } else { "" };
        out.push_str(&format!(
            "\t<option value=\"{}\"{selected}>{}</option>\n",
            option.value,
            escape_html(&option.label),
        ));
    }
    out.push_str("</select>\n");
    out
}

/// Render the full widget body for one [`WidgetSpecs`] bundle.
pub fn render_widget(specs: &WidgetSpecs, opts: &RenderOptions) -> String {
    let mut out = String::from("<div class=\"taxonav-widget\">\n");

    if !opts.title.is_empty() {
        out.push_str(&format!(
            "<h2 class=\"taxonav-title\">{}</h2>\n",
            escape_html(&opts.title)
        ));
    }

    // Top-level category box, labeled for screen readers only.
    out.push_str(&format!(
        "<label class=\"screen-reader-text\" for=\"{}\">Select Categories</label>\n",
        escape_html(&specs.top.element_id)
    ));
    out.push_str("<div class=\"taxonav-cat-select\">\n");
    out.push_str(&render_select(&specs.top));
    out.push_str("</div>\n");

    // Subcategory box only exists once a category context does; a
    // childless top-level category gets the notice instead.
    if let Some(sub) = &specs.sub {
        out.push_str(&format!(
            "<label class=\"screen-reader-text\" for=\"{}\">Select Subcategories</label>\n",
            escape_html(&sub.element_id)
        ));
        out.push_str("<div class=\"taxonav-subcat-select\">\n");
        out.push_str(&render_select(sub));
        out.push_str("</div>\n");
    } else if let Some(message) = &specs.empty_message {
        out.push_str(&format!(
            "<p class=\"taxonav-nosubcats\">{}</p>\n",
            escape_html(message)
        ));
    }

    out.push_str(&navigation_script(specs, opts));
    out.push_str("</div>\n");

    debug!(bytes = out.len(), "rendered widget markup");
    out
}

/// The change-triggered navigation script.
///
/// Picking any real category (value > 0) in either box loads
/// `{base_url}/?cat=<id>` immediately — no confirmation step. The
/// placeholder (value 0) never navigates.
fn navigation_script(specs: &WidgetSpecs, opts: &RenderOptions) -> String {
    let target = format!("{}/?cat=", opts.base_url);
    let mut out = String::from("<script type=\"text/javascript\">\n(function() {\n");
    out.push_str(&format!(
        "\tfunction onCatChange() {{\n\
         \t\tif (this.options[this.selectedIndex].value > 0) {{\n\
         \t\t\tlocation.href = \"{}\" + this.options[this.selectedIndex].value;\n\
         \t\t}}\n\
         \t}}\n",
        escape_js(&target)
    ));
    out.push_str(&format!(
        "\tdocument.getElementById(\"{}\").onchange = onCatChange;\n",
        escape_js(&specs.top.element_id)
    ));
    if let Some(sub) = &specs.sub {
        out.push_str(&format!(
            "\tdocument.getElementById(\"{}\").onchange = onCatChange;\n",
            escape_js(&sub.element_id)
        ));
    }
    out.push_str("})();\n</script>\n");
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use taxonav_core::{
        BrowsingContext, CategoryId, CategoryNode, MemoryTaxonomy, WidgetInstance, build, resolve,
    };

    use super::*;

    fn specs_for(active: Option<CategoryId>) -> WidgetSpecs {
        let store = MemoryTaxonomy::new([
            CategoryNode::new(CategoryId(1), "Tech", None),
            CategoryNode::new(CategoryId(2), "Art", None),
            CategoryNode::new(CategoryId(10), "Software", CategoryId(1)),
            CategoryNode::new(CategoryId(11), "Hardware", CategoryId(1)),
        ])
        .unwrap();
        let resolved = resolve(&BrowsingContext::from(active), &store).unwrap();
        build(&WidgetInstance::default(), &resolved, &store).unwrap()
    }

    #[test]
    fn select_marks_exactly_the_selected_option() {
        let specs = specs_for(Some(CategoryId(10)));
        let html = render_select(&specs.top);

        assert!(html.contains("<select id=\"taxonav-cats-dropdown-1\" name=\"taxonav-cats\">"));
        assert!(html.contains("<option value=\"1\" selected>Tech</option>"));
        assert!(html.contains("<option value=\"2\">Art</option>"));
        assert_eq!(html.matches(" selected").count(), 1);
    }

    #[test]
    fn labels_are_escaped() {
        let store = MemoryTaxonomy::new([CategoryNode::new(
            CategoryId(1),
            "Arts & <Crafts>",
            None,
        )])
        .unwrap();
        let resolved = resolve(&BrowsingContext::none(), &store).unwrap();
        let specs = build(&WidgetInstance::default(), &resolved, &store).unwrap();

        let html = render_select(&specs.top);
        assert!(html.contains("Arts &amp; &lt;Crafts&gt;"));
        assert!(!html.contains("<Crafts>"));
    }

    #[test]
    fn widget_without_selection_has_single_select_and_script() {
        let html = render_widget(&specs_for(None), &RenderOptions::default());

        assert!(html.contains("Categories &amp; Subcategories"));
        assert!(html.contains("taxonav-cat-select"));
        assert!(!html.contains("taxonav-subcat-select"));
        assert!(!html.contains("taxonav-nosubcats"));
        // Only the top box gets an onchange binding.
        assert_eq!(html.matches("onchange = onCatChange").count(), 1);
    }

    #[test]
    fn widget_with_subcategories_wires_both_selects() {
        let html = render_widget(&specs_for(Some(CategoryId(1))), &RenderOptions::default());

        assert!(html.contains("taxonav-subcat-select"));
        assert!(html.contains("Select Subcategory in Tech"));
        assert_eq!(html.matches("onchange = onCatChange").count(), 2);
        assert!(html.contains("\\/?cat=\" + this.options[this.selectedIndex].value"));
        assert!(html.contains("if (this.options[this.selectedIndex].value > 0)"));
    }

    #[test]
    fn childless_category_renders_the_notice() {
        let html = render_widget(&specs_for(Some(CategoryId(2))), &RenderOptions::default());

        assert!(html.contains("<p class=\"taxonav-nosubcats\">No subcategories in Art</p>"));
        assert!(!html.contains("taxonav-subcat-select"));
    }

    #[test]
    fn base_url_lands_in_the_navigation_script() {
        let opts = RenderOptions {
            base_url: "https://example.org".into(),
            ..RenderOptions::default()
        };
        let html = render_widget(&specs_for(None), &opts);
        assert!(html.contains("https:\\/\\/example.org"));
    }
}
