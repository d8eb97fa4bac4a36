//! Categories command handler: list the taxonomy.

use owo_colors::OwoColorize;
use tabled::Tabled;

use taxonav_core::{CategoryNode, MemoryTaxonomy};

use crate::cli::{CategoriesArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::{output, taxonomy};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Children")]
    children: usize,
}

impl CategoryRow {
    fn new(node: &CategoryNode, store: &MemoryTaxonomy, color: bool) -> Self {
        let name = if color && node.is_top_level() {
            node.name.bold().to_string()
        } else {
            node.name.clone()
        };
        Self {
            id: node.id.to_string(),
            name,
            parent: node
                .parent
                .map_or_else(|| "-".into(), |parent| parent.to_string()),
            children: store.child_count(node.id),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &CategoriesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let store = taxonomy::load_taxonomy(&args.taxonomy)?;
    let nodes: Vec<CategoryNode> = store.iter().cloned().collect();

    let format = match &global.output {
        OutputFormat::Auto => &OutputFormat::Table,
        other => other,
    };
    let color = output::should_color(&global.color);

    let rendered = output::render_list(
        format,
        &nodes,
        |node| CategoryRow::new(node, &store, color),
        |node| node.id.to_string(),
    )?;
    println!("{rendered}");
    Ok(())
}
