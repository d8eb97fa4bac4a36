//! Taxonomy file loading.
//!
//! Two on-disk shapes, picked by extension: a JSON array of nodes
//! (`[{"id":1,"name":"Tech"}, {"id":10,"name":"Software","parent":1}]`)
//! or TOML `[[category]]` tables. Both land in a [`MemoryTaxonomy`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use taxonav_core::{CategoryNode, MemoryTaxonomy};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct TomlTaxonomy {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryNode>,
}

/// Read and index a taxonomy file.
pub fn load_taxonomy(path: &Path) -> Result<MemoryTaxonomy, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let nodes: Vec<CategoryNode> = if is_toml {
        toml::from_str::<TomlTaxonomy>(&contents)
            .map(|file| file.categories)
            .map_err(|err| CliError::Parse {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?
    } else {
        serde_json::from_str(&contents).map_err(|err| CliError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?
    };

    debug!(count = nodes.len(), path = %path.display(), "loaded taxonomy");
    Ok(MemoryTaxonomy::new(nodes)?)
}
