//! CLI error type, rendered through miette at the top level.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use taxonav_core::TaxonomyError;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Taxonomy failures from the core (missing parents and the like).
    #[error(transparent)]
    #[diagnostic(code(taxonav::taxonomy))]
    Taxonomy(#[from] TaxonomyError),

    /// File could not be read.
    #[error("cannot read '{path}'")]
    #[diagnostic(code(taxonav::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents did not parse as a taxonomy.
    #[error("cannot parse '{path}': {reason}")]
    #[diagnostic(
        code(taxonav::parse),
        help("taxonomy files are a JSON array of {{id, name, parent?}} objects, or TOML [[category]] tables")
    )]
    Parse { path: PathBuf, reason: String },

    /// A flag or field value was rejected.
    #[error("invalid value for {field}: {reason}")]
    #[diagnostic(code(taxonav::validation))]
    Validation { field: String, reason: String },

    /// Config file failed to load or extract.
    #[error("configuration error: {0}")]
    #[diagnostic(code(taxonav::config))]
    Config(#[from] Box<figment::Error>),

    /// Output serialization failed.
    #[error("cannot serialize output: {0}")]
    #[diagnostic(code(taxonav::serialize))]
    Serialize(String),
}
