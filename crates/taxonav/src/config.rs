//! Widget presentation config: defaults < config file < `TAXONAV_` env,
//! with CLI flags overriding on top (applied in the command handlers).
//!
//! This configures the render shell only — the selection core takes all
//! of its input per invocation and owns no configuration. Nothing is
//! ever written back; widget-config persistence is out of scope.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Presentation settings for the rendered widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Heading shown above the dropdowns.
    pub title: String,
    /// Site base URL prefixed to the `?cat=<id>` navigation target.
    pub base_url: String,
    /// Stable prefix for generated element ids and form names.
    pub id_base: String,
    /// Instance number appended to element ids.
    pub number: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Categories & Subcategories".into(),
            base_url: String::new(),
            id_base: "taxonav".into(),
            number: 1,
        }
    }
}

/// Default config file location for this platform.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taxonav").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the render config.
///
/// An explicitly passed path must exist; the default platform path is
/// optional and silently skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<RenderConfig, CliError> {
    let mut figment = Figment::from(Serialized::defaults(RenderConfig::default()));

    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            figment = figment.merge(Toml::file(path));
        }
        None => {
            if let Some(path) = config_path() {
                figment = figment.merge(Toml::file(path));
            }
        }
    }

    figment
        .merge(Env::prefixed("TAXONAV_").only(&["title", "base_url", "id_base", "number"]))
        .extract()
        .map_err(|err| CliError::Config(Box::new(err)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_widget() {
        let config = RenderConfig::default();
        assert_eq!(config.title, "Categories & Subcategories");
        assert_eq!(config.id_base, "taxonav");
        assert_eq!(config.number, 1);
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/taxonav.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
