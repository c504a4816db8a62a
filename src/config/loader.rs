//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterOptions;
use crate::config::validation::validate_options;
use crate::error::{RouterError, RouterResult};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Router(#[from] RouterError),
}

/// Load and validate router options from a TOML file.
///
/// Unknown keys (such as a `[routes]` table consumed separately by
/// [`load_route_labels`]) are ignored.
pub fn load_options(path: &Path) -> Result<RouterOptions, ConfigError> {
    let content = fs::read_to_string(path)?;
    let options: RouterOptions = toml::from_str(&content)?;

    validate_options(&options)?;

    Ok(options)
}

/// Load the ordered pattern → label route map from a TOML file.
///
/// The file's `[routes]` table maps each pattern to a handler label; entry
/// order is the file's key order. A missing table yields an empty map.
pub fn load_route_labels(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;

    Ok(route_labels(&value)?)
}

/// Extract route labels from a parsed TOML document.
///
/// This is the one place untyped input still reaches the route table, so the
/// shape errors surface here: a `routes` value that is not a table (or a
/// label that is not a string) is `InvalidTarget`, a table with no entries is
/// `EmptyTarget`.
pub fn route_labels(value: &toml::Value) -> RouterResult<Vec<(String, String)>> {
    let routes = match value.get("routes") {
        None => return Ok(Vec::new()),
        Some(routes) => routes,
    };

    let table = routes.as_table().ok_or(RouterError::InvalidTarget)?;
    if table.is_empty() {
        return Err(RouterError::EmptyTarget);
    }

    table
        .iter()
        .map(|(pattern, label)| {
            label
                .as_str()
                .map(|label| (pattern.clone(), label.to_string()))
                .ok_or(RouterError::InvalidTarget)
        })
        .collect()
}
