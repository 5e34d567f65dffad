//! Loading substitution rules from a JSON file.
//! The rules file is an ordered array of `{"file": ..., "tokens": {...}}`
//! objects; rule and token order are preserved as declared.

use crate::error::{Error, Result};
use crate::substitution::SubstitutionRule;
use log::debug;
use std::path::Path;

/// Loads substitution rules from a JSON file.
///
/// # Returns
/// * `Result<Vec<SubstitutionRule>>` - Rules in declaration order
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or is not valid rules JSON
pub fn load_rules<P: AsRef<Path>>(rules_path: P) -> Result<Vec<SubstitutionRule>> {
    let rules_path = rules_path.as_ref();
    debug!("Loading substitution rules from {}", rules_path.display());

    let content = std::fs::read_to_string(rules_path).map_err(|e| {
        Error::ConfigError(format!(
            "cannot read rules file '{}': {}",
            rules_path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        Error::ConfigError(format!(
            "invalid rules file '{}': {}",
            rules_path.display(),
            e
        ))
    })
}
