//! Settings for the `sort` subcommand.

use std::fs;
use std::path::Path;

use algo_practice_sort::Algorithm;
use serde::Deserialize;

use crate::error::CliError;

/// Contents of a `--config` file, e.g. `{"algorithm": "quick-iterative"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub algorithm: Algorithm,
}

impl SortConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|source| CliError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve the algorithm to run; an explicit flag beats the file.
    pub fn resolve(config: Option<SortConfig>, flag: Option<Algorithm>) -> Algorithm {
        flag.or(config.map(|c| c.algorithm)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = SortConfig::from_json(r#"{"algorithm": "quick"}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
    }

    #[test]
    fn test_from_json_defaults() {
        assert_eq!(SortConfig::from_json("{}").unwrap(), SortConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(SortConfig::from_json(r#"{"algo": "quick"}"#).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let file = Some(SortConfig {
            algorithm: Algorithm::Quick,
        });
        assert_eq!(SortConfig::resolve(None, None), Algorithm::Merge);
        assert_eq!(SortConfig::resolve(file.clone(), None), Algorithm::Quick);
        assert_eq!(
            SortConfig::resolve(file, Some(Algorithm::QuickIterative)),
            Algorithm::QuickIterative
        );
    }
}
