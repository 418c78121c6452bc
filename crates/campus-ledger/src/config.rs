//! Ledger configuration.
//!
//! A `LedgerConfig` is deserialized from TOML. Every field has a default, so
//! an empty document is a valid configuration.
//!
//! ```toml
//! # "sha256" (default) or "checksum"
//! digest = "checksum"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use campus_contracts::{LedgerError, LedgerResult};

use crate::digest::DigestAlgorithm;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    /// Digest used for every record hash in the ledger.
    pub digest: DigestAlgorithm,
}

impl LedgerConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `LedgerError::Config` if the TOML is malformed or names an
    /// unknown key or digest.
    pub fn from_toml_str(s: &str) -> LedgerResult<Self> {
        toml::from_str(s).map_err(|e| LedgerError::Config {
            reason: format!("failed to parse ledger TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML ledger configuration.
    pub fn from_file(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LedgerError::Config {
            reason: format!("failed to read ledger config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = LedgerConfig::from_toml_str("").unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.digest, DigestAlgorithm::Sha256);
    }

    #[test]
    fn digest_can_be_selected() {
        let config = LedgerConfig::from_toml_str(r#"digest = "checksum""#).unwrap();
        assert_eq!(config.digest, DigestAlgorithm::Checksum);
    }

    #[test]
    fn unknown_digest_is_a_config_error() {
        match LedgerConfig::from_toml_str(r#"digest = "md5""#) {
            Err(LedgerError::Config { reason }) => {
                assert!(reason.contains("failed to parse ledger TOML"), "got: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        assert!(matches!(
            LedgerConfig::from_toml_str("persist = true"),
            Err(LedgerError::Config { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        match LedgerConfig::from_file(Path::new("/nonexistent/ledger.toml")) {
            Err(LedgerError::Config { reason }) => {
                assert!(reason.contains("/nonexistent/ledger.toml"), "got: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }
}
