//! Path management for finledger
//!
//! ## Path Resolution Order
//!
//! 1. Explicit path (the `--file` flag)
//! 2. `FINLEDGER_FILE` environment variable (if set and non-empty)
//! 3. `finances.csv` in the working directory

use std::path::{Path, PathBuf};

/// Default ledger file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "finances.csv";

/// Environment variable overriding the ledger file location
pub const DATA_FILE_ENV: &str = "FINLEDGER_FILE";

/// Manages the paths used by finledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    data_file: PathBuf,
}

impl LedgerPaths {
    /// Resolve the ledger path from the environment, falling back to
    /// `finances.csv` in the working directory
    pub fn new() -> Self {
        let data_file = match std::env::var(DATA_FILE_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => PathBuf::from(DEFAULT_DATA_FILE),
        };

        Self { data_file }
    }

    /// Create LedgerPaths pointing at an explicit file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Resolve from an optional explicit path, otherwise from the environment
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        explicit.map(Self::with_data_file).unwrap_or_default()
    }

    /// Get the path to the ledger CSV file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Check if the ledger file has been created yet
    pub fn is_initialized(&self) -> bool {
        self.data_file.exists()
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("ledger.csv");
        let paths = LedgerPaths::with_data_file(&file);

        assert_eq!(paths.data_file(), file.as_path());
        assert!(!paths.is_initialized());

        std::fs::write(&file, "date,category,amount,description\n").unwrap();
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_env_var_override_and_default() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("custom.csv");

        env::set_var(DATA_FILE_ENV, &custom);
        assert_eq!(LedgerPaths::new().data_file(), custom.as_path());

        // An explicit path still wins over the environment
        let explicit = LedgerPaths::resolve(Some(PathBuf::from("other.csv")));
        assert_eq!(explicit.data_file(), Path::new("other.csv"));

        env::remove_var(DATA_FILE_ENV);
        assert_eq!(LedgerPaths::new().data_file(), Path::new(DEFAULT_DATA_FILE));
        assert_eq!(LedgerPaths::resolve(None).data_file(), Path::new(DEFAULT_DATA_FILE));
    }
}
