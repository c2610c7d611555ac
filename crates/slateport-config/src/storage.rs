//! Session state storage configuration.
//!
//! # Configuration
//!
//! - `SLATEPORT_STATE_FILE`: Path of the persisted session state file.
//!   When unset, a platform-appropriate default is used:
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.local/share/slateport/state.json` |
//! | macOS | `~/Library/Application Support/slateport/state.json` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\slateport\state.json` |

use std::path::PathBuf;

/// Location of the persisted session state file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub state_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
        }
    }
}

impl StorageConfig {
    /// Creates a new `StorageConfig` from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SLATEPORT_STATE_FILE`: Defaults to `slateport/state.json` under
    ///   the platform data directory
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            state_file: std::env::var("SLATEPORT_STATE_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_state_file),
        }
    }
}

/// Platform data directory fallback, relative to the working directory
/// when no data directory is available.
fn default_state_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slateport")
        .join("state.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_app_dir_and_file() {
        let config = StorageConfig::default();
        let path = config.state_file.to_string_lossy().replace('\\', "/");
        assert!(path.ends_with("slateport/state.json"));
    }

    #[test]
    fn test_config_clone_and_equality() {
        let config = StorageConfig::default();
        assert_eq!(config, config.clone());
    }
}
