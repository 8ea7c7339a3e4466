use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "gsflog";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_directory: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_directory = dirs::document_dir()
            .unwrap_or_default()
            .join("Star Wars - The Old Republic")
            .join("CombatLogs");
        Self {
            log_directory: log_directory.to_string_lossy().into_owned(),
        }
    }
}

impl AppConfig {
    /// Load the stored config, falling back to defaults if it can't be read.
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}

/// Resolve a log file path, joining with log_directory if relative.
pub fn resolve_log_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&config.log_directory).join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_log_path() {
        let config = AppConfig {
            log_directory: "/logs".to_string(),
        };
        assert_eq!(
            resolve_log_path(&config, Path::new("combat_2016-01-15_20_37_08_109597.txt")),
            PathBuf::from("/logs/combat_2016-01-15_20_37_08_109597.txt")
        );
        assert_eq!(
            resolve_log_path(&config, Path::new("/other/combat.txt")),
            PathBuf::from("/other/combat.txt")
        );
    }

    #[test]
    fn test_default_points_at_combat_logs() {
        assert!(AppConfig::default().log_directory.ends_with("CombatLogs"));
    }
}
