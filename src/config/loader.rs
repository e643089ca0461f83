//! Configuration loading with defaults

use std::path::Path;

use crate::domain::NameMarkerClassifier;
use crate::errors::{Result, TrackerError};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the tracker root, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
///
/// # Errors
/// * `InvalidJson` - config.json is not valid JSON
/// * `ConfigError` - a value is out of range
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    validate_config(&config)?;
    tracing::debug!(
        threshold = config.warranty_round_threshold,
        markers = ?config.quality_check_markers,
        "loaded configuration"
    );
    Ok(config)
}

/// Check that a configuration can drive the engine and the fee policy.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.warranty_round_threshold == 0 {
        return Err(TrackerError::ConfigError(
            "warranty_round_threshold must be at least 1".to_string(),
        ));
    }
    NameMarkerClassifier::new(&config.quality_check_markers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join(".milestones")).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.warranty_round_threshold, 2);
        assert_eq!(config.quality_check_markers, vec!["quality"]);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".milestones");
        std_fs::create_dir(&dir).unwrap();

        let config_content = r#"{
            "quality_check_markers": ["quality", "QC"],
            "warranty_round_threshold": 3
        }"#;
        std_fs::write(dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.warranty_round_threshold, 3);
        assert_eq!(config.quality_check_markers, vec!["quality", "QC"]);
        // Default for unspecified field
        assert_eq!(config.schema_version, 1);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".milestones");
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join("config.json"), r#"{"warranty_round_threshold": 0}"#).unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
