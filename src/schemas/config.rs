//! Config schema - Configuration for milestone-tracker

use serde::{Deserialize, Serialize};

/// Main configuration for milestone-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Case-insensitive name markers identifying quality-check milestones
    #[serde(default = "default_quality_check_markers")]
    pub quality_check_markers: Vec<String>,

    /// Warranty round at which a claim starts requiring a fee
    #[serde(default = "default_warranty_round_threshold")]
    pub warranty_round_threshold: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_quality_check_markers() -> Vec<String> {
    vec!["quality".to_string()]
}

fn default_warranty_round_threshold() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            quality_check_markers: default_quality_check_markers(),
            warranty_round_threshold: default_warranty_round_threshold(),
        }
    }
}
