//! Warranty command - Evaluate and validate a warranty claim

use std::path::Path;

use crate::config::load_config;
use crate::domain::{evaluate_warranty_fee, validate_warranty_claim};
use crate::errors::{Result, TrackerError};
use crate::fs::{find_repo_root, read_json, resolve_cwd};
use crate::schemas::{Config, WarrantyClaim};

/// Threshold from the override, the tracker config, or the default config
fn resolve_threshold(cwd: Option<&Path>, threshold: Option<u32>) -> Result<u32> {
    if let Some(threshold) = threshold {
        if threshold == 0 {
            return Err(TrackerError::ConfigError(
                "--threshold must be at least 1".to_string(),
            ));
        }
        return Ok(threshold);
    }

    match find_repo_root(&resolve_cwd(cwd)) {
        Ok(root) => Ok(load_config(&root)?.warranty_round_threshold),
        Err(_) => {
            tracing::debug!("no tracker root found, using default warranty threshold");
            Ok(Config::default().warranty_round_threshold)
        }
    }
}

/// Evaluate a claim file and report whether it can be submitted
pub async fn run(
    cwd: Option<&Path>,
    file: &Path,
    threshold: Option<u32>,
    json: bool,
) -> Result<()> {
    let threshold = resolve_threshold(cwd, threshold)?;
    let claim: WarrantyClaim = read_json(file)?;

    let decision = evaluate_warranty_fee(&claim.items, threshold);
    if json {
        let out = serde_json::to_string_pretty(&decision)
            .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        for item in &decision.items {
            println!(
                "{:<24} round {:>2}  {}",
                item.order_item_id,
                item.warranty_round,
                if item.fee_applicable { "fee" } else { "free" }
            );
        }
        println!("needs fee: {} (threshold {})", decision.needs_fee, threshold);
    }

    let validated = validate_warranty_claim(&claim, threshold)?;
    tracing::info!(items = validated.items.len(), fee = ?validated.fee, "warranty claim valid");
    Ok(())
}
