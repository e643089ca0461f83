//! Warranty fee policy
//!
//! A claim needs a fee as soon as one of its items has reached the configured
//! warranty round. The fee amount itself is always entered by staff.

use serde::Serialize;

use crate::errors::{Result, TrackerError};
use crate::schemas::{WarrantyClaim, WarrantyClaimItem};

/// Fee decision for one claim item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFeeDecision {
    pub order_item_id: String,
    pub warranty_round: u32,
    pub fee_applicable: bool,
}

/// Fee decision for a whole claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyFeeDecision {
    pub needs_fee: bool,
    pub items: Vec<ItemFeeDecision>,
}

/// A claim that passed submission validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedClaim {
    pub items: Vec<WarrantyClaimItem>,
    /// Present only when the decision required a fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
    pub decision: WarrantyFeeDecision,
}

/// Whether a single item's round reaches the threshold
pub fn item_needs_fee(item: &WarrantyClaimItem, threshold: u32) -> bool {
    item.warranty_round >= threshold
}

/// Decide whether a set of claim items requires a fee.
///
/// An empty set never requires one.
pub fn evaluate_warranty_fee(items: &[WarrantyClaimItem], threshold: u32) -> WarrantyFeeDecision {
    let items: Vec<ItemFeeDecision> = items
        .iter()
        .map(|item| ItemFeeDecision {
            order_item_id: item.order_item_id.clone(),
            warranty_round: item.warranty_round,
            fee_applicable: item_needs_fee(item, threshold),
        })
        .collect();

    WarrantyFeeDecision {
        needs_fee: items.iter().any(|i| i.fee_applicable),
        items,
    }
}

/// Submission-time validation of a warranty claim.
///
/// # Errors
/// * `InvalidClaim` - no items, an item with round 0, or a blank description
/// * `InvalidFeeAmount` - a negative fee
/// * `MissingFeeAmount` - the claim needs a fee and none was supplied
pub fn validate_warranty_claim(claim: &WarrantyClaim, threshold: u32) -> Result<ValidatedClaim> {
    if claim.items.is_empty() {
        return Err(TrackerError::InvalidClaim(
            "a warranty claim needs at least one item".to_string(),
        ));
    }

    for item in &claim.items {
        if item.warranty_round < 1 {
            return Err(TrackerError::InvalidClaim(format!(
                "order item {} has warranty round 0",
                item.order_item_id
            )));
        }
        if item.description.trim().is_empty() {
            return Err(TrackerError::InvalidClaim(format!(
                "order item {} has no description",
                item.order_item_id
            )));
        }
    }

    if let Some(fee) = claim.fee {
        if fee < 0 {
            return Err(TrackerError::InvalidFeeAmount(fee));
        }
    }

    let decision = evaluate_warranty_fee(&claim.items, threshold);
    if decision.needs_fee && claim.fee.is_none() {
        return Err(TrackerError::MissingFeeAmount);
    }

    Ok(ValidatedClaim {
        items: claim.items.clone(),
        fee: claim.fee.filter(|_| decision.needs_fee),
        decision,
    })
}
