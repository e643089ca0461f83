//! Warranty claim schema

use serde::{Deserialize, Serialize};

/// One order item included in a warranty claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaimItem {
    /// External order item reference
    pub order_item_id: String,

    /// Warranty cycles started for this item, maintained by order management
    pub warranty_round: u32,

    /// Customer-facing description of the defect
    #[serde(default)]
    pub description: String,

    /// Evidence image references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl WarrantyClaimItem {
    pub fn new(order_item_id: impl Into<String>, warranty_round: u32) -> Self {
        WarrantyClaimItem {
            order_item_id: order_item_id.into(),
            warranty_round,
            description: String::new(),
            images: Vec::new(),
        }
    }

    /// Return a new item with the given description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A warranty claim as submitted by a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaim {
    /// Items covered by the claim
    #[serde(default)]
    pub items: Vec<WarrantyClaimItem>,

    /// Manually entered fee, in minor currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
}

impl WarrantyClaim {
    pub fn new(items: Vec<WarrantyClaimItem>) -> Self {
        WarrantyClaim { items, fee: None }
    }

    /// Return a new claim with the given fee
    pub fn with_fee(mut self, fee: Option<i64>) -> Self {
        self.fee = fee;
        self
    }
}
