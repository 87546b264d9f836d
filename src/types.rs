//! Entity data holders
//!
//! Plain serde structs for the attribute bundles the gateway accepts when
//! onboarding sub-merchants. They carry no behavior beyond conversion into
//! request parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A physical address attached to business or funding details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    /// City or locality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// State, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Business identity details for a sub-merchant account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    /// Registered legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    /// Legal structure the business is registered as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_as: Option<String>,
    /// Registered business address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Funding destination details for a sub-merchant account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingDetails {
    /// Bank routing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Last four digits of the funding account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number_last_4: Option<String>,
    /// Name on the funding account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
}

impl BusinessDetails {
    /// Convert into a request parameter tree.
    pub fn into_params(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FundingDetails {
    /// Convert into a request parameter tree.
    pub fn into_params(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
