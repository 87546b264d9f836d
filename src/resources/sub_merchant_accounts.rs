//! Sub-merchant account endpoint

use serde_json::{Value, json};

use crate::{error::Result, gateway::Gateway};

/// Sub-merchant account onboarding and maintenance.
#[derive(Clone)]
pub struct SubMerchantAccounts {
    gateway: Gateway,
}

impl SubMerchantAccounts {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Create a sub-merchant account.
    ///
    /// `params` is the attribute tree for the new account; validation
    /// failures come back in the decoded response body, not as errors.
    pub async fn create(&self, params: Value) -> Result<Value> {
        self.gateway
            .http()
            .post(
                "/sub_merchant_accounts",
                Some(json!({"sub_merchant_account": params})),
            )
            .await
    }

    /// Update an existing sub-merchant account.
    pub async fn update(&self, id: &str, params: Value) -> Result<Value> {
        self.gateway
            .http()
            .put(
                &format!("/sub_merchant_accounts/{id}"),
                Some(json!({"sub_merchant_account": params})),
            )
            .await
    }

    /// Fetch a sub-merchant account by id.
    pub async fn find(&self, id: &str) -> Result<Value> {
        self.gateway
            .http()
            .get(&format!("/sub_merchant_accounts/{id}"))
            .await
    }
}
