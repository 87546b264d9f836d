//! Main gateway client

use std::sync::{Arc, OnceLock};

use crate::{
    config::Configuration,
    error::Result,
    http::Http,
    resources::{DocumentUploads, SubMerchantAccounts},
};

/// Entry point for talking to the gateway.
///
/// Wraps the [`Http`] transport and exposes endpoint resources. Cheap to
/// clone; clones share the transport and its connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use paygate::{Configuration, Environment, Gateway};
///
/// # async fn example() -> paygate::Result<()> {
/// let gateway = Gateway::new(
///     Configuration::builder()
///         .environment(Environment::Sandbox)
///         .keys("public_key", "private_key")
///         .build()?,
/// )?;
///
/// let account = gateway.sub_merchant_accounts().find("sub_123").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    http: Http,

    // Lazily initialized resources
    sub_merchant_accounts: OnceLock<SubMerchantAccounts>,
    document_uploads: OnceLock<DocumentUploads>,
}

impl Gateway {
    /// Create a gateway client from a configuration.
    pub fn new(config: Configuration) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(GatewayInner {
                http: Http::new(config)?,
                sub_merchant_accounts: OnceLock::new(),
                document_uploads: OnceLock::new(),
            }),
        })
    }

    /// The underlying transport, for endpoints without a dedicated resource.
    pub fn http(&self) -> &Http {
        &self.inner.http
    }

    /// Sub-merchant account operations.
    pub fn sub_merchant_accounts(&self) -> &SubMerchantAccounts {
        self.inner
            .sub_merchant_accounts
            .get_or_init(|| SubMerchantAccounts::new(self.clone()))
    }

    /// Document upload operations.
    pub fn document_uploads(&self) -> &DocumentUploads {
        self.inner
            .document_uploads
            .get_or_init(|| DocumentUploads::new(self.clone()))
    }
}
