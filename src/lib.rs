//! # PayGate SDK
//!
//! Rust client library for the PayGate payment-processing gateway:
//! - Authenticated REST and GraphQL requests over a pooled HTTP client
//! - XML and JSON request/response codecs
//! - A closed error taxonomy covering HTTP statuses and transport failures
//! - Three mutually exclusive credential schemes (OAuth client credentials,
//!   bearer access token, API key pair)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paygate::{Configuration, Environment, Gateway};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = Gateway::new(
//!         Configuration::builder()
//!             .environment(Environment::Sandbox)
//!             .keys("public_key", "private_key")
//!             .build()?,
//!     )?;
//!
//!     let account = gateway
//!         .sub_merchant_accounts()
//!         .create(json!({
//!             "business": {"legal_name": "Acme & Sons"},
//!             "tos_accepted": true,
//!         }))
//!         .await?;
//!
//!     println!("{account:#}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use config::{Configuration, ConfigurationBuilder};
pub use environment::Environment;
pub use error::{Error, Result, TransportFailure};
pub use gateway::Gateway;
pub use http::{ContentType, FileUpload, Http, Request};
pub use types::{Address, BusinessDetails, FundingDetails};

// Module declarations
pub mod config;
pub mod environment;
pub mod error;
pub mod gateway;
pub mod http;
pub mod resources;
pub mod types;
pub mod xml;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use paygate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Configuration, Environment, Error, Gateway, Result,
        http::{ContentType, FileUpload, Http, Request},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `X-ApiVersion` header value
pub const DEFAULT_API_VERSION: &str = "6";
