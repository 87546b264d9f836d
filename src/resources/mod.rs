//! Gateway API endpoints
//!
//! Thin wrappers that build endpoint paths and parameter trees, then
//! delegate to the [`Http`](crate::http::Http) transport.

pub use document_uploads::DocumentUploads;
pub use sub_merchant_accounts::SubMerchantAccounts;

mod document_uploads;
mod sub_merchant_accounts;
