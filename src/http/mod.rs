//! HTTP transport layer
//!
//! This module owns request construction, authentication-header selection,
//! content-type negotiation, and the mapping of HTTP statuses and transport
//! failures into the [`Error`](crate::Error) taxonomy.

pub use request::{ContentType, FileUpload, Request};
pub use transport::Http;

mod request;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
