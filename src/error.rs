//! Error types for the PayGate SDK
//!
//! All gateway failures are normalized into a single flat [`Error`] taxonomy:
//! non-success HTTP statuses map through [`Error::from_status`], and
//! transport-level failures map through the [`TransportFailure`] categories.
//! Domain validation responses (HTTP 422) are not errors at this layer; they
//! decode like any success and the caller inspects the body.

use thiserror::Error;

/// Result type alias for operations that can fail with a PayGate SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PayGate SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The gateway rejected the request credentials (401).
    #[error("authentication failed: credentials were rejected by the gateway")]
    Authentication,

    /// The authenticated account may not perform this operation (403).
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// The requested resource does not exist (404).
    #[error("resource not found")]
    NotFound,

    /// The gateway timed out processing the request (408).
    #[error("request timed out at the gateway")]
    RequestTimeout,

    /// The gateway requires a newer client library (426).
    #[error("the client library must be upgraded to talk to the gateway")]
    UpgradeRequired,

    /// The request was rate limited (429).
    #[error("too many requests")]
    TooManyRequests,

    /// The gateway hit an internal error (500).
    #[error("the gateway encountered an internal server error")]
    Server,

    /// The gateway is temporarily unavailable (503).
    #[error("the gateway is unavailable")]
    ServiceUnavailable,

    /// The gateway timed out upstream (504).
    #[error("the gateway timed out upstream")]
    GatewayTimeout,

    /// Any status code without a dedicated variant.
    #[error("{0}")]
    Unexpected(String),

    /// The connection to the gateway could not be established.
    #[error("connection to the gateway failed")]
    ConnectionFailure,

    /// The connection was established but the response timed out.
    #[error("timed out reading the gateway response")]
    ReadTimeout,

    /// The connection attempt itself timed out.
    #[error("timed out connecting to the gateway")]
    ConnectTimeout,

    /// A timeout that is neither a read nor a connect timeout.
    #[error("the request timed out")]
    GenericTimeout,

    /// The gateway response violated the HTTP protocol or could not be read.
    #[error("invalid HTTP response from the gateway")]
    InvalidResponse,

    /// Raw transport error, surfaced only when
    /// [`wrap_transport_errors`](crate::Configuration::wrap_transport_errors)
    /// is disabled.
    #[error(transparent)]
    Transport(reqwest::Error),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// XML encoding or decoding failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// No usable credential scheme was configured.
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

impl Error {
    /// Map a non-success HTTP status code to its error variant.
    ///
    /// The 403 variant carries the response body as its message. Statuses
    /// without a dedicated variant become [`Error::Unexpected`] carrying the
    /// literal status code.
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            401 => Error::Authentication,
            403 => Error::Authorization(message.to_string()),
            404 => Error::NotFound,
            408 => Error::RequestTimeout,
            426 => Error::UpgradeRequired,
            429 => Error::TooManyRequests,
            500 => Error::Server,
            503 => Error::ServiceUnavailable,
            504 => Error::GatewayTimeout,
            other => Error::Unexpected(format!("Unexpected HTTP_RESPONSE {other}")),
        }
    }
}

/// Category of a transport-level failure, determined before any HTTP status
/// is available.
///
/// Categorization happens once at the transport call boundary via
/// [`TransportFailure::of`]; the taxonomy mapping is then a plain
/// [`From`] conversion, so the full table is testable without manufacturing
/// transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// The response body timed out after the connection was established.
    ReadTimeout,
    /// The connection attempt timed out.
    ConnectTimeout,
    /// The connection failed outright (refused, reset, DNS failure).
    ConnectionFailure,
    /// The response violated the HTTP protocol or its body could not be read.
    Protocol,
    /// A timeout not attributable to read or connect.
    Timeout,
    /// Anything else.
    Other,
}

impl TransportFailure {
    /// Categorize a transport error, checked in priority order: timeouts
    /// first (connect-phase timeouts before read timeouts), then connection
    /// failures, then protocol/body failures.
    ///
    /// reqwest reports a single timeout flag, so every timeout past the
    /// connect phase classifies as [`TransportFailure::ReadTimeout`].
    /// [`TransportFailure::Timeout`] covers timeouts attributable to neither
    /// phase and is never produced from a reqwest error.
    pub fn of(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                TransportFailure::ConnectTimeout
            } else {
                TransportFailure::ReadTimeout
            }
        } else if err.is_connect() {
            TransportFailure::ConnectionFailure
        } else if err.is_body() || err.is_decode() {
            TransportFailure::Protocol
        } else {
            TransportFailure::Other
        }
    }
}

impl From<TransportFailure> for Error {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::ReadTimeout => Error::ReadTimeout,
            TransportFailure::ConnectTimeout => Error::ConnectTimeout,
            TransportFailure::ConnectionFailure => Error::ConnectionFailure,
            TransportFailure::Protocol => Error::InvalidResponse,
            TransportFailure::Timeout => Error::GenericTimeout,
            TransportFailure::Other => {
                Error::Unexpected("unexpected transport failure".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_status_mapped_codes() {
        assert_matches!(Error::from_status(401, ""), Error::Authentication);
        assert_matches!(Error::from_status(404, ""), Error::NotFound);
        assert_matches!(Error::from_status(408, ""), Error::RequestTimeout);
        assert_matches!(Error::from_status(426, ""), Error::UpgradeRequired);
        assert_matches!(Error::from_status(429, ""), Error::TooManyRequests);
        assert_matches!(Error::from_status(500, ""), Error::Server);
        assert_matches!(Error::from_status(503, ""), Error::ServiceUnavailable);
        assert_matches!(Error::from_status(504, ""), Error::GatewayTimeout);
    }

    #[test]
    fn test_from_status_403_carries_message() {
        match Error::from_status(403, "merchant account suspended") {
            Error::Authorization(msg) => assert_eq!(msg, "merchant account suspended"),
            other => panic!("expected Authorization, got {other:?}"),
        }
    }

    #[test]
    fn test_from_status_unmapped_carries_literal_status() {
        match Error::from_status(409, "conflict") {
            Error::Unexpected(msg) => assert_eq!(msg, "Unexpected HTTP_RESPONSE 409"),
            other => panic!("expected Unexpected, got {other:?}"),
        }
        match Error::from_status(418, "") {
            Error::Unexpected(msg) => assert!(msg.contains("418")),
            other => panic!("expected Unexpected, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_mapping() {
        assert_matches!(
            Error::from(TransportFailure::ReadTimeout),
            Error::ReadTimeout
        );
        assert_matches!(
            Error::from(TransportFailure::ConnectTimeout),
            Error::ConnectTimeout
        );
        assert_matches!(
            Error::from(TransportFailure::ConnectionFailure),
            Error::ConnectionFailure
        );
        assert_matches!(
            Error::from(TransportFailure::Protocol),
            Error::InvalidResponse
        );
        assert_matches!(Error::from(TransportFailure::Timeout), Error::GenericTimeout);
        assert_matches!(Error::from(TransportFailure::Other), Error::Unexpected(_));
    }

    #[test]
    fn test_error_display() {
        let err = Error::from_status(409, "");
        assert_eq!(err.to_string(), "Unexpected HTTP_RESPONSE 409");

        let err = Error::Authorization("nope".to_string());
        assert_eq!(err.to_string(), "authorization failed: nope");
    }
}
