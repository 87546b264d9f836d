//! Gateway environments and their endpoint URLs

use std::fmt;
use std::str::FromStr;

/// The gateway environment a [`Configuration`](crate::Configuration) points at.
///
/// Each environment owns its REST and GraphQL base URLs. `Development` talks
/// plain HTTP to a local gateway process and skips TLS certificate
/// verification; `Sandbox` and `Production` always verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// The live gateway.
    Production,
    /// The integration-testing gateway.
    Sandbox,
    /// A local gateway instance listening on the given port.
    Development {
        /// Port the local gateway listens on.
        port: u16,
    },
}

impl Environment {
    /// Default port for a local development gateway.
    pub const DEFAULT_DEVELOPMENT_PORT: u16 = 3000;

    /// Base URL for REST endpoints in this environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Production => "https://api.paygate.io".to_string(),
            Environment::Sandbox => "https://api.sandbox.paygate.io".to_string(),
            Environment::Development { port } => format!("http://localhost:{port}"),
        }
    }

    /// Base URL for GraphQL endpoints in this environment.
    pub fn graphql_base_url(&self) -> String {
        match self {
            Environment::Production => "https://payments.paygate.io/graphql".to_string(),
            Environment::Sandbox => "https://payments.sandbox.paygate.io/graphql".to_string(),
            Environment::Development { port } => format!("http://localhost:{port}/graphql"),
        }
    }

    /// Whether TLS certificate verification is skipped for this environment.
    ///
    /// Only `Development` skips verification.
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development { .. })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Development { .. } => write!(f, "development"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            "development" => Ok(Environment::Development {
                port: Environment::DEFAULT_DEVELOPMENT_PORT,
            }),
            other => Err(crate::error::Error::HttpClient(format!(
                "unknown environment '{other}' (expected production, sandbox, or development)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://api.paygate.io");
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://api.sandbox.paygate.io"
        );
        assert_eq!(
            Environment::Development { port: 4000 }.base_url(),
            "http://localhost:4000"
        );
    }

    #[test]
    fn test_graphql_base_urls() {
        assert_eq!(
            Environment::Production.graphql_base_url(),
            "https://payments.paygate.io/graphql"
        );
        assert_eq!(
            Environment::Development { port: 3000 }.graphql_base_url(),
            "http://localhost:3000/graphql"
        );
    }

    #[test]
    fn test_only_development_skips_verification() {
        assert!(Environment::Development { port: 3000 }.is_development());
        assert!(!Environment::Sandbox.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Sandbox".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development { port: 3000 }
        );
        assert!("staging".parse::<Environment>().is_err());
    }
}
