//! Configuration for the gateway client
//!
//! A [`Configuration`] carries the environment, credentials, timeout, and the
//! transport-error wrapping policy. It is immutable once built and shared
//! read-only by every request; there is no process-global state.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    environment::Environment,
    error::{Error, Result},
};

/// Default request timeout, matching the gateway's documented limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a [`Gateway`](crate::Gateway) or bare
/// [`Http`](crate::http::Http) transport.
///
/// Credentials support three mutually exclusive schemes, selected per request
/// in priority order: OAuth client credentials, then a bearer access token,
/// then a public/private key pair.
///
/// # Example
///
/// ```rust
/// use paygate::{Configuration, Environment};
///
/// let config = Configuration::builder()
///     .environment(Environment::Sandbox)
///     .keys("public_key", "private_key")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    environment: Environment,
    client_id: Option<SecretString>,
    client_secret: Option<SecretString>,
    access_token: Option<SecretString>,
    public_key: Option<SecretString>,
    private_key: Option<SecretString>,
    timeout: Duration,
    wrap_transport_errors: bool,
    api_version: String,
    base_url_override: Option<String>,
    graphql_base_url_override: Option<String>,
}

impl Configuration {
    /// Create a new configuration builder.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Load configuration from `PAYGATE_*` environment variables.
    ///
    /// Looks for:
    /// - `PAYGATE_ENVIRONMENT` (`production`, `sandbox`, or `development`)
    /// - `PAYGATE_CLIENT_ID` / `PAYGATE_CLIENT_SECRET`
    /// - `PAYGATE_ACCESS_TOKEN`
    /// - `PAYGATE_PUBLIC_KEY` / `PAYGATE_PRIVATE_KEY`
    /// - `PAYGATE_TIMEOUT` (seconds)
    /// - `PAYGATE_API_VERSION`
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let mut builder = Self::builder();

        if let Ok(environment) = env::var("PAYGATE_ENVIRONMENT") {
            builder = builder.environment(environment.parse()?);
        }
        if let (Ok(id), Ok(secret)) = (
            env::var("PAYGATE_CLIENT_ID"),
            env::var("PAYGATE_CLIENT_SECRET"),
        ) {
            builder = builder.client_credentials(id, secret);
        }
        if let Ok(token) = env::var("PAYGATE_ACCESS_TOKEN") {
            builder = builder.access_token(token);
        }
        if let (Ok(public), Ok(private)) = (
            env::var("PAYGATE_PUBLIC_KEY"),
            env::var("PAYGATE_PRIVATE_KEY"),
        ) {
            builder = builder.keys(public, private);
        }
        if let Ok(timeout) = env::var("PAYGATE_TIMEOUT")
            && let Ok(secs) = timeout.parse::<u64>()
        {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Ok(api_version) = env::var("PAYGATE_API_VERSION") {
            builder = builder.api_version(api_version);
        }

        builder.build()
    }

    /// The configured environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Base URL for REST endpoints.
    pub fn base_url(&self) -> String {
        self.base_url_override
            .clone()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Base URL for GraphQL endpoints.
    pub fn graphql_base_url(&self) -> String {
        self.graphql_base_url_override
            .clone()
            .unwrap_or_else(|| self.environment.graphql_base_url())
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether transport failures are wrapped into the SDK error taxonomy.
    ///
    /// When `false`, the raw `reqwest` error propagates unmodified inside
    /// [`Error::Transport`](crate::Error::Transport).
    pub fn wrap_transport_errors(&self) -> bool {
        self.wrap_transport_errors
    }

    /// The `X-ApiVersion` header value sent with every request.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Whether OAuth client credentials are configured.
    pub fn has_client_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Whether a bearer access token is configured.
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether a public/private key pair is configured.
    pub fn has_key_pair(&self) -> bool {
        self.public_key.is_some() && self.private_key.is_some()
    }

    /// Build the `Authorization` header value for the selected credential
    /// scheme.
    ///
    /// Exactly one scheme is used, in priority order: client credentials,
    /// access token, key pair. Schemes are never combined.
    pub(crate) fn authorization_header(&self) -> Result<String> {
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            Ok(basic(id.expose_secret(), secret.expose_secret()))
        } else if let Some(token) = &self.access_token {
            Ok(sanitize(&format!("Bearer {}", token.expose_secret())))
        } else if let (Some(public), Some(private)) = (&self.public_key, &self.private_key) {
            Ok(basic(public.expose_secret(), private.expose_secret()))
        } else {
            Err(Error::MissingCredentials(
                "no client credentials, access token, or key pair configured".to_string(),
            ))
        }
    }
}

fn basic(user: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{user}:{password}"));
    sanitize(&format!("Basic {encoded}"))
}

// Header values must not carry embedded newlines or trailing whitespace.
fn sanitize(value: &str) -> String {
    value.replace(['\r', '\n'], "").trim_end().to_string()
}

/// Builder for [`Configuration`].
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    environment: Option<Environment>,
    client_id: Option<SecretString>,
    client_secret: Option<SecretString>,
    access_token: Option<SecretString>,
    public_key: Option<SecretString>,
    private_key: Option<SecretString>,
    timeout: Option<Duration>,
    wrap_transport_errors: Option<bool>,
    api_version: Option<String>,
    base_url_override: Option<String>,
    graphql_base_url_override: Option<String>,
}

impl ConfigurationBuilder {
    /// Set the gateway environment. Defaults to [`Environment::Sandbox`].
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set OAuth client credentials (highest-priority scheme).
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(SecretString::new(client_id.into().into_boxed_str()));
        self.client_secret = Some(SecretString::new(client_secret.into().into_boxed_str()));
        self
    }

    /// Set a bearer access token.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::new(access_token.into().into_boxed_str()));
        self
    }

    /// Set an API key pair (lowest-priority scheme).
    pub fn keys(
        mut self,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        self.public_key = Some(SecretString::new(public_key.into().into_boxed_str()));
        self.private_key = Some(SecretString::new(private_key.into().into_boxed_str()));
        self
    }

    /// Set the request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control whether transport failures are wrapped into the SDK error
    /// taxonomy. Defaults to `true`.
    pub fn wrap_transport_errors(mut self, wrap: bool) -> Self {
        self.wrap_transport_errors = Some(wrap);
        self
    }

    /// Override the `X-ApiVersion` header value.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Override the REST base URL derived from the environment.
    ///
    /// Intended for tests and proxies.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Override the GraphQL base URL derived from the environment.
    pub fn graphql_base_url(mut self, graphql_base_url: impl Into<String>) -> Self {
        self.graphql_base_url_override = Some(graphql_base_url.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credential scheme was
    /// provided.
    pub fn build(self) -> Result<Configuration> {
        let config = Configuration {
            environment: self.environment.unwrap_or(Environment::Sandbox),
            client_id: self.client_id,
            client_secret: self.client_secret,
            access_token: self.access_token,
            public_key: self.public_key,
            private_key: self.private_key,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            wrap_transport_errors: self.wrap_transport_errors.unwrap_or(true),
            api_version: self
                .api_version
                .unwrap_or_else(|| crate::DEFAULT_API_VERSION.to_string()),
            base_url_override: self.base_url_override,
            graphql_base_url_override: self.graphql_base_url_override,
        };

        if !config.has_client_credentials()
            && !config.has_access_token()
            && !config.has_key_pair()
        {
            return Err(Error::MissingCredentials(
                "provide client credentials, an access token, or a key pair".to_string(),
            ));
        }

        Ok(config)
    }
}
