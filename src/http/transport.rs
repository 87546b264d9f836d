//! The gateway transport client
//!
//! Single point where requests are dispatched and responses and failures are
//! classified. Each call performs exactly one request-response exchange with
//! no retries; a failed status or transport error surfaces immediately as a
//! terminal [`Error`].

use http::header::{ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::request::{ContentType, FileUpload, Request};
use crate::{
    config::Configuration,
    error::{Error, Result, TransportFailure},
    xml,
};

const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-apiversion");

/// HTTP transport for the gateway.
///
/// Cheap to clone; the underlying connection pool is shared. Safe for
/// concurrent independent calls — the only shared state is the read-only
/// [`Configuration`].
///
/// # Example
///
/// ```rust,no_run
/// use paygate::{Configuration, Environment, http::Http};
///
/// # async fn example() -> paygate::Result<()> {
/// let config = Configuration::builder()
///     .environment(Environment::Sandbox)
///     .keys("public_key", "private_key")
///     .build()?;
/// let http = Http::new(config)?;
///
/// let merchant = http.get("/merchants/m_123").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Http {
    config: Configuration,
    client: reqwest::Client,
}

impl Http {
    /// Create a transport from a configuration.
    ///
    /// TLS certificate verification is disabled only when the configured
    /// environment is `Development`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the underlying client cannot be
    /// constructed.
    pub fn new(config: Configuration) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout());

        if config.environment().is_development() {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// The configuration this transport was built from.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// `GET` a resource.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(Request::new(Method::GET, path, ContentType::Xml))
            .await
    }

    /// `DELETE` a resource.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(Request::new(Method::DELETE, path, ContentType::Xml))
            .await
    }

    /// `POST` XML-encoded parameters.
    pub async fn post(&self, path: &str, params: Option<Value>) -> Result<Value> {
        let mut request = Request::new(Method::POST, path, ContentType::Xml);
        if let Some(params) = params {
            request = request.params(params);
        }
        self.execute(request).await
    }

    /// `PUT` XML-encoded parameters.
    pub async fn put(&self, path: &str, params: Option<Value>) -> Result<Value> {
        let mut request = Request::new(Method::PUT, path, ContentType::Xml);
        if let Some(params) = params {
            request = request.params(params);
        }
        self.execute(request).await
    }

    /// `POST` JSON-encoded parameters.
    ///
    /// Parameters are serialized to JSON text and the response body is
    /// decoded as JSON.
    pub async fn post_json(&self, path: &str, params: Option<Value>) -> Result<Value> {
        let mut request = Request::new(Method::POST, path, ContentType::Json);
        if let Some(params) = params {
            request = request.params(params);
        }
        self.execute(request).await
    }

    /// `POST` a multipart form of file payloads and text fields.
    pub async fn post_multipart(
        &self,
        path: &str,
        files: Vec<FileUpload>,
        params: Option<Value>,
    ) -> Result<Value> {
        let mut request =
            Request::new(Method::POST, path, ContentType::Multipart).files(files);
        if let Some(params) = params {
            request = request.params(params);
        }
        self.execute(request).await
    }

    /// Execute a request descriptor: resolve the URL, build headers and
    /// body, send once, and classify the outcome.
    pub async fn execute(&self, request: Request) -> Result<Value> {
        let url = self.resolve_url(&request.path);
        let headers = self.headers(request.content_type, &request.header_overrides)?;

        debug!(verb = %request.verb, %url, "dispatching gateway request");

        let mut builder = self.client.request(request.verb, &url).headers(headers);
        builder = match request.content_type {
            ContentType::Xml => match &request.params {
                Some(params) => builder.body(xml::to_xml(params)?),
                None => builder,
            },
            ContentType::Json => match &request.params {
                Some(params) => builder.body(serde_json::to_string(params)?),
                None => builder,
            },
            ContentType::Multipart => {
                builder.multipart(multipart_form(request.params.as_ref(), request.files)?)
            }
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.transport_error(e)),
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Err(self.transport_error(e)),
        };

        if is_error_status(status) {
            warn!(status, "gateway returned error status");
            return Err(Error::from_status(status, body.trim()));
        }

        debug!(status, "gateway request succeeded");

        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        match request.content_type {
            ContentType::Json => Ok(serde_json::from_str(&body)?),
            _ => xml::from_xml(&body),
        }
    }

    /// Paths already prefixed with a configured base URL pass through
    /// verbatim; anything else is appended to the REST base URL.
    fn resolve_url(&self, path: &str) -> String {
        let base = self.config.base_url();
        if path.starts_with(&base) || path.starts_with(&self.config.graphql_base_url()) {
            path.to_string()
        } else {
            format!("{base}{path}")
        }
    }

    fn headers(
        &self,
        content_type: ContentType,
        overrides: &[(String, String)],
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));
        headers.insert(
            AUTHORIZATION,
            parse_header_value(&self.config.authorization_header()?)?,
        );
        headers.insert(
            USER_AGENT,
            parse_header_value(&format!("paygate-rust/{}", crate::VERSION))?,
        );
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        headers.insert(
            API_VERSION_HEADER,
            parse_header_value(self.config.api_version())?,
        );

        if content_type == ContentType::Xml {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
        }

        // Overrides win over the standard header set.
        for (name, value) in overrides {
            let name = name.parse::<HeaderName>().map_err(|_| {
                Error::HttpClient(format!("invalid header name '{name}'"))
            })?;
            headers.insert(name, parse_header_value(value)?);
        }

        Ok(headers)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if self.config.wrap_transport_errors() {
            Error::from(TransportFailure::of(&err))
        } else {
            Error::Transport(err)
        }
    }
}

/// 422 is success at the transport level: domain validation detail lives in
/// the decoded body.
pub(crate) fn is_error_status(status: u16) -> bool {
    !matches!(status, 200 | 201 | 204 | 422)
}

fn parse_header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::HttpClient(format!("invalid header value '{value}'")))
}

fn multipart_form(
    params: Option<&Value>,
    files: Vec<FileUpload>,
) -> Result<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();

    if let Some(params) = params {
        let Value::Object(map) = params else {
            return Err(Error::HttpClient(
                "multipart parameters must be a key-value map".to_string(),
            ));
        };
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            form = form.text(key.clone(), text);
        }
    }

    for file in files {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        form = form.part(file.name, part);
    }

    Ok(form)
}
