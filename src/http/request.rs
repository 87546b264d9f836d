//! Request descriptor types

use http::Method;
use serde_json::Value;

/// Content type of an outgoing gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `application/xml` — the gateway's primary wire format.
    Xml,
    /// `application/json` — used by GraphQL and newer endpoints.
    Json,
    /// `multipart/form-data` — file uploads.
    Multipart,
}

impl ContentType {
    /// The MIME type string for this content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Xml => "application/xml",
            ContentType::Json => "application/json",
            ContentType::Multipart => "multipart/form-data",
        }
    }
}

/// A file payload for a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name the file is attached under.
    pub name: String,
    /// File name reported to the gateway.
    pub file_name: String,
    /// MIME type of the file contents.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Create a file payload.
    pub fn new(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Descriptor for a single gateway request: verb, path, content type, and
/// optional parameters, files, and header overrides.
///
/// Built once per call and consumed by [`Http::execute`](super::Http::execute);
/// never reused.
#[derive(Debug)]
pub struct Request {
    pub(crate) verb: Method,
    pub(crate) path: String,
    pub(crate) content_type: ContentType,
    pub(crate) params: Option<Value>,
    pub(crate) files: Vec<FileUpload>,
    pub(crate) header_overrides: Vec<(String, String)>,
}

impl Request {
    /// Create a request descriptor with no body.
    pub fn new(verb: Method, path: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            verb,
            path: path.into(),
            content_type,
            params: None,
            files: Vec::new(),
            header_overrides: Vec::new(),
        }
    }

    /// Attach request parameters.
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Attach file payloads (multipart requests only).
    pub fn files(mut self, files: Vec<FileUpload>) -> Self {
        self.files = files;
        self
    }

    /// Override a header. Overrides are applied after the standard headers
    /// and take precedence.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_overrides.push((name.into(), value.into()));
        self
    }

    /// The HTTP verb.
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// The request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The content type.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }
}
