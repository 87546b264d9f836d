//! Document upload endpoint

use serde_json::{Value, json};

use crate::{error::Result, gateway::Gateway, http::FileUpload};

/// Evidence and verification document uploads.
#[derive(Clone)]
pub struct DocumentUploads {
    gateway: Gateway,
}

impl DocumentUploads {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Upload a document of the given kind (for example
    /// `"evidence_document"`).
    pub async fn upload(&self, kind: &str, file: FileUpload) -> Result<Value> {
        let params = json!({ "document_upload[kind]": kind });
        self.gateway
            .http()
            .post_multipart("/document_uploads", vec![file], Some(params))
            .await
    }
}
