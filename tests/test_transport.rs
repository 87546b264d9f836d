//! Transport behavior tests
//!
//! Covers URL resolution, request body encoding, and success-path response
//! decoding against a mock gateway.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_get_decodes_xml_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sub_merchant_accounts/sub_123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(common::sub_merchant_account_xml(), "application/xml"),
        )
        .mount(&server)
        .await;

    let response = common::http(&server.uri())
        .get("/sub_merchant_accounts/sub_123")
        .await
        .unwrap();

    assert_eq!(
        response,
        json!({
            "sub_merchant_account": {
                "id": "sub_123",
                "status": "pending",
                "business": {"legal_name": "Acme & Sons"},
            }
        })
    );
}

#[tokio::test]
async fn test_absolute_path_is_used_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sub_merchant_accounts/sub_123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(common::sub_merchant_account_xml(), "application/xml"),
        )
        .mount(&server)
        .await;

    // Already prefixed with the configured base URL: no double-prefixing.
    let absolute = format!("{}/sub_merchant_accounts/sub_123", server.uri());
    let response = common::http(&server.uri()).get(&absolute).await.unwrap();
    assert_eq!(response["sub_merchant_account"]["id"], "sub_123");
}

#[tokio::test]
async fn test_blank_body_yields_empty_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blank"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("   \n  ", "application/xml"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/sub_merchant_accounts/sub_123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let http = common::http(&server.uri());

    assert_eq!(http.get("/blank").await.unwrap(), json!({}));
    assert_eq!(
        http.delete("/sub_merchant_accounts/sub_123").await.unwrap(),
        json!({})
    );
}

#[tokio::test]
async fn test_422_is_success_and_decodes_validation_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sub_merchant_accounts"))
        .respond_with(ResponseTemplate::new(422).set_body_raw(
            "<api-error-response>\
               <message>Legal name is required</message>\
             </api-error-response>",
            "application/xml",
        ))
        .mount(&server)
        .await;

    let response = common::http(&server.uri())
        .post("/sub_merchant_accounts", Some(json!({"sub_merchant_account": {}})))
        .await
        .unwrap();

    assert_eq!(
        response["api_error_response"]["message"],
        "Legal name is required"
    );
}

#[tokio::test]
async fn test_post_sends_xml_encoded_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sub_merchant_accounts"))
        .and(body_string_contains("<sub-merchant-account>"))
        .and(body_string_contains("<legal-name>Acme &amp; Sons</legal-name>"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_raw(common::sub_merchant_account_xml(), "application/xml"),
        )
        .mount(&server)
        .await;

    let params = json!({
        "sub_merchant_account": {"business": {"legal_name": "Acme & Sons"}}
    });
    let response = common::http(&server.uri())
        .post("/sub_merchant_accounts", Some(params))
        .await
        .unwrap();

    assert_eq!(response["sub_merchant_account"]["status"], "pending");
}

#[tokio::test]
async fn test_put_sends_xml_encoded_params() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/sub_merchant_accounts/sub_123"))
        .and(body_string_contains("<registered-as>llc</registered-as>"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(common::sub_merchant_account_xml(), "application/xml"),
        )
        .mount(&server)
        .await;

    let params = json!({"sub_merchant_account": {"registered_as": "llc"}});
    let response = common::http(&server.uri())
        .put("/sub_merchant_accounts/sub_123", Some(params))
        .await
        .unwrap();

    assert_eq!(response["sub_merchant_account"]["id"], "sub_123");
}

#[tokio::test]
async fn test_post_json_serializes_body_and_decodes_json_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string(r#"{"query":"query { ping }"}"#))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":{"ping":"pong"}}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let response = common::http(&server.uri())
        .post_json("/graphql", Some(json!({"query": "query { ping }"})))
        .await
        .unwrap();

    assert_eq!(response, json!({"data": {"ping": "pong"}}));
}

#[tokio::test]
async fn test_multipart_upload_sends_fields_and_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document_uploads"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            "<document-upload><id>doc_1</id></document-upload>",
            "application/xml",
        ))
        .mount(&server)
        .await;

    let file = paygate::FileUpload::new(
        "document_upload[file]",
        "evidence.pdf",
        "application/pdf",
        b"PDFBYTES".to_vec(),
    );
    let response = common::http(&server.uri())
        .post_multipart(
            "/document_uploads",
            vec![file],
            Some(json!({"document_upload[kind]": "evidence_document"})),
        )
        .await
        .unwrap();

    assert_eq!(response["document_upload"]["id"], "doc_1");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("PDFBYTES"));
    assert!(body.contains("document_upload[kind]"));
    assert!(body.contains("evidence_document"));
    assert!(body.contains("evidence.pdf"));
}

#[tokio::test]
async fn test_standard_headers_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/headers"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    common::http(&server.uri()).get("/headers").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;

    assert_eq!(headers.get("accept").unwrap(), "application/xml");
    assert_eq!(headers.get("accept-encoding").unwrap(), "gzip");
    assert_eq!(headers.get("content-type").unwrap(), "application/xml");
    assert_eq!(headers.get("x-apiversion").unwrap(), "6");
    assert!(
        headers
            .get("user-agent")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("paygate-rust/")
    );
}
