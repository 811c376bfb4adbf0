//! HTTP-based OpenAPI document loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::application::DocumentLoader;
use crate::core::{CombineError, DocumentFormat, OpenApiDoc, Result};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads OpenAPI documents from HTTP/HTTPS URLs
pub struct HttpDocumentLoader {
    client: Client,
}

impl HttpDocumentLoader {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentLoader for HttpDocumentLoader {
    async fn load(&self, source: &str) -> Result<OpenApiDoc> {
        // Only handle HTTP(S) URLs
        if !source.starts_with("http://") && !source.starts_with("https://") {
            return Err(CombineError::fetch(
                source,
                "HttpDocumentLoader only handles HTTP(S) URLs",
            ));
        }

        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| CombineError::fetch(source, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CombineError::fetch(source, format!("HTTP {status}")));
        }

        let content = response
            .text()
            .await
            .map_err(|e| CombineError::fetch(source, format!("Failed to read response body: {e}")))?;

        let format = DocumentFormat::from_source(source);
        debug!(%source, %format, "Parsing fetched document");
        format
            .parse(&content)
            .map_err(|e| CombineError::DocParse {
                url: source.to_string(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn loader() -> HttpDocumentLoader {
        HttpDocumentLoader::new(DEFAULT_TIMEOUT).unwrap()
    }

    #[tokio::test]
    async fn test_http_loader_json() {
        let mock_server = MockServer::start().await;

        let spec_json = r#"{
            "openapi": "3.0.0",
            "info": { "title": "Test API", "version": "1.0.0" },
            "paths": { "/items": { "get": { "tags": ["items"] } } }
        }"#;

        Mock::given(method("GET"))
            .and(path("/openapi.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(spec_json)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/openapi.json", mock_server.uri());
        let doc = loader().load(&url).await.unwrap();

        assert_eq!(doc.title(), "Test API");
        assert_eq!(doc.operation_tags().collect::<Vec<_>>(), vec!["items"]);
    }

    #[tokio::test]
    async fn test_http_loader_yaml() {
        let mock_server = MockServer::start().await;

        let spec_yaml = r#"openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths: {}"#;

        Mock::given(method("GET"))
            .and(path("/openapi.yaml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(spec_yaml))
            .mount(&mock_server)
            .await;

        let url = format!("{}/openapi.yaml", mock_server.uri());
        let doc = loader().load(&url).await.unwrap();

        assert_eq!(doc.title(), "Test API");
    }

    #[tokio::test]
    async fn test_http_loader_yaml_body_at_json_url_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/openapi"))
            .respond_with(ResponseTemplate::new(200).set_body_string("info:\n  title: T\n"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/openapi", mock_server.uri());
        let result = loader().load(&url).await;

        assert!(matches!(result, Err(CombineError::DocParse { .. })));
    }

    #[tokio::test]
    async fn test_http_loader_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/notfound"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/notfound", mock_server.uri());
        let result = loader().load(&url).await;

        match result {
            Err(CombineError::Fetch { reason, .. }) => assert!(reason.contains("HTTP 404")),
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_loader_non_http_url() {
        let result = loader().load("file:///path/to/spec.yaml").await;

        match result {
            Err(CombineError::Fetch { reason, .. }) => {
                assert!(reason.contains("only handles HTTP"))
            }
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }
}
