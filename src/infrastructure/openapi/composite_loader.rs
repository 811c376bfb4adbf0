//! Composite loader that picks HTTP or file loading per source

use async_trait::async_trait;

use crate::application::DocumentLoader;
use crate::core::{OpenApiDoc, Result};

/// Dispatches `http(s)://` sources to one loader and everything else to another
pub struct CompositeDocumentLoader {
    http: Box<dyn DocumentLoader>,
    file: Box<dyn DocumentLoader>,
}

impl CompositeDocumentLoader {
    pub fn new(http: Box<dyn DocumentLoader>, file: Box<dyn DocumentLoader>) -> Self {
        Self { http, file }
    }
}

#[async_trait]
impl DocumentLoader for CompositeDocumentLoader {
    async fn load(&self, source: &str) -> Result<OpenApiDoc> {
        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!("CompositeDocumentLoader: Using HTTP loader for {source}");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeDocumentLoader: Using file loader for {source}");
            self.file.load(source).await
        }
    }
}
