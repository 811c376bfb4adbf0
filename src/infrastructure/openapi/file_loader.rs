//! File-based OpenAPI document loader

use async_trait::async_trait;
use tokio::fs;

use crate::application::DocumentLoader;
use crate::core::{CombineError, DocumentFormat, OpenApiDoc, Result};

/// Loads OpenAPI documents from local files, for combine-configs that point
/// at specs on disk instead of URLs
pub struct FileDocumentLoader;

impl FileDocumentLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileDocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentLoader for FileDocumentLoader {
    async fn load(&self, source: &str) -> Result<OpenApiDoc> {
        let path = source.strip_prefix("file://").unwrap_or(source);
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CombineError::fetch(source, e))?;

        DocumentFormat::from_source(source)
            .parse(&content)
            .map_err(|e| CombineError::DocParse {
                url: source.to_string(),
                source: e,
            })
    }
}
