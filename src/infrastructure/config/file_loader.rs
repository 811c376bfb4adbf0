//! Loads a combine-config from disk, choosing JSON or YAML by extension

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::application::ConfigLoader;
use crate::core::{CombineConfig, CombineError, DocumentFormat, Result};

pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigLoader for FileConfigLoader {
    async fn load(&self, path: &Path) -> Result<CombineConfig> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| CombineError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;

        let format = DocumentFormat::from_path(path);
        debug!(path = %path.display(), %format, "Parsing combine config");
        format
            .parse(&content)
            .map_err(|source| CombineError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
    }
}
