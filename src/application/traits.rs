//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::core::{CombineConfig, OpenApiDoc, Result};

/// Loads the combine-config file the run starts from
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn load(&self, path: &Path) -> Result<CombineConfig>;
}

/// Loads the OpenAPI document behind an API entry's `url`
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<OpenApiDoc>;
}

/// Writes the combined config to its destination
#[async_trait]
pub trait OutputService: Send + Sync {
    async fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
