//! Use case for prefixing the tags of a combine-config

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{
    ConfigLoader, DocumentLoader, OutputService, PrefixConfigRequest, PrefixConfigResponse,
};
use crate::core::{CombineError, PrefixOutcome, Result, TagPrefixer};

/// Loads a combine-config, prefixes the tags of each API with the API's
/// title, and writes the updated config once every API has been handled.
pub struct PrefixConfigUseCase {
    config_loader: Arc<dyn ConfigLoader>,
    document_loader: Arc<dyn DocumentLoader>,
    output_service: Arc<dyn OutputService>,
}

impl PrefixConfigUseCase {
    pub fn new(
        config_loader: Arc<dyn ConfigLoader>,
        document_loader: Arc<dyn DocumentLoader>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            config_loader,
            document_loader,
            output_service,
        }
    }

    pub async fn execute(&self, request: PrefixConfigRequest) -> Result<PrefixConfigResponse> {
        println!("Using {}", request.config_path.display());

        // 1. Load config
        let mut config = self.config_loader.load(&request.config_path).await?;
        info!(apis = config.apis.len(), "Loaded combine config");

        // 2. Fetch and prefix each API in declaration order
        for api in config.apis.iter_mut() {
            println!("Working on API {}", api.url);
            let doc = self.document_loader.load(&api.url).await?;

            let prefixer = TagPrefixer::for_document(&doc);
            println!("Found API name: {}", prefixer.prefix());

            match prefixer.apply(&doc, api) {
                PrefixOutcome::Renamed(prefix_map) => {
                    for tag in prefix_map.keys() {
                        println!("Found tag: {tag}");
                    }
                    debug!(url = %api.url, tags = prefix_map.len(), "Added rename entries");
                }
                PrefixOutcome::DefaultAdded(tag) => {
                    println!("No tags found, adding tag: {tag}");
                    debug!(url = %api.url, %tag, "Added default tag");
                }
            }
            println!();
        }

        // 3. Write once, after every API succeeded
        let contents = serde_json::to_string_pretty(&config).map_err(CombineError::Serialize)?;
        let output_path = request.resolve_output_path();
        self.output_service.write(&output_path, &contents).await?;
        info!(path = %output_path.display(), "Wrote combined config");

        Ok(PrefixConfigResponse {
            output_path,
            apis_processed: config.apis.len(),
        })
    }
}
