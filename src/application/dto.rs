//! Data Transfer Objects for application layer

use std::path::{Path, PathBuf};

/// Base name of the output file when no explicit output path is given
pub const DEFAULT_OUTPUT_STEM: &str = "combined-config";

/// Request to prefix the tags of every API in a combine-config
#[derive(Debug, Clone)]
pub struct PrefixConfigRequest {
    pub config_path: PathBuf,
    pub output_path: Option<PathBuf>,
}

impl PrefixConfigRequest {
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        Self {
            config_path: config_path.into(),
            output_path: None,
        }
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output_path: P) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Where the combined config goes: the explicit output path, or
    /// `combined-config<ext>` in the working directory, keeping the input's
    /// extension even though the content is always JSON.
    pub fn resolve_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => default_output_path(&self.config_path),
        }
    }
}

pub fn default_output_path(config_path: &Path) -> PathBuf {
    match config_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => PathBuf::from(format!("{DEFAULT_OUTPUT_STEM}.{ext}")),
        None => PathBuf::from(DEFAULT_OUTPUT_STEM),
    }
}

/// Response from a completed run
#[derive(Debug, Clone)]
pub struct PrefixConfigResponse {
    pub output_path: PathBuf,
    pub apis_processed: usize,
}
