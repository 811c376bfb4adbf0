//! Domain model and tag prefixing logic

pub mod config;
pub mod error;
pub mod format;
pub mod openapi;
pub mod prefixer;

pub use config::CombineConfig;
pub use error::{CombineError, Result};
pub use format::DocumentFormat;
pub use openapi::OpenApiDoc;
pub use prefixer::{PrefixOutcome, TagPrefixer};
