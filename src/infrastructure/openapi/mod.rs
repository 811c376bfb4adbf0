//! OpenAPI document loading implementations

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;

pub use composite_loader::CompositeDocumentLoader;
pub use file_loader::FileDocumentLoader;
pub use http_loader::{DEFAULT_TIMEOUT, HttpDocumentLoader};
