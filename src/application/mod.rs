//! Application layer - orchestrates the prefixing run over the ports

pub mod dto;
pub mod prefix_config;
pub mod traits;

pub use dto::*;
pub use prefix_config::PrefixConfigUseCase;
pub use traits::*;
