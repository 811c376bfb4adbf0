//! Infrastructure layer - concrete implementations of the application ports

pub mod config;
pub mod openapi;
pub mod output;
