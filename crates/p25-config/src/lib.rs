//! P25 decoder configuration
//!
//! - TOML configuration file parsing
//! - Decoder and identifier display settings

pub mod decoder_config;
pub mod toml_config;

pub use decoder_config::*;
pub use toml_config::*;
