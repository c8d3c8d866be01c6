//! Core utilities for the P25 message decoder
//!
//! This crate provides fundamental types used across the decoder crates:
//! - BitMessage for bit-level field extraction
//! - Identifier model (talkgroups, patch groups, network ids, channels, telephone numbers)
//! - Service options and system service bitfields
//! - Parse errors, common macros and logging setup

pub mod bit_message;
pub mod debug;
pub mod direction;
pub mod identifier;
pub mod pdu_parse_error;
pub mod service_options;

// Re-export commonly used items
pub use bit_message::{BitMessage, bits};
pub use direction::Direction;
pub use identifier::{Channel, Identifier, Role, Talkgroup};
pub use pdu_parse_error::PduParseErr;
pub use service_options::{ServiceOptions, SiteFlags, SystemServices};

/// Network access code, 12 bits
pub type Nac = u16;

/// Reception time, milliseconds since the Unix epoch
pub type Timestamp = i64;
