//! Decoders for APCO-25 trunking signaling: link control words, trunking signaling blocks and
//! multi-block packet data units.

pub mod common;
pub mod lc;
pub mod message;
pub mod pdu;
pub mod tsbk;

pub use lc::LinkControlWord;
pub use message::P25Message;
pub use pdu::ambtc::AmbtcMessage;
pub use pdu::assembler::{AssemblerState, PacketSequenceAssembler};
pub use pdu::umbtc::UmbtcMessage;
pub use tsbk::Tsbk;
