//! Alternate Multi-Block Trunking Control messages.
//!
//! The header carries the opcode and the first fields; one to three unconfirmed data blocks
//! carry the rest. Fields of blocks that never arrived decode as absent.

pub mod osp;

use core::fmt;

use p25_core::identifier::{Channel, Identifier};
use p25_core::{Direction, Nac, PduParseErr, Timestamp, expect_pdu_type};

use crate::common::MessageBody;
use crate::pdu::enums::ambtc_opcode::AmbtcOpcode;
use crate::pdu::enums::pdu_format::PduFormat;
use crate::pdu::packet_sequence::PacketSequence;
use crate::pdu::{fmt_sequence_stub, fmt_unknown};
use osp::broadcast::NetworkStatusBroadcast;
use osp::control::{GroupAffiliationResponse, UnitRegistrationResponse};
use osp::telephone::TelephoneInterconnectChannelGrant;
use osp::voice::{GroupVoiceChannelGrant, UnitToUnitVoiceChannelGrant};

const FAMILY: &str = "AMBTC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbtcBody {
    GroupVoiceChannelGrant(GroupVoiceChannelGrant),
    UnitToUnitVoiceChannelGrant(UnitToUnitVoiceChannelGrant),
    TelephoneInterconnectChannelGrant(TelephoneInterconnectChannelGrant),
    TelephoneInterconnectChannelGrantUpdate(TelephoneInterconnectChannelGrant),
    GroupAffiliationResponse(GroupAffiliationResponse),
    UnitRegistrationResponse(UnitRegistrationResponse),
    NetworkStatusBroadcast(NetworkStatusBroadcast),
    Unknown,
}

impl AmbtcBody {
    fn as_message_body(&self) -> Option<&dyn MessageBody> {
        match self {
            AmbtcBody::Unknown => None,
            AmbtcBody::GroupVoiceChannelGrant(b) => Some(b),
            AmbtcBody::UnitToUnitVoiceChannelGrant(b) => Some(b),
            AmbtcBody::TelephoneInterconnectChannelGrant(b) => Some(b),
            AmbtcBody::TelephoneInterconnectChannelGrantUpdate(b) => Some(b),
            AmbtcBody::GroupAffiliationResponse(b) => Some(b),
            AmbtcBody::UnitRegistrationResponse(b) => Some(b),
            AmbtcBody::NetworkStatusBroadcast(b) => Some(b),
        }
    }
}

/// Decoded AMBTC message together with the sequence it was decoded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbtcMessage {
    pub nac: Nac,
    pub timestamp: Timestamp,
    /// 6 bits, from the header
    pub opcode: u8,
    pub sequence: PacketSequence,
    pub body: AmbtcBody,
}

impl AmbtcMessage {
    /// Decode a complete or partial AMBTC sequence
    pub fn from_sequence(sequence: PacketSequence, nac: Nac, timestamp: Timestamp) -> Result<Self, PduParseErr> {
        let header = sequence.header();
        expect_pdu_type!(header.format.into_raw(), PduFormat::AlternateMultiBlockTrunking)?;
        let opcode = header.ambtc_opcode.ok_or(PduParseErr::BufferEnded { field: Some("ambtc_opcode") })?;

        let body = if header.direction == Direction::Osp {
            Self::parse_body(&sequence, nac, opcode)
        } else {
            tracing::debug!(nac, "no inbound ambtc decoders, opcode 0x{:02X}", opcode);
            AmbtcBody::Unknown
        };

        Ok(AmbtcMessage {
            nac,
            timestamp,
            opcode,
            sequence,
            body,
        })
    }

    fn parse_body(seq: &PacketSequence, nac: Nac, opcode: u8) -> AmbtcBody {
        match AmbtcOpcode::try_from(opcode as u64) {
            Ok(AmbtcOpcode::GroupVoiceChannelGrant) => {
                AmbtcBody::GroupVoiceChannelGrant(GroupVoiceChannelGrant::from_sequence(seq))
            }
            Ok(AmbtcOpcode::UnitToUnitVoiceChannelGrant) => {
                AmbtcBody::UnitToUnitVoiceChannelGrant(UnitToUnitVoiceChannelGrant::from_sequence(seq))
            }
            Ok(AmbtcOpcode::TelephoneInterconnectChannelGrant) => {
                AmbtcBody::TelephoneInterconnectChannelGrant(TelephoneInterconnectChannelGrant::from_sequence(seq))
            }
            Ok(AmbtcOpcode::TelephoneInterconnectChannelGrantUpdate) => {
                AmbtcBody::TelephoneInterconnectChannelGrantUpdate(TelephoneInterconnectChannelGrant::from_sequence(seq))
            }
            Ok(AmbtcOpcode::GroupAffiliationResponse) => {
                AmbtcBody::GroupAffiliationResponse(GroupAffiliationResponse::from_sequence(seq))
            }
            Ok(AmbtcOpcode::UnitRegistrationResponse) => {
                AmbtcBody::UnitRegistrationResponse(UnitRegistrationResponse::from_sequence(seq))
            }
            Ok(AmbtcOpcode::NetworkStatusBroadcast) => {
                AmbtcBody::NetworkStatusBroadcast(NetworkStatusBroadcast::from_sequence(seq))
            }
            Err(_) => {
                tracing::debug!(nac, "unknown ambtc opcode 0x{:02X}", opcode);
                AmbtcBody::Unknown
            }
        }
    }

    pub fn identifiers(&self) -> Vec<Identifier> {
        self.body.as_message_body().map(|b| b.identifiers()).unwrap_or_default()
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.body.as_message_body().map(|b| b.channels()).unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.sequence.is_complete()
    }

    /// Incomplete sequences still decode, but are not valid
    pub fn is_valid(&self) -> bool {
        self.is_complete()
    }

    pub fn bit_errors_count(&self) -> usize {
        self.sequence.bit_errors_count()
    }

    pub fn bits_processed_count(&self) -> usize {
        self.sequence.bits_processed_count()
    }
}

impl fmt::Display for AmbtcMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = AmbtcOpcode::try_from(self.opcode as u64).ok();
        match (&self.body, label) {
            (AmbtcBody::Unknown, _) | (_, None) => {
                fmt_sequence_stub(f, self.nac, FAMILY, format_args!("UNKNOWN OPCODE:{}", self.opcode), &self.sequence)?;
                fmt_unknown(f, &self.sequence)
            }
            (body, Some(label)) => {
                fmt_sequence_stub(f, self.nac, FAMILY, label, &self.sequence)?;
                match body {
                    AmbtcBody::GroupVoiceChannelGrant(b) => write!(f, " {}", b),
                    AmbtcBody::UnitToUnitVoiceChannelGrant(b) => write!(f, " {}", b),
                    AmbtcBody::TelephoneInterconnectChannelGrant(b) => write!(f, " {}", b),
                    AmbtcBody::TelephoneInterconnectChannelGrantUpdate(b) => write!(f, " {}", b),
                    AmbtcBody::GroupAffiliationResponse(b) => write!(f, " {}", b),
                    AmbtcBody::UnitRegistrationResponse(b) => write!(f, " {}", b),
                    AmbtcBody::NetworkStatusBroadcast(b) => write!(f, " {}", b),
                    AmbtcBody::Unknown => Ok(()),
                }
            }
        }
    }
}
