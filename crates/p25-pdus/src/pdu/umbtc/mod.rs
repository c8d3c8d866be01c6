//! Unconfirmed Multi-Block Trunking Control messages: unconfirmed data packets addressed to the
//! trunking control SAP. The opcode lives in block 0 rather than in the header.

pub mod isp;

use core::fmt;

use p25_core::identifier::{Channel, Identifier};
use p25_core::{Direction, Nac, PduParseErr, Timestamp, bits, expect_pdu_type};

use crate::common::MessageBody;
use crate::pdu::enums::pdu_format::PduFormat;
use crate::pdu::enums::umbtc_opcode::IspUmbtcOpcode;
use crate::pdu::header::SAP_TRUNKING_CONTROL;
use crate::pdu::packet_sequence::PacketSequence;
use crate::pdu::{fmt_sequence_stub, fmt_unknown};
use isp::TelephoneInterconnectRequestExplicitDialing;

const FAMILY: &str = "UMBTC";

const BLOCK_0_OPCODE: [usize; 6] = bits::<6>(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UmbtcBody {
    TelephoneInterconnectRequestExplicitDialing(TelephoneInterconnectRequestExplicitDialing),
    Unknown,
}

impl UmbtcBody {
    fn as_message_body(&self) -> Option<&dyn MessageBody> {
        match self {
            UmbtcBody::Unknown => None,
            UmbtcBody::TelephoneInterconnectRequestExplicitDialing(b) => Some(b),
        }
    }
}

/// Decoded UMBTC message together with the sequence it was decoded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmbtcMessage {
    pub nac: Nac,
    pub timestamp: Timestamp,
    /// 6 bits from block 0, None until block 0 arrives
    pub opcode: Option<u8>,
    pub sequence: PacketSequence,
    pub body: UmbtcBody,
}

impl UmbtcMessage {
    pub fn from_sequence(sequence: PacketSequence, nac: Nac, timestamp: Timestamp) -> Result<Self, PduParseErr> {
        let header = sequence.header();
        expect_pdu_type!(header.format.into_raw(), PduFormat::UnconfirmedData)?;
        if header.sap != SAP_TRUNKING_CONTROL {
            return Err(PduParseErr::InvalidValue {
                field: "sap",
                value: header.sap as u64,
            });
        }

        let opcode = sequence
            .unconfirmed_message(0)
            .map(|b| b.get_int(&BLOCK_0_OPCODE) as u8);
        let body = Self::parse_body(&sequence, nac, header.direction, opcode);

        Ok(UmbtcMessage {
            nac,
            timestamp,
            opcode,
            sequence,
            body,
        })
    }

    fn parse_body(seq: &PacketSequence, nac: Nac, direction: Direction, opcode: Option<u8>) -> UmbtcBody {
        let Some(opcode) = opcode else {
            return UmbtcBody::Unknown;
        };
        if direction != Direction::Isp {
            tracing::debug!(nac, "no outbound umbtc decoders, opcode 0x{:02X}", opcode);
            return UmbtcBody::Unknown;
        }

        match IspUmbtcOpcode::try_from(opcode as u64) {
            Ok(IspUmbtcOpcode::TelephoneInterconnectRequestExplicitDialing) => {
                UmbtcBody::TelephoneInterconnectRequestExplicitDialing(
                    TelephoneInterconnectRequestExplicitDialing::from_sequence(seq),
                )
            }
            Err(_) => {
                tracing::debug!(nac, "unknown isp umbtc opcode 0x{:02X}", opcode);
                UmbtcBody::Unknown
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

impl fmt::Display for UmbtcMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.body {
            UmbtcBody::TelephoneInterconnectRequestExplicitDialing(b) => {
                fmt_sequence_stub(
                    f,
                    self.nac,
                    FAMILY,
                    IspUmbtcOpcode::TelephoneInterconnectRequestExplicitDialing,
                    &self.sequence,
                )?;
                write!(f, " {}", b)
            }
            UmbtcBody::Unknown => {
                match self.opcode {
                    Some(opcode) => {
                        fmt_sequence_stub(f, self.nac, FAMILY, format_args!("UNKNOWN OPCODE:{}", opcode), &self.sequence)?
                    }
                    None => fmt_sequence_stub(f, self.nac, FAMILY, "UNKNOWN", &self.sequence)?,
                }
                fmt_unknown(f, &self.sequence)
            }
        }
    }
}
