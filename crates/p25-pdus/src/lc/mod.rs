//! Link Control Words carried in voice superframes and terminators.
//!
//! A 72-bit word: bit 0 protected (encrypted), bit 1 vendor format, bits 2-7 opcode,
//! bits 8-15 manufacturer id when the vendor format bit is set.

pub mod enums;
pub mod motorola;
pub mod standard;

use core::fmt;

use p25_core::identifier::{Channel, Identifier};
use p25_core::{BitMessage, Nac, PduParseErr, ServiceOptions, Timestamp, expect_len};

use crate::common::MessageBody;
use crate::common::broadcast::{NetworkStatusBroadcast, SecondaryControlChannelBroadcast, SiteStatusBroadcast};
use crate::common::telephone::TelephoneInterconnectAnswerRequest;
use crate::common::vendor::Vendor;
use enums::lc_opcode::{LcOpcode, MotorolaLcOpcode};
use motorola::{PatchGroupChange, PatchGroupVoiceChannelUpdate, PatchGroupVoiceChannelUser, TalkComplete};
use standard::telephone::TelephoneInterconnectVoiceChannelUser;
use standard::voice::{
    CallAlert, CallTermination, GroupVoiceChannelUpdate, GroupVoiceChannelUpdateExplicit, GroupVoiceChannelUser,
    UnitToUnitVoice,
};

pub const LC_LEN: usize = 72;

/// Offset of the field block whose layout TSBKs repeat 8 bits later
const SHARED_FIELDS_OFFSET: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LcBody {
    /// Payload is encrypted, no fields can be decoded
    Encrypted,
    GroupVoiceChannelUser(GroupVoiceChannelUser),
    GroupVoiceChannelUpdate(GroupVoiceChannelUpdate),
    UnitToUnitVoiceChannelUser(UnitToUnitVoice),
    GroupVoiceChannelUpdateExplicit(GroupVoiceChannelUpdateExplicit),
    UnitToUnitAnswerRequest(UnitToUnitVoice),
    TelephoneInterconnectVoiceChannelUser(TelephoneInterconnectVoiceChannelUser),
    TelephoneInterconnectAnswerRequest(TelephoneInterconnectAnswerRequest),
    CallTermination(CallTermination),
    CallAlert(CallAlert),
    SecondaryControlChannelBroadcast(SecondaryControlChannelBroadcast),
    AdjacentSiteStatusBroadcast(SiteStatusBroadcast),
    RfssStatusBroadcast(SiteStatusBroadcast),
    NetworkStatusBroadcast(NetworkStatusBroadcast),
    MotorolaPatchGroupVoiceChannelUser(PatchGroupVoiceChannelUser),
    MotorolaPatchGroupVoiceChannelUpdate(PatchGroupVoiceChannelUpdate),
    MotorolaPatchGroupAdd(PatchGroupChange),
    MotorolaPatchGroupDelete(PatchGroupChange),
    MotorolaTalkComplete(TalkComplete),
    /// Opcode/vendor combination without a decoder
    Unknown,
}

impl LcBody {
    fn as_message_body(&self) -> Option<&dyn MessageBody> {
        match self {
            LcBody::Encrypted | LcBody::Unknown => None,
            LcBody::GroupVoiceChannelUser(b) => Some(b),
            LcBody::GroupVoiceChannelUpdate(b) => Some(b),
            LcBody::UnitToUnitVoiceChannelUser(b) => Some(b),
            LcBody::GroupVoiceChannelUpdateExplicit(b) => Some(b),
            LcBody::UnitToUnitAnswerRequest(b) => Some(b),
            LcBody::TelephoneInterconnectVoiceChannelUser(b) => Some(b),
            LcBody::TelephoneInterconnectAnswerRequest(b) => Some(b),
            LcBody::CallTermination(b) => Some(b),
            LcBody::CallAlert(b) => Some(b),
            LcBody::SecondaryControlChannelBroadcast(b) => Some(b),
            LcBody::AdjacentSiteStatusBroadcast(b) => Some(b),
            LcBody::RfssStatusBroadcast(b) => Some(b),
            LcBody::NetworkStatusBroadcast(b) => Some(b),
            LcBody::MotorolaPatchGroupVoiceChannelUser(b) => Some(b),
            LcBody::MotorolaPatchGroupVoiceChannelUpdate(b) => Some(b),
            LcBody::MotorolaPatchGroupAdd(b) => Some(b),
            LcBody::MotorolaPatchGroupDelete(b) => Some(b),
            LcBody::MotorolaTalkComplete(b) => Some(b),
        }
    }
}

/// Decoded Link Control Word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkControlWord {
    pub nac: Nac,
    pub timestamp: Timestamp,
    /// 72 bits, after error correction
    pub message: BitMessage,
    /// 1 bit, payload encrypted
    pub encrypted: bool,
    /// 6 bits
    pub opcode: u8,
    /// 8 bits, Standard when the vendor format bit is clear
    pub vendor: Vendor,
    /// Corrected bit errors reported by the decoder feeding this word
    pub bit_errors: usize,
    pub body: LcBody,
}

impl LinkControlWord {
    /// Decode a 72-bit link control word
    pub fn from_bitmsg(message: BitMessage, nac: Nac, timestamp: Timestamp) -> Result<Self, PduParseErr> {
        expect_len!(message, LC_LEN)?;

        let encrypted = message.get_bit(0);
        let vendor_format = message.get_bit(1);
        let opcode = message.get_int_range(2, 7) as u8;
        let vendor = if vendor_format {
            Vendor::from_raw(message.get_int_range(8, 15) as u8)
        } else {
            Vendor::Standard
        };

        let body = if encrypted {
            LcBody::Encrypted
        } else {
            Self::parse_body(&message, nac, vendor, opcode)
        };

        Ok(LinkControlWord {
            nac,
            timestamp,
            message,
            encrypted,
            opcode,
            vendor,
            bit_errors: 0,
            body,
        })
    }

    pub fn with_bit_errors(mut self, bit_errors: usize) -> Self {
        self.bit_errors = bit_errors;
        self
    }

    fn parse_body(msg: &BitMessage, nac: Nac, vendor: Vendor, opcode: u8) -> LcBody {
        match vendor {
            Vendor::Standard => match LcOpcode::try_from(opcode as u64) {
                Ok(LcOpcode::GroupVoiceChannelUser) => LcBody::GroupVoiceChannelUser(GroupVoiceChannelUser::from_bitmsg(msg)),
                Ok(LcOpcode::GroupVoiceChannelUpdate) => LcBody::GroupVoiceChannelUpdate(GroupVoiceChannelUpdate::from_bitmsg(msg)),
                Ok(LcOpcode::UnitToUnitVoiceChannelUser) => LcBody::UnitToUnitVoiceChannelUser(UnitToUnitVoice::from_bitmsg(msg)),
                Ok(LcOpcode::GroupVoiceChannelUpdateExplicit) => {
                    LcBody::GroupVoiceChannelUpdateExplicit(GroupVoiceChannelUpdateExplicit::from_bitmsg(msg))
                }
                Ok(LcOpcode::UnitToUnitAnswerRequest) => LcBody::UnitToUnitAnswerRequest(UnitToUnitVoice::from_bitmsg(msg)),
                Ok(LcOpcode::TelephoneInterconnectVoiceChannelUser) => {
                    LcBody::TelephoneInterconnectVoiceChannelUser(TelephoneInterconnectVoiceChannelUser::from_bitmsg(msg))
                }
                Ok(LcOpcode::TelephoneInterconnectAnswerRequest) => {
                    LcBody::TelephoneInterconnectAnswerRequest(TelephoneInterconnectAnswerRequest::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
                }
                Ok(LcOpcode::CallTermination) => LcBody::CallTermination(CallTermination::from_bitmsg(msg)),
                Ok(LcOpcode::CallAlert) => LcBody::CallAlert(CallAlert::from_bitmsg(msg)),
                Ok(LcOpcode::SecondaryControlChannelBroadcast) => LcBody::SecondaryControlChannelBroadcast(
                    SecondaryControlChannelBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET),
                ),
                Ok(LcOpcode::AdjacentSiteStatusBroadcast) => {
                    LcBody::AdjacentSiteStatusBroadcast(SiteStatusBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
                }
                Ok(LcOpcode::RfssStatusBroadcast) => {
                    LcBody::RfssStatusBroadcast(SiteStatusBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
                }
                Ok(LcOpcode::NetworkStatusBroadcast) => {
                    LcBody::NetworkStatusBroadcast(NetworkStatusBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
                }
                Err(_) => {
                    tracing::debug!(nac, "unknown standard lc opcode 0x{:02X}", opcode);
                    LcBody::Unknown
                }
            },
            Vendor::Motorola => match MotorolaLcOpcode::try_from(opcode as u64) {
                Ok(MotorolaLcOpcode::PatchGroupVoiceChannelUser) => {
                    LcBody::MotorolaPatchGroupVoiceChannelUser(PatchGroupVoiceChannelUser::from_bitmsg(msg))
                }
                Ok(MotorolaLcOpcode::PatchGroupVoiceChannelUpdate) => {
                    LcBody::MotorolaPatchGroupVoiceChannelUpdate(PatchGroupVoiceChannelUpdate::from_bitmsg(msg))
                }
                Ok(MotorolaLcOpcode::PatchGroupAdd) => LcBody::MotorolaPatchGroupAdd(PatchGroupChange::from_bitmsg(msg)),
                Ok(MotorolaLcOpcode::PatchGroupDelete) => LcBody::MotorolaPatchGroupDelete(PatchGroupChange::from_bitmsg(msg)),
                Ok(MotorolaLcOpcode::TalkComplete) => LcBody::MotorolaTalkComplete(TalkComplete::from_bitmsg(msg)),
                Err(_) => {
                    tracing::debug!(nac, "unknown motorola lc opcode 0x{:02X}", opcode);
                    LcBody::Unknown
                }
            },
            other => {
                tracing::debug!(nac, "no lc decoders for {} opcode 0x{:02X}", other, opcode);
                LcBody::Unknown
            }
        }
    }

    pub fn identifiers(&self) -> Vec<Identifier> {
        self.body.as_message_body().map(|b| b.identifiers()).unwrap_or_default()
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.body.as_message_body().map(|b| b.channels()).unwrap_or_default()
    }

    /// Service options, for variants that carry them
    pub fn service_options(&self) -> Option<ServiceOptions> {
        match &self.body {
            LcBody::GroupVoiceChannelUser(b) => Some(b.service_options),
            LcBody::UnitToUnitVoiceChannelUser(b) | LcBody::UnitToUnitAnswerRequest(b) => Some(b.service_options),
            LcBody::GroupVoiceChannelUpdateExplicit(b) => Some(b.service_options),
            LcBody::TelephoneInterconnectVoiceChannelUser(b) => Some(b.service_options),
            LcBody::MotorolaPatchGroupVoiceChannelUser(b) => Some(b.service_options),
            _ => None,
        }
    }

    /// Link control words are decoded after error correction and have no completeness notion
    pub fn is_valid(&self) -> bool {
        true
    }
}

impl fmt::Display for LinkControlWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.body {
            LcBody::Encrypted => write!(f, "ENCRYPTED LCW MSG:{}", self.message.to_hex_string()),
            LcBody::GroupVoiceChannelUser(b) => write!(f, "{}", b),
            LcBody::GroupVoiceChannelUpdate(b) => write!(f, "{}", b),
            LcBody::UnitToUnitVoiceChannelUser(b) => b.fmt_with(f, LcOpcode::UnitToUnitVoiceChannelUser),
            LcBody::GroupVoiceChannelUpdateExplicit(b) => write!(f, "{}", b),
            LcBody::UnitToUnitAnswerRequest(b) => b.fmt_with(f, LcOpcode::UnitToUnitAnswerRequest),
            LcBody::TelephoneInterconnectVoiceChannelUser(b) => write!(f, "{}", b),
            LcBody::TelephoneInterconnectAnswerRequest(b) => b.fmt_summary(f, LcOpcode::TelephoneInterconnectAnswerRequest),
            LcBody::CallTermination(b) => write!(f, "{}", b),
            LcBody::CallAlert(b) => write!(f, "{}", b),
            LcBody::SecondaryControlChannelBroadcast(b) => b.fmt_summary(f, LcOpcode::SecondaryControlChannelBroadcast),
            LcBody::AdjacentSiteStatusBroadcast(b) => b.fmt_summary(f, LcOpcode::AdjacentSiteStatusBroadcast),
            LcBody::RfssStatusBroadcast(b) => b.fmt_summary(f, LcOpcode::RfssStatusBroadcast),
            LcBody::NetworkStatusBroadcast(b) => b.fmt_summary(f, LcOpcode::NetworkStatusBroadcast),
            LcBody::MotorolaPatchGroupVoiceChannelUser(b) => write!(f, "{}", b),
            LcBody::MotorolaPatchGroupVoiceChannelUpdate(b) => write!(f, "{}", b),
            LcBody::MotorolaPatchGroupAdd(b) => b.fmt_summary(f, MotorolaLcOpcode::PatchGroupAdd, &self.message),
            LcBody::MotorolaPatchGroupDelete(b) => b.fmt_summary(f, MotorolaLcOpcode::PatchGroupDelete, &self.message),
            LcBody::MotorolaTalkComplete(b) => write!(f, "{}", b),
            LcBody::Unknown => match self.vendor {
                Vendor::Standard => write!(
                    f,
                    "UNKNOWN LCW OPCODE:{} MSG:{}",
                    self.opcode,
                    self.message.to_hex_string()
                ),
                vendor => write!(
                    f,
                    "UNKNOWN {} LCW OPCODE:{} MSG:{}",
                    vendor,
                    self.opcode,
                    self.message.to_hex_string()
                ),
            },
        }
    }
}
