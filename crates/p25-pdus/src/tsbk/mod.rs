//! Trunking Signaling Blocks from the control channel.
//!
//! A 96-bit block: bit 0 last block, bit 1 protected, bits 2-7 opcode, bits 8-15 manufacturer id,
//! bits 16-79 payload, bits 80-95 CRC-16. The CRC is exposed raw and not checked here.

pub mod enums;
pub mod osp;

use core::fmt;

use p25_core::identifier::{Channel, Identifier};
use p25_core::{BitMessage, Direction, Nac, PduParseErr, ServiceOptions, Timestamp, expect_len};

use crate::common::MessageBody;
use crate::common::broadcast::{NetworkStatusBroadcast, SecondaryControlChannelBroadcast, SiteStatusBroadcast};
use crate::common::telephone::TelephoneInterconnectAnswerRequest;
use crate::common::vendor::Vendor;
use enums::tsbk_opcode::OspTsbkOpcode;
use osp::control::{GroupAffiliationResponse, UnitRegistrationResponse};
use osp::telephone::TelephoneInterconnectVoiceChannelGrant;
use osp::voice::{
    GroupVoiceChannelGrant, GroupVoiceChannelGrantUpdate, GroupVoiceChannelGrantUpdateExplicit, UnitToUnitAnswerRequest,
    UnitToUnitVoiceChannelGrant,
};

pub const TSBK_LEN: usize = 96;

/// Offset of the field block that link control words carry 8 bits earlier
const SHARED_FIELDS_OFFSET: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsbkBody {
    /// Payload is protected, no fields can be decoded
    Encrypted,
    GroupVoiceChannelGrant(GroupVoiceChannelGrant),
    GroupVoiceChannelGrantUpdate(GroupVoiceChannelGrantUpdate),
    GroupVoiceChannelGrantUpdateExplicit(GroupVoiceChannelGrantUpdateExplicit),
    UnitToUnitVoiceChannelGrant(UnitToUnitVoiceChannelGrant),
    UnitToUnitAnswerRequest(UnitToUnitAnswerRequest),
    UnitToUnitVoiceChannelGrantUpdate(UnitToUnitVoiceChannelGrant),
    TelephoneInterconnectVoiceChannelGrant(TelephoneInterconnectVoiceChannelGrant),
    TelephoneInterconnectVoiceChannelGrantUpdate(TelephoneInterconnectVoiceChannelGrant),
    TelephoneInterconnectAnswerRequest(TelephoneInterconnectAnswerRequest),
    GroupAffiliationResponse(GroupAffiliationResponse),
    UnitRegistrationResponse(UnitRegistrationResponse),
    SecondaryControlChannelBroadcast(SecondaryControlChannelBroadcast),
    RfssStatusBroadcast(SiteStatusBroadcast),
    NetworkStatusBroadcast(NetworkStatusBroadcast),
    AdjacentStatusBroadcast(SiteStatusBroadcast),
    /// Opcode/vendor/direction combination without a decoder
    Unknown,
}

impl TsbkBody {
    fn as_message_body(&self) -> Option<&dyn MessageBody> {
        match self {
            TsbkBody::Encrypted | TsbkBody::Unknown => None,
            TsbkBody::GroupVoiceChannelGrant(b) => Some(b),
            TsbkBody::GroupVoiceChannelGrantUpdate(b) => Some(b),
            TsbkBody::GroupVoiceChannelGrantUpdateExplicit(b) => Some(b),
            TsbkBody::UnitToUnitVoiceChannelGrant(b) => Some(b),
            TsbkBody::UnitToUnitAnswerRequest(b) => Some(b),
            TsbkBody::UnitToUnitVoiceChannelGrantUpdate(b) => Some(b),
            TsbkBody::TelephoneInterconnectVoiceChannelGrant(b) => Some(b),
            TsbkBody::TelephoneInterconnectVoiceChannelGrantUpdate(b) => Some(b),
            TsbkBody::TelephoneInterconnectAnswerRequest(b) => Some(b),
            TsbkBody::GroupAffiliationResponse(b) => Some(b),
            TsbkBody::UnitRegistrationResponse(b) => Some(b),
            TsbkBody::SecondaryControlChannelBroadcast(b) => Some(b),
            TsbkBody::RfssStatusBroadcast(b) => Some(b),
            TsbkBody::NetworkStatusBroadcast(b) => Some(b),
            TsbkBody::AdjacentStatusBroadcast(b) => Some(b),
        }
    }
}

/// Decoded Trunking Signaling Block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tsbk {
    pub nac: Nac,
    pub timestamp: Timestamp,
    /// 96 bits, after error correction
    pub message: BitMessage,
    pub direction: Direction,
    /// 1 bit, last block of a multi-TSBK transmission
    pub last_block: bool,
    /// 1 bit
    pub encrypted: bool,
    /// 6 bits
    pub opcode: u8,
    /// 8 bits
    pub vendor: Vendor,
    /// 16 bits, raw
    pub crc: u16,
    pub bit_errors: usize,
    pub body: TsbkBody,
}

impl Tsbk {
    /// Decode a 96-bit TSBK received in the given direction
    pub fn from_bitmsg(message: BitMessage, direction: Direction, nac: Nac, timestamp: Timestamp) -> Result<Self, PduParseErr> {
        expect_len!(message, TSBK_LEN)?;

        let last_block = message.get_bit(0);
        let encrypted = message.get_bit(1);
        let opcode = message.get_int_range(2, 7) as u8;
        let vendor = Vendor::from_raw(message.get_int_range(8, 15) as u8);
        let crc = message.get_int_range(80, 95) as u16;

        let body = if encrypted {
            TsbkBody::Encrypted
        } else {
            Self::parse_body(&message, nac, direction, vendor, opcode)
        };

        Ok(Tsbk {
            nac,
            timestamp,
            message,
            direction,
            last_block,
            encrypted,
            opcode,
            vendor,
            crc,
            bit_errors: 0,
            body,
        })
    }

    pub fn with_bit_errors(mut self, bit_errors: usize) -> Self {
        self.bit_errors = bit_errors;
        self
    }

    fn parse_body(msg: &BitMessage, nac: Nac, direction: Direction, vendor: Vendor, opcode: u8) -> TsbkBody {
        if vendor != Vendor::Standard || direction != Direction::Osp {
            tracing::debug!(nac, "no tsbk decoders for {} {} opcode 0x{:02X}", direction, vendor, opcode);
            return TsbkBody::Unknown;
        }

        match OspTsbkOpcode::try_from(opcode as u64) {
            Ok(OspTsbkOpcode::GroupVoiceChannelGrant) => TsbkBody::GroupVoiceChannelGrant(GroupVoiceChannelGrant::from_bitmsg(msg)),
            Ok(OspTsbkOpcode::GroupVoiceChannelGrantUpdate) => {
                TsbkBody::GroupVoiceChannelGrantUpdate(GroupVoiceChannelGrantUpdate::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::GroupVoiceChannelGrantUpdateExplicit) => {
                TsbkBody::GroupVoiceChannelGrantUpdateExplicit(GroupVoiceChannelGrantUpdateExplicit::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::UnitToUnitVoiceChannelGrant) => {
                TsbkBody::UnitToUnitVoiceChannelGrant(UnitToUnitVoiceChannelGrant::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::UnitToUnitAnswerRequest) => TsbkBody::UnitToUnitAnswerRequest(UnitToUnitAnswerRequest::from_bitmsg(msg)),
            Ok(OspTsbkOpcode::UnitToUnitVoiceChannelGrantUpdate) => {
                TsbkBody::UnitToUnitVoiceChannelGrantUpdate(UnitToUnitVoiceChannelGrant::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrant) => {
                TsbkBody::TelephoneInterconnectVoiceChannelGrant(TelephoneInterconnectVoiceChannelGrant::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrantUpdate) => {
                TsbkBody::TelephoneInterconnectVoiceChannelGrantUpdate(TelephoneInterconnectVoiceChannelGrant::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::TelephoneInterconnectAnswerRequest) => TsbkBody::TelephoneInterconnectAnswerRequest(
                TelephoneInterconnectAnswerRequest::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET),
            ),
            Ok(OspTsbkOpcode::GroupAffiliationResponse) => {
                TsbkBody::GroupAffiliationResponse(GroupAffiliationResponse::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::UnitRegistrationResponse) => {
                TsbkBody::UnitRegistrationResponse(UnitRegistrationResponse::from_bitmsg(msg))
            }
            Ok(OspTsbkOpcode::SecondaryControlChannelBroadcast) => TsbkBody::SecondaryControlChannelBroadcast(
                SecondaryControlChannelBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET),
            ),
            Ok(OspTsbkOpcode::RfssStatusBroadcast) => {
                TsbkBody::RfssStatusBroadcast(SiteStatusBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
            }
            Ok(OspTsbkOpcode::NetworkStatusBroadcast) => {
                TsbkBody::NetworkStatusBroadcast(NetworkStatusBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
            }
            Ok(OspTsbkOpcode::AdjacentStatusBroadcast) => {
                TsbkBody::AdjacentStatusBroadcast(SiteStatusBroadcast::from_bitmsg_at(msg, SHARED_FIELDS_OFFSET))
            }
            Err(_) => {
                tracing::debug!(nac, "unknown osp tsbk opcode 0x{:02X}", opcode);
                TsbkBody::Unknown
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
            TsbkBody::GroupVoiceChannelGrant(b) => Some(b.service_options),
            TsbkBody::GroupVoiceChannelGrantUpdateExplicit(b) => Some(b.service_options),
            TsbkBody::UnitToUnitAnswerRequest(b) => Some(b.service_options),
            TsbkBody::TelephoneInterconnectVoiceChannelGrant(b)
            | TsbkBody::TelephoneInterconnectVoiceChannelGrantUpdate(b) => Some(b.service_options),
            _ => None,
        }
    }

    /// TSBKs arrive error corrected; the CRC is left to the caller
    pub fn is_valid(&self) -> bool {
        true
    }
}

impl fmt::Display for Tsbk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.body {
            TsbkBody::Encrypted => write!(f, "ENCRYPTED TSBK MSG:{}", self.message.to_hex_string()),
            TsbkBody::GroupVoiceChannelGrant(b) => write!(f, "{}", b),
            TsbkBody::GroupVoiceChannelGrantUpdate(b) => write!(f, "{}", b),
            TsbkBody::GroupVoiceChannelGrantUpdateExplicit(b) => write!(f, "{}", b),
            TsbkBody::UnitToUnitVoiceChannelGrant(b) => b.fmt_with(f, OspTsbkOpcode::UnitToUnitVoiceChannelGrant),
            TsbkBody::UnitToUnitAnswerRequest(b) => write!(f, "{}", b),
            TsbkBody::UnitToUnitVoiceChannelGrantUpdate(b) => {
                b.fmt_with(f, OspTsbkOpcode::UnitToUnitVoiceChannelGrantUpdate)
            }
            TsbkBody::TelephoneInterconnectVoiceChannelGrant(b) => {
                b.fmt_with(f, OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrant)
            }
            TsbkBody::TelephoneInterconnectVoiceChannelGrantUpdate(b) => {
                b.fmt_with(f, OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrantUpdate)
            }
            TsbkBody::TelephoneInterconnectAnswerRequest(b) => {
                b.fmt_summary(f, OspTsbkOpcode::TelephoneInterconnectAnswerRequest)
            }
            TsbkBody::GroupAffiliationResponse(b) => write!(f, "{}", b),
            TsbkBody::UnitRegistrationResponse(b) => write!(f, "{}", b),
            TsbkBody::SecondaryControlChannelBroadcast(b) => {
                b.fmt_summary(f, OspTsbkOpcode::SecondaryControlChannelBroadcast)
            }
            TsbkBody::RfssStatusBroadcast(b) => b.fmt_summary(f, OspTsbkOpcode::RfssStatusBroadcast),
            TsbkBody::NetworkStatusBroadcast(b) => b.fmt_summary(f, OspTsbkOpcode::NetworkStatusBroadcast),
            TsbkBody::AdjacentStatusBroadcast(b) => b.fmt_summary(f, OspTsbkOpcode::AdjacentStatusBroadcast),
            TsbkBody::Unknown => write!(
                f,
                "UNKNOWN {} {} TSBK OPCODE:{} MSG:{}",
                self.direction,
                self.vendor,
                self.opcode,
                self.message.to_hex_string()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use p25_core::debug;
    use p25_core::identifier::{Lra, Role, SystemId, Talkgroup, Wacn};

    use super::*;

    fn decode(hex: &str) -> Tsbk {
        Tsbk::from_bitmsg(BitMessage::from_hex(hex).unwrap(), Direction::Osp, 0x293, 0).unwrap()
    }

    #[test]
    fn test_rejects_wrong_length() {
        let res = Tsbk::from_bitmsg(BitMessage::new(72), Direction::Osp, 0, 0);
        assert_eq!(res, Err(PduParseErr::InconsistentLength { expected: 96, found: 72 }));
    }

    #[test]
    fn test_header_fields() {
        debug::setup_logging_verbose();
        let tsbk = decode("8000841064012300ABCD5A5A");
        assert!(tsbk.last_block);
        assert!(!tsbk.encrypted);
        assert_eq!(tsbk.opcode, 0x00);
        assert_eq!(tsbk.vendor, Vendor::Standard);
        assert_eq!(tsbk.crc, 0x5A5A);
        assert_eq!(tsbk.service_options().map(|so| so.priority()), Some(4));
        assert_eq!(
            tsbk.identifiers(),
            vec![
                Identifier::Talkgroup(Talkgroup::group(0x123, Role::To)),
                Identifier::Talkgroup(Talkgroup::individual(0xABCD, Role::From)),
            ]
        );
        assert_eq!(
            tsbk.to_string(),
            "GROUP VOICE CHANNEL GRANT FROM:43981 TO:291 CHAN:1-100 EMERGENCY PRI:4"
        );
    }

    #[test]
    fn test_network_status_broadcast_at_tsbk_offset() {
        debug::setup_logging_verbose();
        // LRA 0x01, WACN 0xBEE00, system 0x3A1, ch 0x1064, svc 0x70
        let tsbk = decode("BB0001BEE003A11064700000");
        let TsbkBody::NetworkStatusBroadcast(ref body) = tsbk.body else {
            panic!("expected network status, got {:?}", tsbk.body);
        };
        assert_eq!(body.lra, Lra(1));
        assert_eq!(body.wacn, Wacn(0xBEE00));
        assert_eq!(body.system, SystemId(0x3A1));
        assert_eq!(tsbk.channels(), vec![Channel::implicit(1, 100)]);
    }

    #[test]
    fn test_rfss_status_active_network_bit() {
        // LRA 0x02, flags 0b0001, system 0x3A1, RFSS 1, site 2, ch 0x1064, svc 0x70
        let tsbk = decode("BA000213A101021064700000");
        let TsbkBody::RfssStatusBroadcast(ref body) = tsbk.body else {
            panic!("expected rfss status, got {:?}", tsbk.body);
        };
        assert!(body.flags.is_active_network());
        assert_eq!(body.system, SystemId(0x3A1));
    }

    #[test]
    fn test_telephone_answer_request() {
        // digits 5,5,5,1,2,1,2 then filler, target 0x000456
        let tsbk = decode("8A005551212FFF0004560000");
        assert_eq!(tsbk.identifiers().len(), 2);
        assert_eq!(
            tsbk.to_string(),
            "TELEPHONE INTERCONNECT ANSWER REQUEST TO:1110 TELEPHONE:5551212"
        );
    }

    #[test]
    fn test_vendor_and_inbound_are_unknown() {
        debug::setup_logging_verbose();
        let tsbk = decode("8090841064012300ABCD0000");
        assert_eq!(tsbk.vendor, Vendor::Motorola);
        assert_eq!(tsbk.body, TsbkBody::Unknown);
        assert!(tsbk.identifiers().is_empty());

        let tsbk = Tsbk::from_bitmsg(
            BitMessage::from_hex("8000841064012300ABCD0000").unwrap(),
            Direction::Isp,
            0,
            0,
        )
        .unwrap();
        assert_eq!(tsbk.body, TsbkBody::Unknown);
        assert_eq!(
            tsbk.to_string(),
            "UNKNOWN ISP STANDARD TSBK OPCODE:0 MSG:8000841064012300ABCD0000"
        );
    }

    #[test]
    fn test_protected_tsbk_has_no_identifiers() {
        debug::setup_logging_verbose();
        // group voice grant layout with the protected bit set
        let tsbk = decode("C000841064012300ABCD0000");
        assert!(tsbk.encrypted);
        assert_eq!(tsbk.opcode, 0x00);
        assert_eq!(tsbk.body, TsbkBody::Encrypted);
        assert!(tsbk.identifiers().is_empty());
        assert!(tsbk.channels().is_empty());
        assert_eq!(tsbk.service_options(), None);
        assert_eq!(tsbk.to_string(), "ENCRYPTED TSBK MSG:C000841064012300ABCD0000");
    }

    #[test]
    fn test_unknown_standard_opcode() {
        let tsbk = decode("BF0000000000000000000000");
        assert_eq!(tsbk.body, TsbkBody::Unknown);
        assert!(tsbk.channels().is_empty());
    }
}
