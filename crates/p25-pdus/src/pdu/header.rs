use core::fmt;

use p25_core::{BitMessage, Direction, PduParseErr, expect_len};

use crate::common::vendor::Vendor;
use crate::pdu::enums::pdu_format::PduFormat;

pub const PDU_HEADER_LEN: usize = 96;

/// Service access point of trunking control messages
pub const SAP_TRUNKING_CONTROL: u8 = 0x3D;

/// Data header block opening every multi-block packet data unit.
/// Layout per TIA-102.BAAA: 12 octets, the last two a CRC-16 over the first ten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduHeader {
    /// 96 bits, after trellis decoding
    pub message: BitMessage,
    /// 1 bit
    pub confirmation_required: bool,
    /// 1 bit, outbound flag
    pub direction: Direction,
    /// 5 bits
    pub format: PduFormat,
    /// 6 bits
    pub sap: u8,
    /// 8 bits
    pub vendor: Vendor,
    /// 24 bits, logical link id of the addressed or sending unit
    pub address: u32,
    /// 1 bit, first transmission of the full message
    pub full_message: bool,
    /// 7 bits
    pub blocks_to_follow: u8,
    /// 5 bits, pad octets in the last data block. Zero for AMBTC
    pub pad_octets: u8,
    /// 6 bits, AMBTC only
    pub ambtc_opcode: Option<u8>,
    /// 6 bits, not present in AMBTC
    pub data_header_offset: u8,
    /// 16 bits, raw
    pub crc: u16,
    /// Corrected bit errors reported by the trellis decoder
    pub bit_errors: usize,
}

impl PduHeader {
    pub fn from_bitmsg(message: BitMessage) -> Result<Self, PduParseErr> {
        expect_len!(message, PDU_HEADER_LEN)?;

        let raw_format = message.get_int_range(3, 7) as u64;
        let format = PduFormat::try_from(raw_format).map_err(|_| PduParseErr::InvalidValue {
            field: "format",
            value: raw_format,
        })?;

        let is_ambtc = format == PduFormat::AlternateMultiBlockTrunking;
        let (pad_octets, ambtc_opcode, data_header_offset) = if is_ambtc {
            (0, Some(message.get_int_range(58, 63) as u8), 0)
        } else {
            (
                message.get_int_range(59, 63) as u8,
                None,
                message.get_int_range(74, 79) as u8,
            )
        };

        Ok(PduHeader {
            confirmation_required: message.get_bit(1),
            direction: Direction::from_outbound_flag(message.get_bit(2)),
            format,
            sap: message.get_int_range(10, 15) as u8,
            vendor: Vendor::from_raw(message.get_int_range(16, 23) as u8),
            address: message.get_int_range(24, 47),
            full_message: message.get_bit(48),
            blocks_to_follow: message.get_int_range(49, 55) as u8,
            pad_octets,
            ambtc_opcode,
            data_header_offset,
            crc: message.get_int_range(80, 95) as u16,
            bit_errors: 0,
            message,
        })
    }

    pub fn with_bit_errors(mut self, bit_errors: usize) -> Self {
        self.bit_errors = bit_errors;
        self
    }

    pub fn is_ambtc(&self) -> bool {
        self.format == PduFormat::AlternateMultiBlockTrunking
    }

    /// Unconfirmed data addressed to the trunking control service access point
    pub fn is_umbtc(&self) -> bool {
        self.format == PduFormat::UnconfirmedData && self.sap == SAP_TRUNKING_CONTROL
    }
}

impl fmt::Display for PduHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} SAP:{} {} LLID:{} BLOCKS TO FOLLOW:{}",
            self.direction, self.format, self.sap, self.vendor, self.address, self.blocks_to_follow
        )?;
        match self.ambtc_opcode {
            Some(opcode) => write!(f, " OPCODE:{}", opcode),
            None => write!(f, " PAD OCTETS:{} DATA HEADER OFFSET:{}", self.pad_octets, self.data_header_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambtc_header() {
        // outbound, format 0x17, SAP 0x3D, LLID 0x000123, FMF, 2 blocks, opcode 0x28
        let header = PduHeader::from_bitmsg(BitMessage::from_hex("377D00000123822800000000").unwrap()).unwrap();
        assert_eq!(header.direction, Direction::Osp);
        assert!(header.is_ambtc());
        assert!(!header.is_umbtc());
        assert_eq!(header.sap, SAP_TRUNKING_CONTROL);
        assert_eq!(header.address, 0x123);
        assert!(header.full_message);
        assert_eq!(header.blocks_to_follow, 2);
        assert_eq!(header.ambtc_opcode, Some(0x28));
        assert_eq!(header.pad_octets, 0);
    }

    #[test]
    fn test_umbtc_header() {
        // inbound, format 0x15, SAP 0x3D, LLID 0x00ABCD, 2 blocks, pad 3
        let header = PduHeader::from_bitmsg(BitMessage::from_hex("157D0000ABCD820300000000").unwrap()).unwrap();
        assert_eq!(header.direction, Direction::Isp);
        assert!(header.is_umbtc());
        assert_eq!(header.ambtc_opcode, None);
        assert_eq!(header.pad_octets, 3);
        assert_eq!(header.address, 0xABCD);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let res = PduHeader::from_bitmsg(BitMessage::from_hex("1F7D0000ABCD820300000000").unwrap());
        assert_eq!(res, Err(PduParseErr::InvalidValue { field: "format", value: 0x1F }));
    }
}
