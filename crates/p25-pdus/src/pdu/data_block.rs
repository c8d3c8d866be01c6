use p25_core::{BitMessage, PduParseErr, expect_len};

/// Encoded bits behind every header or data block: 98 dibits through the 1/2 or 3/4 rate trellis
pub const BITS_PROCESSED_PER_BLOCK: usize = 196;

pub const UNCONFIRMED_BLOCK_LEN: usize = 96;
pub const CONFIRMED_BLOCK_LEN: usize = 144;

/// Data bits of a confirmed block, after the serial number and CRC-9
pub const CONFIRMED_DATA_LEN: usize = 128;

/// Data block of an unconfirmed or AMBTC packet, 12 octets of payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnconfirmedDataBlock {
    pub message: BitMessage,
    pub bit_errors: usize,
}

impl UnconfirmedDataBlock {
    pub fn from_bitmsg(message: BitMessage, bit_errors: usize) -> Result<Self, PduParseErr> {
        expect_len!(message, UNCONFIRMED_BLOCK_LEN)?;
        Ok(UnconfirmedDataBlock { message, bit_errors })
    }
}

/// Data block of a confirmed packet: 7-bit serial, 9-bit CRC, 16 octets of payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDataBlock {
    /// 7 bits
    pub serial_number: u8,
    /// 9 bits, raw
    pub crc: u16,
    /// 128 data bits
    pub message: BitMessage,
    pub bit_errors: usize,
}

impl ConfirmedDataBlock {
    pub fn from_bitmsg(raw: BitMessage, bit_errors: usize) -> Result<Self, PduParseErr> {
        expect_len!(raw, CONFIRMED_BLOCK_LEN)?;
        Ok(ConfirmedDataBlock {
            serial_number: raw.get_int_range(0, 6) as u8,
            crc: raw.get_int_range(7, 15) as u16,
            message: raw.get_sub_message(16, CONFIRMED_BLOCK_LEN),
            bit_errors,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataBlock {
    Confirmed(ConfirmedDataBlock),
    Unconfirmed(UnconfirmedDataBlock),
}

impl DataBlock {
    /// Payload bits, without serial number or CRC
    pub fn message(&self) -> &BitMessage {
        match self {
            DataBlock::Confirmed(b) => &b.message,
            DataBlock::Unconfirmed(b) => &b.message,
        }
    }

    pub fn bit_errors(&self) -> usize {
        match self {
            DataBlock::Confirmed(b) => b.bit_errors,
            DataBlock::Unconfirmed(b) => b.bit_errors,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, DataBlock::Confirmed(_))
    }
}

impl From<UnconfirmedDataBlock> for DataBlock {
    fn from(b: UnconfirmedDataBlock) -> Self {
        DataBlock::Unconfirmed(b)
    }
}

impl From<ConfirmedDataBlock> for DataBlock {
    fn from(b: ConfirmedDataBlock) -> Self {
        DataBlock::Confirmed(b)
    }
}
