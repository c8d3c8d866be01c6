/// Packet data unit format field of a data header
/// Bits: 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PduFormat {
    Response = 0x03,
    UnconfirmedData = 0x15,
    ConfirmedData = 0x16,
    AlternateMultiBlockTrunking = 0x17,
}

impl std::convert::TryFrom<u64> for PduFormat {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x03 => Ok(PduFormat::Response),
            0x15 => Ok(PduFormat::UnconfirmedData),
            0x16 => Ok(PduFormat::ConfirmedData),
            0x17 => Ok(PduFormat::AlternateMultiBlockTrunking),
            _ => Err(()),
        }
    }
}

impl PduFormat {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }

    /// Data blocks of this format carry a serial number and CRC-9
    pub fn is_confirmed(self) -> bool {
        self == PduFormat::ConfirmedData
    }
}

impl From<PduFormat> for u64 {
    fn from(e: PduFormat) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for PduFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PduFormat::Response => write!(f, "RESPONSE"),
            PduFormat::UnconfirmedData => write!(f, "UNCONFIRMED"),
            PduFormat::ConfirmedData => write!(f, "CONFIRMED"),
            PduFormat::AlternateMultiBlockTrunking => write!(f, "AMBTC"),
        }
    }
}
