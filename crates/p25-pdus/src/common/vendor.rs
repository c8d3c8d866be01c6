/// Manufacturer id (MFID)
/// Bits: 8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Standard,
    Motorola,
    Harris,
    Other(u8),
}

impl Vendor {
    pub const MFID_STANDARD: u8 = 0x00;
    pub const MFID_MOTOROLA: u8 = 0x90;
    pub const MFID_HARRIS: u8 = 0xA4;

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            Self::MFID_STANDARD => Vendor::Standard,
            Self::MFID_MOTOROLA => Vendor::Motorola,
            Self::MFID_HARRIS => Vendor::Harris,
            other => Vendor::Other(other),
        }
    }

    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        match self {
            Vendor::Standard => Self::MFID_STANDARD,
            Vendor::Motorola => Self::MFID_MOTOROLA,
            Vendor::Harris => Self::MFID_HARRIS,
            Vendor::Other(raw) => raw,
        }
    }
}

impl From<Vendor> for u64 {
    fn from(e: Vendor) -> Self {
        e.into_raw() as u64
    }
}

impl core::fmt::Display for Vendor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Vendor::Standard => write!(f, "STANDARD"),
            Vendor::Motorola => write!(f, "MOTOROLA"),
            Vendor::Harris => write!(f, "HARRIS"),
            Vendor::Other(raw) => write!(f, "VENDOR:{:02X}", raw),
        }
    }
}
