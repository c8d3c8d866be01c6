/// Response to an affiliation or registration request
/// Bits: 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResponseValue {
    Accept = 0,
    Fail = 1,
    Deny = 2,
    Refused = 3,
}

impl std::convert::TryFrom<u64> for ResponseValue {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(ResponseValue::Accept),
            1 => Ok(ResponseValue::Fail),
            2 => Ok(ResponseValue::Deny),
            3 => Ok(ResponseValue::Refused),
            _ => Err(()),
        }
    }
}

impl ResponseValue {
    /// Decode a 2-bit field; higher bits are ignored
    pub fn from_bits(raw: u32) -> Self {
        match raw & 0x3 {
            0 => ResponseValue::Accept,
            1 => ResponseValue::Fail,
            2 => ResponseValue::Deny,
            _ => ResponseValue::Refused,
        }
    }

    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }
}

impl From<ResponseValue> for u64 {
    fn from(e: ResponseValue) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ResponseValue::Accept => write!(f, "ACCEPT"),
            ResponseValue::Fail => write!(f, "FAIL"),
            ResponseValue::Deny => write!(f, "DENY"),
            ResponseValue::Refused => write!(f, "REFUSED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_masks_to_two_bits() {
        assert_eq!(ResponseValue::from_bits(0), ResponseValue::Accept);
        assert_eq!(ResponseValue::from_bits(2), ResponseValue::Deny);
        assert_eq!(ResponseValue::from_bits(0b111), ResponseValue::Refused);
        assert_eq!(ResponseValue::try_from(4), Err(()));
    }
}
