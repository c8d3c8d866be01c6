use std::fmt;

/// Raw channel reference: a 4-bit band (channel identifier) and a 12-bit channel number.
/// Frequencies are resolved elsewhere from the band plan broadcast by the site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Uplink uses the same band and number as the downlink
    Implicit { band: u8, number: u16 },
    /// Independently specified downlink and uplink
    Explicit {
        downlink_band: u8,
        downlink_number: u16,
        uplink_band: u8,
        uplink_number: u16,
    },
}

impl Channel {
    pub fn implicit(band: u8, number: u16) -> Self {
        Channel::Implicit { band, number }
    }

    pub fn explicit(downlink_band: u8, downlink_number: u16, uplink_band: u8, uplink_number: u16) -> Self {
        Channel::Explicit {
            downlink_band,
            downlink_number,
            uplink_band,
            uplink_number,
        }
    }

    /// Channel from a packed 16-bit field: band in the top nibble, number in the low 12 bits.
    pub fn from_packed(raw: u16) -> Self {
        Channel::implicit((raw >> 12) as u8, raw & 0x0FFF)
    }

    /// Downlink/uplink pair. Equal channel numbers collapse into an implicit channel.
    pub fn from_pairs(downlink_band: u8, downlink_number: u16, uplink_band: u8, uplink_number: u16) -> Self {
        if downlink_number == uplink_number {
            Channel::implicit(downlink_band, downlink_number)
        } else {
            Channel::explicit(downlink_band, downlink_number, uplink_band, uplink_number)
        }
    }

    /// Downlink/uplink pair from two packed 16-bit fields.
    pub fn from_packed_pair(downlink: u16, uplink: u16) -> Self {
        Self::from_pairs((downlink >> 12) as u8, downlink & 0x0FFF, (uplink >> 12) as u8, uplink & 0x0FFF)
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Channel::Explicit { .. })
    }

    pub fn downlink(&self) -> (u8, u16) {
        match *self {
            Channel::Implicit { band, number } => (band, number),
            Channel::Explicit { downlink_band, downlink_number, .. } => (downlink_band, downlink_number),
        }
    }

    pub fn uplink(&self) -> (u8, u16) {
        match *self {
            Channel::Implicit { band, number } => (band, number),
            Channel::Explicit { uplink_band, uplink_number, .. } => (uplink_band, uplink_number),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Implicit { band, number } => write!(f, "{}-{}", band, number),
            Channel::Explicit {
                downlink_band,
                downlink_number,
                uplink_band,
                uplink_number,
            } => write!(f, "{}-{}/{}-{}", downlink_band, downlink_number, uplink_band, uplink_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_numbers_are_implicit() {
        let ch = Channel::from_pairs(1, 100, 1, 100);
        assert_eq!(ch, Channel::implicit(1, 100));
        assert!(!ch.is_explicit());
        assert_eq!(ch.uplink(), (1, 100));
    }

    #[test]
    fn test_differing_numbers_are_explicit() {
        let ch = Channel::from_pairs(1, 100, 2, 150);
        assert!(ch.is_explicit());
        assert_eq!(ch.downlink(), (1, 100));
        assert_eq!(ch.uplink(), (2, 150));
        assert_eq!(ch.to_string(), "1-100/2-150");
    }

    #[test]
    fn test_packed() {
        let ch = Channel::from_packed(0x1064);
        assert_eq!(ch, Channel::implicit(1, 100));
        assert_eq!(ch.to_string(), "1-100");
        assert_eq!(Channel::from_packed_pair(0x1064, 0x2096), Channel::explicit(1, 100, 2, 150));
    }
}
