/// Unconfirmed multi-block trunking control opcode, inbound
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IspUmbtcOpcode {
    TelephoneInterconnectRequestExplicitDialing = 0x08,
}

impl std::convert::TryFrom<u64> for IspUmbtcOpcode {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x08 => Ok(IspUmbtcOpcode::TelephoneInterconnectRequestExplicitDialing),
            _ => Err(()),
        }
    }
}

impl IspUmbtcOpcode {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }
}

impl From<IspUmbtcOpcode> for u64 {
    fn from(e: IspUmbtcOpcode) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for IspUmbtcOpcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IspUmbtcOpcode::TelephoneInterconnectRequestExplicitDialing => {
                write!(f, "TELEPHONE INTERCONNECT REQUEST EXPLICIT DIALING")
            }
        }
    }
}
