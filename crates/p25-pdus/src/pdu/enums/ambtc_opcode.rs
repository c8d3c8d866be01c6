/// Alternate multi-block trunking control opcode, outbound
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AmbtcOpcode {
    GroupVoiceChannelGrant = 0x00,
    UnitToUnitVoiceChannelGrant = 0x04,
    TelephoneInterconnectChannelGrant = 0x08,
    TelephoneInterconnectChannelGrantUpdate = 0x09,
    GroupAffiliationResponse = 0x28,
    UnitRegistrationResponse = 0x2C,
    NetworkStatusBroadcast = 0x3B,
}

impl std::convert::TryFrom<u64> for AmbtcOpcode {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x00 => Ok(AmbtcOpcode::GroupVoiceChannelGrant),
            0x04 => Ok(AmbtcOpcode::UnitToUnitVoiceChannelGrant),
            0x08 => Ok(AmbtcOpcode::TelephoneInterconnectChannelGrant),
            0x09 => Ok(AmbtcOpcode::TelephoneInterconnectChannelGrantUpdate),
            0x28 => Ok(AmbtcOpcode::GroupAffiliationResponse),
            0x2C => Ok(AmbtcOpcode::UnitRegistrationResponse),
            0x3B => Ok(AmbtcOpcode::NetworkStatusBroadcast),
            _ => Err(()),
        }
    }
}

impl AmbtcOpcode {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }
}

impl From<AmbtcOpcode> for u64 {
    fn from(e: AmbtcOpcode) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for AmbtcOpcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AmbtcOpcode::GroupVoiceChannelGrant => write!(f, "GROUP VOICE CHANNEL GRANT"),
            AmbtcOpcode::UnitToUnitVoiceChannelGrant => write!(f, "UNIT-TO-UNIT VOICE CHANNEL GRANT"),
            AmbtcOpcode::TelephoneInterconnectChannelGrant => write!(f, "TELEPHONE INTERCONNECT CHANNEL GRANT"),
            AmbtcOpcode::TelephoneInterconnectChannelGrantUpdate => {
                write!(f, "TELEPHONE INTERCONNECT CHANNEL GRANT UPDATE")
            }
            AmbtcOpcode::GroupAffiliationResponse => write!(f, "GROUP AFFILIATION RESPONSE"),
            AmbtcOpcode::UnitRegistrationResponse => write!(f, "UNIT REGISTRATION RESPONSE"),
            AmbtcOpcode::NetworkStatusBroadcast => write!(f, "NETWORK STATUS BROADCAST"),
        }
    }
}
