/// TSBK opcode, standard outbound (TIA-102.AABC)
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OspTsbkOpcode {
    GroupVoiceChannelGrant = 0x00,
    GroupVoiceChannelGrantUpdate = 0x02,
    GroupVoiceChannelGrantUpdateExplicit = 0x03,
    UnitToUnitVoiceChannelGrant = 0x04,
    UnitToUnitAnswerRequest = 0x05,
    UnitToUnitVoiceChannelGrantUpdate = 0x06,
    TelephoneInterconnectVoiceChannelGrant = 0x08,
    TelephoneInterconnectVoiceChannelGrantUpdate = 0x09,
    TelephoneInterconnectAnswerRequest = 0x0A,
    GroupAffiliationResponse = 0x28,
    UnitRegistrationResponse = 0x2C,
    SecondaryControlChannelBroadcast = 0x39,
    RfssStatusBroadcast = 0x3A,
    NetworkStatusBroadcast = 0x3B,
    AdjacentStatusBroadcast = 0x3C,
}

impl std::convert::TryFrom<u64> for OspTsbkOpcode {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x00 => Ok(OspTsbkOpcode::GroupVoiceChannelGrant),
            0x02 => Ok(OspTsbkOpcode::GroupVoiceChannelGrantUpdate),
            0x03 => Ok(OspTsbkOpcode::GroupVoiceChannelGrantUpdateExplicit),
            0x04 => Ok(OspTsbkOpcode::UnitToUnitVoiceChannelGrant),
            0x05 => Ok(OspTsbkOpcode::UnitToUnitAnswerRequest),
            0x06 => Ok(OspTsbkOpcode::UnitToUnitVoiceChannelGrantUpdate),
            0x08 => Ok(OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrant),
            0x09 => Ok(OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrantUpdate),
            0x0A => Ok(OspTsbkOpcode::TelephoneInterconnectAnswerRequest),
            0x28 => Ok(OspTsbkOpcode::GroupAffiliationResponse),
            0x2C => Ok(OspTsbkOpcode::UnitRegistrationResponse),
            0x39 => Ok(OspTsbkOpcode::SecondaryControlChannelBroadcast),
            0x3A => Ok(OspTsbkOpcode::RfssStatusBroadcast),
            0x3B => Ok(OspTsbkOpcode::NetworkStatusBroadcast),
            0x3C => Ok(OspTsbkOpcode::AdjacentStatusBroadcast),
            _ => Err(()),
        }
    }
}

impl OspTsbkOpcode {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }
}

impl From<OspTsbkOpcode> for u64 {
    fn from(e: OspTsbkOpcode) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for OspTsbkOpcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OspTsbkOpcode::GroupVoiceChannelGrant => write!(f, "GROUP VOICE CHANNEL GRANT"),
            OspTsbkOpcode::GroupVoiceChannelGrantUpdate => write!(f, "GROUP VOICE CHANNEL GRANT UPDATE"),
            OspTsbkOpcode::GroupVoiceChannelGrantUpdateExplicit => {
                write!(f, "GROUP VOICE CHANNEL GRANT UPDATE EXPLICIT")
            }
            OspTsbkOpcode::UnitToUnitVoiceChannelGrant => write!(f, "UNIT-TO-UNIT VOICE CHANNEL GRANT"),
            OspTsbkOpcode::UnitToUnitAnswerRequest => write!(f, "UNIT-TO-UNIT ANSWER REQUEST"),
            OspTsbkOpcode::UnitToUnitVoiceChannelGrantUpdate => write!(f, "UNIT-TO-UNIT VOICE CHANNEL GRANT UPDATE"),
            OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrant => {
                write!(f, "TELEPHONE INTERCONNECT VOICE CHANNEL GRANT")
            }
            OspTsbkOpcode::TelephoneInterconnectVoiceChannelGrantUpdate => {
                write!(f, "TELEPHONE INTERCONNECT VOICE CHANNEL GRANT UPDATE")
            }
            OspTsbkOpcode::TelephoneInterconnectAnswerRequest => write!(f, "TELEPHONE INTERCONNECT ANSWER REQUEST"),
            OspTsbkOpcode::GroupAffiliationResponse => write!(f, "GROUP AFFILIATION RESPONSE"),
            OspTsbkOpcode::UnitRegistrationResponse => write!(f, "UNIT REGISTRATION RESPONSE"),
            OspTsbkOpcode::SecondaryControlChannelBroadcast => write!(f, "SECONDARY CONTROL CHANNEL BROADCAST"),
            OspTsbkOpcode::RfssStatusBroadcast => write!(f, "RFSS STATUS BROADCAST"),
            OspTsbkOpcode::NetworkStatusBroadcast => write!(f, "NETWORK STATUS BROADCAST"),
            OspTsbkOpcode::AdjacentStatusBroadcast => write!(f, "ADJACENT STATUS BROADCAST"),
        }
    }
}
