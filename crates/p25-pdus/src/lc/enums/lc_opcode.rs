/// Link control opcode, standard format (TIA-102.AABF)
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LcOpcode {
    GroupVoiceChannelUser = 0x00,
    GroupVoiceChannelUpdate = 0x02,
    UnitToUnitVoiceChannelUser = 0x03,
    GroupVoiceChannelUpdateExplicit = 0x04,
    UnitToUnitAnswerRequest = 0x05,
    TelephoneInterconnectVoiceChannelUser = 0x06,
    TelephoneInterconnectAnswerRequest = 0x07,
    CallTermination = 0x0F,
    CallAlert = 0x16,
    SecondaryControlChannelBroadcast = 0x21,
    AdjacentSiteStatusBroadcast = 0x22,
    RfssStatusBroadcast = 0x23,
    NetworkStatusBroadcast = 0x24,
}

impl std::convert::TryFrom<u64> for LcOpcode {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x00 => Ok(LcOpcode::GroupVoiceChannelUser),
            0x02 => Ok(LcOpcode::GroupVoiceChannelUpdate),
            0x03 => Ok(LcOpcode::UnitToUnitVoiceChannelUser),
            0x04 => Ok(LcOpcode::GroupVoiceChannelUpdateExplicit),
            0x05 => Ok(LcOpcode::UnitToUnitAnswerRequest),
            0x06 => Ok(LcOpcode::TelephoneInterconnectVoiceChannelUser),
            0x07 => Ok(LcOpcode::TelephoneInterconnectAnswerRequest),
            0x0F => Ok(LcOpcode::CallTermination),
            0x16 => Ok(LcOpcode::CallAlert),
            0x21 => Ok(LcOpcode::SecondaryControlChannelBroadcast),
            0x22 => Ok(LcOpcode::AdjacentSiteStatusBroadcast),
            0x23 => Ok(LcOpcode::RfssStatusBroadcast),
            0x24 => Ok(LcOpcode::NetworkStatusBroadcast),
            _ => Err(()),
        }
    }
}

impl LcOpcode {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }
}

impl From<LcOpcode> for u64 {
    fn from(e: LcOpcode) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for LcOpcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LcOpcode::GroupVoiceChannelUser => write!(f, "GROUP VOICE CHANNEL USER"),
            LcOpcode::GroupVoiceChannelUpdate => write!(f, "GROUP VOICE CHANNEL UPDATE"),
            LcOpcode::UnitToUnitVoiceChannelUser => write!(f, "UNIT-TO-UNIT VOICE CHANNEL USER"),
            LcOpcode::GroupVoiceChannelUpdateExplicit => write!(f, "GROUP VOICE CHANNEL UPDATE EXPLICIT"),
            LcOpcode::UnitToUnitAnswerRequest => write!(f, "UNIT-TO-UNIT ANSWER REQUEST"),
            LcOpcode::TelephoneInterconnectVoiceChannelUser => write!(f, "TELEPHONE INTERCONNECT VOICE CHANNEL USER"),
            LcOpcode::TelephoneInterconnectAnswerRequest => write!(f, "TELEPHONE INTERCONNECT ANSWER REQUEST"),
            LcOpcode::CallTermination => write!(f, "CALL TERMINATION"),
            LcOpcode::CallAlert => write!(f, "CALL ALERT"),
            LcOpcode::SecondaryControlChannelBroadcast => write!(f, "SECONDARY CONTROL CHANNEL BROADCAST"),
            LcOpcode::AdjacentSiteStatusBroadcast => write!(f, "ADJACENT SITE STATUS BROADCAST"),
            LcOpcode::RfssStatusBroadcast => write!(f, "RFSS STATUS BROADCAST"),
            LcOpcode::NetworkStatusBroadcast => write!(f, "NETWORK STATUS BROADCAST"),
        }
    }
}

/// Link control opcode, Motorola vendor format
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MotorolaLcOpcode {
    PatchGroupVoiceChannelUser = 0x00,
    PatchGroupVoiceChannelUpdate = 0x01,
    PatchGroupAdd = 0x03,
    PatchGroupDelete = 0x04,
    TalkComplete = 0x0F,
}

impl std::convert::TryFrom<u64> for MotorolaLcOpcode {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x00 => Ok(MotorolaLcOpcode::PatchGroupVoiceChannelUser),
            0x01 => Ok(MotorolaLcOpcode::PatchGroupVoiceChannelUpdate),
            0x03 => Ok(MotorolaLcOpcode::PatchGroupAdd),
            0x04 => Ok(MotorolaLcOpcode::PatchGroupDelete),
            0x0F => Ok(MotorolaLcOpcode::TalkComplete),
            _ => Err(()),
        }
    }
}

impl MotorolaLcOpcode {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        self as u64
    }
}

impl From<MotorolaLcOpcode> for u64 {
    fn from(e: MotorolaLcOpcode) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for MotorolaLcOpcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MotorolaLcOpcode::PatchGroupVoiceChannelUser => write!(f, "MOTOROLA PATCH GROUP VOICE CHANNEL USER"),
            MotorolaLcOpcode::PatchGroupVoiceChannelUpdate => write!(f, "MOTOROLA PATCH GROUP VOICE CHANNEL UPDATE"),
            MotorolaLcOpcode::PatchGroupAdd => write!(f, "MOTOROLA ADD PATCH GROUP"),
            MotorolaLcOpcode::PatchGroupDelete => write!(f, "MOTOROLA DELETE PATCH GROUP"),
            MotorolaLcOpcode::TalkComplete => write!(f, "MOTOROLA TALK COMPLETE"),
        }
    }
}
