//! Voice channel user/update link control words (TIA-102.AABF-D clause 7.3)

use core::fmt;

use p25_core::identifier::{Channel, Identifier, Role, Talkgroup};
use p25_core::{BitMessage, ServiceOptions, bits};

use crate::common::MessageBody;
use crate::lc::enums::lc_opcode::LcOpcode;

const SERVICE_OPTIONS: [usize; 8] = bits::<8>(16);
const GROUP_ADDRESS: [usize; 16] = bits::<16>(32);
const SOURCE_ADDRESS: [usize; 24] = bits::<24>(48);
const TARGET_ADDRESS: [usize; 24] = bits::<24>(24);

/// LC 0x00: talkgroup call in progress on the current channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelUser {
    /// 8 bits
    pub service_options: ServiceOptions,
    /// 16 bits, bit 32
    pub group_address: Talkgroup,
    /// 24 bits, bit 48
    pub source_address: Talkgroup,
}

impl GroupVoiceChannelUser {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        GroupVoiceChannelUser {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            group_address: Talkgroup::group(msg.get_int(&GROUP_ADDRESS), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }
}

impl MessageBody for GroupVoiceChannelUser {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.group_address.into(), self.source_address.into()]
    }
}

impl fmt::Display for GroupVoiceChannelUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{} {}",
            LcOpcode::GroupVoiceChannelUser,
            self.source_address,
            self.group_address,
            self.service_options
        )
    }
}

const UPDATE_CHANNEL_A: [usize; 16] = bits::<16>(8);
const UPDATE_GROUP_A: [usize; 16] = bits::<16>(24);
const UPDATE_CHANNEL_B: [usize; 16] = bits::<16>(40);
const UPDATE_GROUP_B: [usize; 16] = bits::<16>(56);

/// LC 0x02: announces up to two active talkgroup channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelUpdate {
    pub channel_a: Channel,
    pub group_a: Talkgroup,
    /// Present when group B is non-zero and differs from group A
    pub channel_b: Option<Channel>,
    pub group_b: Option<Talkgroup>,
}

impl GroupVoiceChannelUpdate {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        let raw_group_a = msg.get_int(&UPDATE_GROUP_A);
        let raw_group_b = msg.get_int(&UPDATE_GROUP_B);
        let has_b = raw_group_b != 0 && raw_group_b != raw_group_a;

        GroupVoiceChannelUpdate {
            channel_a: Channel::from_packed(msg.get_int(&UPDATE_CHANNEL_A) as u16),
            group_a: Talkgroup::group(raw_group_a, Role::To),
            channel_b: has_b.then(|| Channel::from_packed(msg.get_int(&UPDATE_CHANNEL_B) as u16)),
            group_b: has_b.then(|| Talkgroup::group(raw_group_b, Role::To)),
        }
    }
}

impl MessageBody for GroupVoiceChannelUpdate {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids: Vec<Identifier> = vec![self.group_a.into()];
        if let Some(group_b) = self.group_b {
            ids.push(group_b.into());
        }
        ids
    }

    fn channels(&self) -> Vec<Channel> {
        let mut channels = vec![self.channel_a];
        channels.extend(self.channel_b);
        channels
    }
}

impl fmt::Display for GroupVoiceChannelUpdate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} TALKGROUP A:{} CHAN A:{}",
            LcOpcode::GroupVoiceChannelUpdate,
            self.group_a,
            self.channel_a
        )?;
        if let (Some(group_b), Some(channel_b)) = (self.group_b, self.channel_b) {
            write!(f, " TALKGROUP B:{} CHAN B:{}", group_b, channel_b)?;
        }
        Ok(())
    }
}

/// LC 0x03 and 0x05 share a layout: service options, 24-bit target and 24-bit source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitToUnitVoice {
    /// 8 bits
    pub service_options: ServiceOptions,
    /// 24 bits, bit 24
    pub target_address: Talkgroup,
    /// 24 bits, bit 48
    pub source_address: Talkgroup,
}

impl UnitToUnitVoice {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        UnitToUnitVoice {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            target_address: Talkgroup::individual(msg.get_int(&TARGET_ADDRESS), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }

    pub fn fmt_with(&self, f: &mut fmt::Formatter, opcode: LcOpcode) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{} {}",
            opcode, self.source_address, self.target_address, self.service_options
        )
    }
}

impl MessageBody for UnitToUnitVoice {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.target_address.into(), self.source_address.into()]
    }
}

const EXPLICIT_GROUP_ADDRESS: [usize; 16] = bits::<16>(24);
const DOWNLINK_FREQUENCY_BAND: [usize; 4] = bits::<4>(40);
const DOWNLINK_CHANNEL: [usize; 12] = bits::<12>(44);
const UPLINK_FREQUENCY_BAND: [usize; 4] = bits::<4>(56);
const UPLINK_CHANNEL: [usize; 12] = bits::<12>(60);

/// LC 0x04: talkgroup channel update with independent downlink and uplink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelUpdateExplicit {
    pub service_options: ServiceOptions,
    pub group_address: Talkgroup,
    /// Always explicit, even if downlink and uplink numbers match
    pub channel: Channel,
}

impl GroupVoiceChannelUpdateExplicit {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        GroupVoiceChannelUpdateExplicit {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            group_address: Talkgroup::group(msg.get_int(&EXPLICIT_GROUP_ADDRESS), Role::To),
            channel: Channel::explicit(
                msg.get_int(&DOWNLINK_FREQUENCY_BAND) as u8,
                msg.get_int(&DOWNLINK_CHANNEL) as u16,
                msg.get_int(&UPLINK_FREQUENCY_BAND) as u8,
                msg.get_int(&UPLINK_CHANNEL) as u16,
            ),
        }
    }
}

impl MessageBody for GroupVoiceChannelUpdateExplicit {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.group_address.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

impl fmt::Display for GroupVoiceChannelUpdateExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} TALKGROUP:{} {} {}",
            LcOpcode::GroupVoiceChannelUpdateExplicit,
            self.group_address,
            self.channel,
            self.service_options
        )
    }
}

/// LC 0x0F: end of call, names the unit whose call is torn down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTermination {
    /// 24 bits, bit 48
    pub target_address: Talkgroup,
}

impl CallTermination {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        CallTermination {
            target_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::To),
        }
    }
}

impl MessageBody for CallTermination {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.target_address.into()]
    }
}

impl fmt::Display for CallTermination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} TO:{}", LcOpcode::CallTermination, self.target_address)
    }
}

/// LC 0x16
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallAlert {
    pub target_address: Talkgroup,
    pub source_address: Talkgroup,
}

impl CallAlert {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        CallAlert {
            target_address: Talkgroup::individual(msg.get_int(&TARGET_ADDRESS), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }
}

impl MessageBody for CallAlert {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.target_address.into(), self.source_address.into()]
    }
}

impl fmt::Display for CallAlert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{}",
            LcOpcode::CallAlert,
            self.source_address,
            self.target_address
        )
    }
}
