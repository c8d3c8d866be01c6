//! Voice channel grants (TIA-102.AABC-E clause 6.2)

use core::fmt;

use p25_core::identifier::{Channel, Identifier, Role, Talkgroup};
use p25_core::{BitMessage, ServiceOptions, bits};

use crate::common::MessageBody;
use crate::tsbk::enums::tsbk_opcode::OspTsbkOpcode;

const SERVICE_OPTIONS: [usize; 8] = bits::<8>(16);
const SOURCE_ADDRESS: [usize; 24] = bits::<24>(56);

const GRANT_CHANNEL: [usize; 16] = bits::<16>(24);
const GRANT_GROUP_ADDRESS: [usize; 16] = bits::<16>(40);

/// TSBK 0x00: talkgroup assigned to a traffic channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelGrant {
    /// 8 bits
    pub service_options: ServiceOptions,
    /// 16 bits, bit 24
    pub channel: Channel,
    /// 16 bits, bit 40
    pub group_address: Talkgroup,
    /// 24 bits, bit 56
    pub source_address: Talkgroup,
}

impl GroupVoiceChannelGrant {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        GroupVoiceChannelGrant {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            channel: Channel::from_packed(msg.get_int(&GRANT_CHANNEL) as u16),
            group_address: Talkgroup::group(msg.get_int(&GRANT_GROUP_ADDRESS), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }
}

impl MessageBody for GroupVoiceChannelGrant {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.group_address.into(), self.source_address.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

impl fmt::Display for GroupVoiceChannelGrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{} CHAN:{} {}",
            OspTsbkOpcode::GroupVoiceChannelGrant,
            self.source_address,
            self.group_address,
            self.channel,
            self.service_options
        )
    }
}

const UPDATE_CHANNEL_A: [usize; 16] = bits::<16>(16);
const UPDATE_GROUP_A: [usize; 16] = bits::<16>(32);
const UPDATE_CHANNEL_B: [usize; 16] = bits::<16>(48);
const UPDATE_GROUP_B: [usize; 16] = bits::<16>(64);

/// TSBK 0x02: reminder of up to two ongoing talkgroup calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelGrantUpdate {
    pub channel_a: Channel,
    pub group_a: Talkgroup,
    /// Present when group B is non-zero and differs from group A
    pub channel_b: Option<Channel>,
    pub group_b: Option<Talkgroup>,
}

impl GroupVoiceChannelGrantUpdate {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        let raw_group_a = msg.get_int(&UPDATE_GROUP_A);
        let raw_group_b = msg.get_int(&UPDATE_GROUP_B);
        let has_b = raw_group_b != 0 && raw_group_b != raw_group_a;

        GroupVoiceChannelGrantUpdate {
            channel_a: Channel::from_packed(msg.get_int(&UPDATE_CHANNEL_A) as u16),
            group_a: Talkgroup::group(raw_group_a, Role::To),
            channel_b: has_b.then(|| Channel::from_packed(msg.get_int(&UPDATE_CHANNEL_B) as u16)),
            group_b: has_b.then(|| Talkgroup::group(raw_group_b, Role::To)),
        }
    }
}

impl MessageBody for GroupVoiceChannelGrantUpdate {
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

impl fmt::Display for GroupVoiceChannelGrantUpdate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} TALKGROUP A:{} CHAN A:{}",
            OspTsbkOpcode::GroupVoiceChannelGrantUpdate,
            self.group_a,
            self.channel_a
        )?;
        if let (Some(group_b), Some(channel_b)) = (self.group_b, self.channel_b) {
            write!(f, " TALKGROUP B:{} CHAN B:{}", group_b, channel_b)?;
        }
        Ok(())
    }
}

const EXPLICIT_DOWNLINK: [usize; 16] = bits::<16>(32);
const EXPLICIT_UPLINK: [usize; 16] = bits::<16>(48);
const EXPLICIT_GROUP_ADDRESS: [usize; 16] = bits::<16>(64);

/// TSBK 0x03: talkgroup call update with separate downlink and uplink channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelGrantUpdateExplicit {
    pub service_options: ServiceOptions,
    /// Implicit when downlink and uplink channel numbers match
    pub channel: Channel,
    pub group_address: Talkgroup,
}

impl GroupVoiceChannelGrantUpdateExplicit {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        GroupVoiceChannelGrantUpdateExplicit {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            channel: Channel::from_packed_pair(
                msg.get_int(&EXPLICIT_DOWNLINK) as u16,
                msg.get_int(&EXPLICIT_UPLINK) as u16,
            ),
            group_address: Talkgroup::group(msg.get_int(&EXPLICIT_GROUP_ADDRESS), Role::To),
        }
    }
}

impl MessageBody for GroupVoiceChannelGrantUpdateExplicit {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.group_address.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

impl fmt::Display for GroupVoiceChannelGrantUpdateExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} TALKGROUP:{} CHAN:{} {}",
            OspTsbkOpcode::GroupVoiceChannelGrantUpdateExplicit,
            self.group_address,
            self.channel,
            self.service_options
        )
    }
}

const UNIT_CHANNEL: [usize; 16] = bits::<16>(16);
const UNIT_TARGET_ADDRESS: [usize; 24] = bits::<24>(32);

/// TSBK 0x04 and 0x06 share a layout: channel, 24-bit target and 24-bit source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitToUnitVoiceChannelGrant {
    /// 16 bits, bit 16
    pub channel: Channel,
    /// 24 bits, bit 32
    pub target_address: Talkgroup,
    /// 24 bits, bit 56
    pub source_address: Talkgroup,
}

impl UnitToUnitVoiceChannelGrant {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        UnitToUnitVoiceChannelGrant {
            channel: Channel::from_packed(msg.get_int(&UNIT_CHANNEL) as u16),
            target_address: Talkgroup::individual(msg.get_int(&UNIT_TARGET_ADDRESS), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }

    pub fn fmt_with(&self, f: &mut fmt::Formatter, opcode: OspTsbkOpcode) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{} CHAN:{}",
            opcode, self.source_address, self.target_address, self.channel
        )
    }
}

impl MessageBody for UnitToUnitVoiceChannelGrant {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.target_address.into(), self.source_address.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

/// TSBK 0x05: a unit is being called by another unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitToUnitAnswerRequest {
    pub service_options: ServiceOptions,
    pub target_address: Talkgroup,
    pub source_address: Talkgroup,
}

impl UnitToUnitAnswerRequest {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        UnitToUnitAnswerRequest {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            target_address: Talkgroup::individual(msg.get_int(&UNIT_TARGET_ADDRESS), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }
}

impl MessageBody for UnitToUnitAnswerRequest {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.target_address.into(), self.source_address.into()]
    }
}

impl fmt::Display for UnitToUnitAnswerRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{} {}",
            OspTsbkOpcode::UnitToUnitAnswerRequest,
            self.source_address,
            self.target_address,
            self.service_options
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_voice_channel_grant() {
        // SO 0x84, ch 0x1064, group 0x0123, source 0x00ABCD
        let msg = BitMessage::from_hex("8000841064012300ABCD0000").unwrap();
        let pdu = GroupVoiceChannelGrant::from_bitmsg(&msg);
        assert!(pdu.service_options.is_emergency());
        assert_eq!(pdu.channel, Channel::implicit(1, 100));
        assert_eq!(pdu.group_address, Talkgroup::group(0x123, Role::To));
        assert_eq!(pdu.source_address, Talkgroup::individual(0xABCD, Role::From));
        assert_eq!(pdu.channels(), vec![Channel::implicit(1, 100)]);
    }

    #[test]
    fn test_grant_update_group_b_equal_to_a_is_absent() {
        // ch A 0x1064, group A 0x0100, ch B 0x1065, group B 0x0100
        let msg = BitMessage::from_hex("820010640100106501000000").unwrap();
        let pdu = GroupVoiceChannelGrantUpdate::from_bitmsg(&msg);
        assert_eq!(pdu.group_b, None);
        assert_eq!(pdu.channel_b, None);
        assert_eq!(pdu.identifiers().len(), 1);

        // group B 0x0200
        let msg = BitMessage::from_hex("820010640100106502000000").unwrap();
        let pdu = GroupVoiceChannelGrantUpdate::from_bitmsg(&msg);
        assert_eq!(pdu.group_b, Some(Talkgroup::group(0x200, Role::To)));
        assert_eq!(pdu.channels(), vec![Channel::implicit(1, 100), Channel::implicit(1, 101)]);
    }

    #[test]
    fn test_explicit_update_channel_pair() {
        // SO 0x00, DL 0x1064, UL 0x1096, group 0x0123
        let msg = BitMessage::from_hex("830000001064109601230000").unwrap();
        let pdu = GroupVoiceChannelGrantUpdateExplicit::from_bitmsg(&msg);
        assert_eq!(pdu.channel, Channel::explicit(1, 100, 1, 150));
        assert_eq!(pdu.group_address.value, 0x123);

        // matching numbers collapse to an implicit channel
        let msg = BitMessage::from_hex("830000001064106401230000").unwrap();
        let pdu = GroupVoiceChannelGrantUpdateExplicit::from_bitmsg(&msg);
        assert!(!pdu.channel.is_explicit());
    }

    #[test]
    fn test_unit_to_unit_grant() {
        // ch 0x1064, target 0x000456, source 0x000123
        let msg = BitMessage::from_hex("840010640004560001230000").unwrap();
        let pdu = UnitToUnitVoiceChannelGrant::from_bitmsg(&msg);
        assert_eq!(pdu.target_address, Talkgroup::individual(0x456, Role::To));
        assert_eq!(pdu.source_address, Talkgroup::individual(0x123, Role::From));
    }
}
