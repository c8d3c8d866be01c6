//! Voice channel grants

use core::fmt;

use p25_core::identifier::{self, Channel, Identifier, Role, SystemId, Talkgroup, Wacn};
use p25_core::{ServiceOptions, bits};

use crate::common::MessageBody;
use crate::pdu::ambtc::osp::source_wacn;
use crate::pdu::packet_sequence::PacketSequence;

const HEADER_SERVICE_OPTIONS: [usize; 8] = bits::<8>(64);
const BLOCK_0_GROUP_DOWNLINK: [usize; 16] = bits::<16>(0);
const BLOCK_0_GROUP_UPLINK: [usize; 16] = bits::<16>(16);
const BLOCK_0_GROUP_ADDRESS: [usize; 16] = bits::<16>(32);

/// AMBTC 0x00: talkgroup grant with explicit channel pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVoiceChannelGrant {
    pub service_options: ServiceOptions,
    /// Header address
    pub source_address: Talkgroup,
    /// Block 0
    pub channel: Option<Channel>,
    /// Block 0
    pub group_address: Option<Talkgroup>,
}

impl GroupVoiceChannelGrant {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let header = &seq.header().message;
        let block_0 = seq.unconfirmed_message(0);
        GroupVoiceChannelGrant {
            service_options: ServiceOptions::new(header.get_int(&HEADER_SERVICE_OPTIONS) as u8),
            source_address: Talkgroup::individual(seq.header().address, Role::From),
            channel: block_0.map(|b| {
                Channel::from_packed_pair(
                    b.get_int(&BLOCK_0_GROUP_DOWNLINK) as u16,
                    b.get_int(&BLOCK_0_GROUP_UPLINK) as u16,
                )
            }),
            group_address: block_0.map(|b| Talkgroup::group(b.get_int(&BLOCK_0_GROUP_ADDRESS), Role::To)),
        }
    }
}

impl MessageBody for GroupVoiceChannelGrant {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = Vec::new();
        if let Some(group_address) = self.group_address {
            identifier::push_unique(&mut ids, group_address);
        }
        identifier::push_unique(&mut ids, self.source_address);
        ids
    }

    fn channels(&self) -> Vec<Channel> {
        self.channel.into_iter().collect()
    }
}

impl fmt::Display for GroupVoiceChannelGrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FM:{}", self.source_address)?;
        if let Some(group_address) = self.group_address {
            write!(f, " TO:{}", group_address)?;
        }
        if let Some(channel) = self.channel {
            write!(f, " CHAN:{}", channel)?;
        }
        write!(f, " SERVICE OPTIONS:{}", self.service_options)
    }
}

const BLOCK_0_SOURCE_SYSTEM: [usize; 12] = bits::<12>(4);
const BLOCK_0_SOURCE_ID: [usize; 24] = bits::<24>(16);
const BLOCK_0_UNIT_DOWNLINK: [usize; 16] = bits::<16>(40);
const BLOCK_0_UNIT_UPLINK: [usize; 16] = bits::<16>(56);

/// AMBTC 0x04: unit-to-unit grant, source identified by its full WACN/system/id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitToUnitVoiceChannelGrant {
    /// Header address
    pub target_address: Talkgroup,
    /// Header high bits plus block 0 low bits
    pub source_wacn: Option<Wacn>,
    pub source_system: Option<SystemId>,
    pub source_id: Option<Talkgroup>,
    pub channel: Option<Channel>,
}

impl UnitToUnitVoiceChannelGrant {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let block_0 = seq.unconfirmed_message(0);
        UnitToUnitVoiceChannelGrant {
            target_address: Talkgroup::individual(seq.header().address, Role::To),
            source_wacn: source_wacn(seq),
            source_system: block_0.map(|b| SystemId(b.get_int(&BLOCK_0_SOURCE_SYSTEM) as u16)),
            source_id: block_0.map(|b| Talkgroup::individual(b.get_int(&BLOCK_0_SOURCE_ID), Role::From)),
            channel: block_0.map(|b| {
                Channel::from_packed_pair(
                    b.get_int(&BLOCK_0_UNIT_DOWNLINK) as u16,
                    b.get_int(&BLOCK_0_UNIT_UPLINK) as u16,
                )
            }),
        }
    }
}

impl MessageBody for UnitToUnitVoiceChannelGrant {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = Vec::new();
        identifier::push_unique(&mut ids, self.target_address);
        if let Some(wacn) = self.source_wacn {
            identifier::push_unique(&mut ids, wacn);
        }
        if let Some(system) = self.source_system {
            identifier::push_unique(&mut ids, system);
        }
        if let Some(source_id) = self.source_id {
            identifier::push_unique(&mut ids, source_id);
        }
        ids
    }

    fn channels(&self) -> Vec<Channel> {
        self.channel.into_iter().collect()
    }
}

impl fmt::Display for UnitToUnitVoiceChannelGrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TO:{}", self.target_address)?;
        if let Some(wacn) = self.source_wacn {
            write!(f, " FM WACN:{}", wacn)?;
        }
        if let Some(system) = self.source_system {
            write!(f, " FM SYSTEM:{}", system)?;
        }
        if let Some(source_id) = self.source_id {
            write!(f, " FM ID:{}", source_id)?;
        }
        if let Some(channel) = self.channel {
            write!(f, " CHAN:{}", channel)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::test_util::sequence;

    #[test]
    fn test_group_grant_with_block() {
        // source 0x000123, 1 block, opcode 0x00, SO 0x04
        // block 0: DL 0x1064, UL 0x1096, group 0x0200
        let seq = sequence("377D00000123810004000000", &["106410960200000000000000"]);
        let pdu = GroupVoiceChannelGrant::from_sequence(&seq);
        assert_eq!(pdu.service_options.priority(), 4);
        assert_eq!(pdu.source_address, Talkgroup::individual(0x123, Role::From));
        assert_eq!(pdu.channel, Some(Channel::explicit(1, 100, 1, 150)));
        assert_eq!(pdu.group_address, Some(Talkgroup::group(0x200, Role::To)));
        assert_eq!(pdu.identifiers().len(), 2);
    }

    #[test]
    fn test_group_grant_without_block() {
        let seq = sequence("377D00000123810004000000", &[]);
        let pdu = GroupVoiceChannelGrant::from_sequence(&seq);
        assert_eq!(pdu.channel, None);
        assert_eq!(pdu.group_address, None);
        assert!(pdu.channels().is_empty());
        assert_eq!(pdu.identifiers(), vec![Identifier::Talkgroup(pdu.source_address)]);
    }

    #[test]
    fn test_unit_grant_source_wacn() {
        // target 0x000456, 1 block, opcode 0x04, WACN high 0x0001
        // block 0: WACN low 0x2, system 0x3A1, source id 0x000123, DL 0x1064, UL 0x1064
        let seq = sequence("377D00000456810400010000", &["23A100012310641064000000"]);
        let pdu = UnitToUnitVoiceChannelGrant::from_sequence(&seq);
        assert_eq!(pdu.source_wacn, Some(Wacn(0x12)));
        assert_eq!(pdu.source_system, Some(SystemId(0x3A1)));
        assert_eq!(pdu.source_id, Some(Talkgroup::individual(0x123, Role::From)));
        assert_eq!(pdu.channel, Some(Channel::implicit(1, 100)));
    }
}
