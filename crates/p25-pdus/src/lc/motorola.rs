//! Motorola (MFID 0x90) link control words

use core::fmt;

use p25_core::identifier::{Channel, Identifier, PatchGroup, Role, Talkgroup};
use p25_core::{BitMessage, ServiceOptions, bits};

use crate::common::MessageBody;
use crate::lc::enums::lc_opcode::MotorolaLcOpcode;

const SERVICE_OPTIONS: [usize; 8] = bits::<8>(16);
const USER_PATCH_GROUP: [usize; 16] = bits::<16>(32);
const SOURCE_ADDRESS: [usize; 24] = bits::<24>(48);

/// Motorola LC 0x00: call in progress on a patch group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGroupVoiceChannelUser {
    pub service_options: ServiceOptions,
    pub patch_group: PatchGroup,
    pub source_address: Talkgroup,
}

impl PatchGroupVoiceChannelUser {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        PatchGroupVoiceChannelUser {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            patch_group: PatchGroup::new(Talkgroup::group(msg.get_int(&USER_PATCH_GROUP), Role::To)),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::From),
        }
    }
}

impl MessageBody for PatchGroupVoiceChannelUser {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.patch_group.clone().into(), self.source_address.into()]
    }
}

impl fmt::Display for PatchGroupVoiceChannelUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} FROM:{} TO:{} {}",
            MotorolaLcOpcode::PatchGroupVoiceChannelUser,
            self.source_address,
            self.patch_group,
            self.service_options
        )
    }
}

const UPDATE_PATCH_GROUP_A: [usize; 16] = bits::<16>(16);
const UPDATE_PATCH_GROUP_B: [usize; 16] = bits::<16>(32);
const UPDATE_CHANNEL: [usize; 16] = bits::<16>(48);

/// Motorola LC 0x01: patch group(s) active on a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGroupVoiceChannelUpdate {
    pub patch_group_a: PatchGroup,
    /// Present when non-zero and different from patch group A
    pub patch_group_b: Option<PatchGroup>,
    pub channel: Channel,
}

impl PatchGroupVoiceChannelUpdate {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        let raw_a = msg.get_int(&UPDATE_PATCH_GROUP_A);
        let raw_b = msg.get_int(&UPDATE_PATCH_GROUP_B);
        PatchGroupVoiceChannelUpdate {
            patch_group_a: PatchGroup::new(Talkgroup::group(raw_a, Role::To)),
            patch_group_b: PatchGroup::is_patched_slot_present(raw_a, raw_b)
                .then(|| PatchGroup::new(Talkgroup::group(raw_b, Role::To))),
            channel: Channel::from_packed(msg.get_int(&UPDATE_CHANNEL) as u16),
        }
    }
}

impl MessageBody for PatchGroupVoiceChannelUpdate {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids: Vec<Identifier> = vec![self.patch_group_a.clone().into()];
        if let Some(ref b) = self.patch_group_b {
            ids.push(b.clone().into());
        }
        ids
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

impl fmt::Display for PatchGroupVoiceChannelUpdate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} PATCH GROUP A:{}",
            MotorolaLcOpcode::PatchGroupVoiceChannelUpdate,
            self.patch_group_a
        )?;
        if let Some(ref b) = self.patch_group_b {
            write!(f, " PATCH GROUP B:{}", b)?;
        }
        write!(f, " CHAN:{}", self.channel)
    }
}

const PATCH_GROUP: [usize; 16] = bits::<16>(16);
const PATCHED_GROUP_1: [usize; 16] = bits::<16>(32);
const PATCHED_GROUP_2: [usize; 16] = bits::<16>(48);

/// Motorola LC 0x03 (add) and 0x04 (delete): patch group membership change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGroupChange {
    /// Patch group with the 0-2 patched groups that are present
    pub patch_group: PatchGroup,
}

impl PatchGroupChange {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        let raw_patch_group = msg.get_int(&PATCH_GROUP);
        let patched: Vec<Talkgroup> = [msg.get_int(&PATCHED_GROUP_1), msg.get_int(&PATCHED_GROUP_2)]
            .into_iter()
            .filter(|&raw| PatchGroup::is_patched_slot_present(raw_patch_group, raw))
            .map(|raw| Talkgroup::group(raw, Role::To))
            .collect();

        let mut patch_group = PatchGroup::new(Talkgroup::group(raw_patch_group, Role::To));
        patch_group.add_patched_groups(patched);
        PatchGroupChange { patch_group }
    }

    pub fn fmt_summary(&self, f: &mut fmt::Formatter, opcode: MotorolaLcOpcode, msg: &BitMessage) -> fmt::Result {
        write!(f, "{}:{} MSG:{}", opcode, self.patch_group, msg.to_hex_string())
    }
}

impl MessageBody for PatchGroupChange {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.patch_group.clone().into()]
    }
}

const TALK_COMPLETE_ADDRESS: [usize; 24] = bits::<24>(48);

/// Motorola LC 0x0F: end of a transmission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkComplete {
    pub address: Talkgroup,
}

impl TalkComplete {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        TalkComplete {
            address: Talkgroup::individual(msg.get_int(&TALK_COMPLETE_ADDRESS), Role::From),
        }
    }
}

impl MessageBody for TalkComplete {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.address.into()]
    }
}

impl fmt::Display for TalkComplete {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} FROM:{}", MotorolaLcOpcode::TalkComplete, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Motorola LC 0x03 with the given raw patch group fields
    fn patch_add(parent: u32, slot1: u32, slot2: u32) -> BitMessage {
        let mut msg = BitMessage::new(72);
        // vendor format, opcode 0x03, MFID 0x90
        msg.set_int(0x43, &bits::<8>(0));
        msg.set_int(0x90, &bits::<8>(8));
        msg.set_int(parent, &PATCH_GROUP);
        msg.set_int(slot1, &PATCHED_GROUP_1);
        msg.set_int(slot2, &PATCHED_GROUP_2);
        msg
    }

    #[test]
    fn test_patched_slot_equal_to_parent_is_absent() {
        let pdu = PatchGroupChange::from_bitmsg(&patch_add(100, 100, 0));
        assert!(pdu.patch_group.patched_groups().is_empty());
        assert_eq!(pdu.patch_group.to_string(), "P:100[]");
    }

    #[test]
    fn test_patched_slot_present() {
        let pdu = PatchGroupChange::from_bitmsg(&patch_add(100, 200, 0));
        assert_eq!(pdu.patch_group.patched_groups(), &[Talkgroup::group(200, Role::To)]);

        let pdu = PatchGroupChange::from_bitmsg(&patch_add(100, 0, 300));
        assert_eq!(pdu.patch_group.patched_groups(), &[Talkgroup::group(300, Role::To)]);

        let pdu = PatchGroupChange::from_bitmsg(&patch_add(100, 200, 300));
        assert_eq!(pdu.patch_group.patched_groups().len(), 2);
        assert_eq!(pdu.identifiers().len(), 1);
    }

    #[test]
    fn test_update_group_b_presence() {
        // patch group A 0x0064, patch group B 0x0064, ch 0x1064
        let msg = BitMessage::from_hex("419000640064106400").unwrap();
        let pdu = PatchGroupVoiceChannelUpdate::from_bitmsg(&msg);
        assert_eq!(pdu.patch_group_b, None);
        assert_eq!(pdu.channel, Channel::implicit(1, 100));
        assert_eq!(pdu.identifiers().len(), 1);
    }
}
