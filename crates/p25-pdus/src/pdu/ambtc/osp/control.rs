//! Affiliation and registration responses

use core::fmt;

use p25_core::bits;
use p25_core::identifier::{self, Identifier, Role, SystemId, Talkgroup, Wacn};

use crate::common::MessageBody;
use crate::common::response::ResponseValue;
use crate::pdu::ambtc::osp::source_wacn;
use crate::pdu::packet_sequence::PacketSequence;

const BLOCK_0_SOURCE_SYSTEM: [usize; 12] = bits::<12>(4);
const BLOCK_0_SOURCE_ID: [usize; 24] = bits::<24>(16);
const BLOCK_0_GROUP_WACN: [usize; 20] = bits::<20>(40);
const BLOCK_0_GROUP_SYSTEM: [usize; 12] = bits::<12>(60);
const BLOCK_0_GROUP_ID: [usize; 16] = bits::<16>(72);
const BLOCK_0_ANNOUNCEMENT_GROUP: [usize; 8] = bits::<8>(88);
const BLOCK_1_ANNOUNCEMENT_GROUP: [usize; 8] = bits::<8>(0);

/// AMBTC 0x28: affiliation answer carrying full source and group addressing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAffiliationResponse {
    /// Header address
    pub target_address: Talkgroup,
    pub source_wacn: Option<Wacn>,
    pub source_system: Option<SystemId>,
    pub source_id: Option<Talkgroup>,
    pub group_wacn: Option<Wacn>,
    pub group_system: Option<SystemId>,
    pub group_id: Option<Talkgroup>,
    /// High 8 bits from block 0, low 8 bits from block 1
    pub announcement_group: Option<Talkgroup>,
}

impl GroupAffiliationResponse {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let block_0 = seq.unconfirmed_message(0);
        let block_1 = seq.unconfirmed_message(1);

        let announcement_group = block_0.zip(block_1).map(|(b0, b1)| {
            let id = (b0.get_int(&BLOCK_0_ANNOUNCEMENT_GROUP) << 8) + b1.get_int(&BLOCK_1_ANNOUNCEMENT_GROUP);
            Talkgroup::group(id, Role::To)
        });

        GroupAffiliationResponse {
            target_address: Talkgroup::individual(seq.header().address, Role::To),
            source_wacn: source_wacn(seq),
            source_system: block_0.map(|b| SystemId(b.get_int(&BLOCK_0_SOURCE_SYSTEM) as u16)),
            source_id: block_0.map(|b| Talkgroup::individual(b.get_int(&BLOCK_0_SOURCE_ID), Role::From)),
            group_wacn: block_0.map(|b| Wacn(b.get_int(&BLOCK_0_GROUP_WACN))),
            group_system: block_0.map(|b| SystemId(b.get_int(&BLOCK_0_GROUP_SYSTEM) as u16)),
            group_id: block_0.map(|b| Talkgroup::group(b.get_int(&BLOCK_0_GROUP_ID), Role::To)),
            announcement_group,
        }
    }
}

impl MessageBody for GroupAffiliationResponse {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = Vec::new();
        identifier::push_unique(&mut ids, self.target_address);
        let optional: [Option<Identifier>; 7] = [
            self.source_wacn.map(Identifier::from),
            self.source_system.map(Identifier::from),
            self.source_id.map(Identifier::from),
            self.group_wacn.map(Identifier::from),
            self.group_system.map(Identifier::from),
            self.group_id.map(Identifier::from),
            self.announcement_group.map(Identifier::from),
        ];
        for id in optional.into_iter().flatten() {
            identifier::push_unique(&mut ids, id);
        }
        ids
    }
}

impl fmt::Display for GroupAffiliationResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TO:{}", self.target_address)?;
        if let Some(v) = self.source_wacn {
            write!(f, " FM WACN:{}", v)?;
        }
        if let Some(v) = self.source_system {
            write!(f, " FM SYSTEM:{}", v)?;
        }
        if let Some(v) = self.source_id {
            write!(f, " FM ID:{}", v)?;
        }
        if let Some(v) = self.group_wacn {
            write!(f, " GRP WACN:{}", v)?;
        }
        if let Some(v) = self.group_system {
            write!(f, " GRP SYSTEM:{}", v)?;
        }
        if let Some(v) = self.group_id {
            write!(f, " GRP ID:{}", v)?;
        }
        if let Some(v) = self.announcement_group {
            write!(f, " ANNOUNCEMENT GRP:{}", v)?;
        }
        Ok(())
    }
}

const BLOCK_0_SOURCE_ADDRESS: [usize; 24] = bits::<24>(40);
const BLOCK_0_REGISTRATION_RESPONSE: [usize; 2] = bits::<2>(70);

/// AMBTC 0x2C: registration answer with the unit's full WACN/system/id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRegistrationResponse {
    /// Header address
    pub target_address: Talkgroup,
    pub source_wacn: Option<Wacn>,
    pub source_system: Option<SystemId>,
    pub source_id: Option<Talkgroup>,
    /// Working address of the registering unit
    pub source_address: Option<Talkgroup>,
    pub response: Option<ResponseValue>,
}

impl UnitRegistrationResponse {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let block_0 = seq.unconfirmed_message(0);
        UnitRegistrationResponse {
            target_address: Talkgroup::individual(seq.header().address, Role::To),
            source_wacn: source_wacn(seq),
            source_system: block_0.map(|b| SystemId(b.get_int(&BLOCK_0_SOURCE_SYSTEM) as u16)),
            source_id: block_0.map(|b| Talkgroup::individual(b.get_int(&BLOCK_0_SOURCE_ID), Role::From)),
            source_address: block_0.map(|b| Talkgroup::individual(b.get_int(&BLOCK_0_SOURCE_ADDRESS), Role::From)),
            response: block_0.map(|b| ResponseValue::from_bits(b.get_int(&BLOCK_0_REGISTRATION_RESPONSE))),
        }
    }
}

impl MessageBody for UnitRegistrationResponse {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = Vec::new();
        identifier::push_unique(&mut ids, self.target_address);
        let optional: [Option<Identifier>; 4] = [
            self.source_wacn.map(Identifier::from),
            self.source_system.map(Identifier::from),
            self.source_id.map(Identifier::from),
            self.source_address.map(Identifier::from),
        ];
        for id in optional.into_iter().flatten() {
            identifier::push_unique(&mut ids, id);
        }
        ids
    }
}

impl fmt::Display for UnitRegistrationResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(response) = self.response {
            write!(f, "REGISTRATION {} ", response)?;
        }
        write!(f, "TO:{}", self.target_address)?;
        if let Some(v) = self.source_wacn {
            write!(f, " FM WACN:{}", v)?;
        }
        if let Some(v) = self.source_system {
            write!(f, " FM SYSTEM:{}", v)?;
        }
        if let Some(v) = self.source_id {
            write!(f, " FM ID:{}", v)?;
        }
        if let Some(v) = self.source_address {
            write!(f, " ADDRESS:{}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::test_util::sequence;

    // target 0x000456, 2 blocks, opcode 0x28, source WACN high 0x0001
    const AFFILIATION_HEADER: &str = "377D00000456822800010000";
    // WACN low 0x2, system 0x3A1, source id 0x000123, group WACN 0x00012, group system 0x3A1,
    // group id 0x0200, announcement high 0x01
    const AFFILIATION_BLOCK_0: &str = "23A1000123000123A1020001";
    // announcement low 0x00
    const AFFILIATION_BLOCK_1: &str = "000000000000000000000000";

    #[test]
    fn test_cross_block_fields() {
        let seq = sequence(AFFILIATION_HEADER, &[AFFILIATION_BLOCK_0, AFFILIATION_BLOCK_1]);
        let pdu = GroupAffiliationResponse::from_sequence(&seq);
        assert_eq!(pdu.target_address, Talkgroup::individual(0x456, Role::To));
        assert_eq!(pdu.source_wacn, Some(Wacn(18)));
        assert_eq!(pdu.group_wacn, Some(Wacn(0x12)));
        assert_eq!(pdu.group_id, Some(Talkgroup::group(0x200, Role::To)));
        assert_eq!(pdu.announcement_group, Some(Talkgroup::group(256, Role::To)));

        // equal source and group WACN/system collapse
        let ids = pdu.identifiers();
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0], Identifier::Talkgroup(pdu.target_address));
    }

    #[test]
    fn test_announcement_absent_without_block_1() {
        let seq = sequence(AFFILIATION_HEADER, &[AFFILIATION_BLOCK_0]);
        let pdu = GroupAffiliationResponse::from_sequence(&seq);
        assert!(pdu.group_id.is_some());
        assert_eq!(pdu.announcement_group, None);
        assert!(!pdu.to_string().contains("ANNOUNCEMENT"));
    }

    #[test]
    fn test_header_only() {
        let seq = sequence(AFFILIATION_HEADER, &[]);
        let pdu = GroupAffiliationResponse::from_sequence(&seq);
        assert_eq!(pdu.source_wacn, None);
        assert_eq!(pdu.identifiers(), vec![Identifier::Talkgroup(pdu.target_address)]);
        assert_eq!(pdu.to_string(), "TO:1110");
    }

    #[test]
    fn test_registration_response() {
        // target 0x000456, 1 block, opcode 0x2C, WACN high 0x0001
        // block 0: WACN low 0x2, system 0x3A1, source id 0x000123, source address 0x000456, RV 2
        let seq = sequence("377D00000456812C00010000", &["23A100012300045602000000"]);
        let pdu = UnitRegistrationResponse::from_sequence(&seq);
        assert_eq!(pdu.response, Some(ResponseValue::Deny));
        assert_eq!(pdu.source_address, Some(Talkgroup::individual(0x456, Role::From)));
        // same value as the header target, but on the source side
        let ids = pdu.identifiers();
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[4], Identifier::Talkgroup(Talkgroup::individual(0x456, Role::From)));
    }
}
