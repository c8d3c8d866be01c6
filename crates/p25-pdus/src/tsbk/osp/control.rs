//! Affiliation and registration responses

use core::fmt;

use p25_core::identifier::{self, Identifier, Role, SystemId, Talkgroup};
use p25_core::{BitMessage, bits};

use crate::common::MessageBody;
use crate::common::response::ResponseValue;
use crate::tsbk::enums::tsbk_opcode::OspTsbkOpcode;

const AFFILIATION_GLOBAL: usize = 16;
const AFFILIATION_RESPONSE: [usize; 2] = bits::<2>(22);
const ANNOUNCEMENT_GROUP: [usize; 16] = bits::<16>(24);
const GROUP_ADDRESS: [usize; 16] = bits::<16>(40);
const TARGET_ADDRESS: [usize; 24] = bits::<24>(56);

/// TSBK 0x28: answer to a unit's talkgroup affiliation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAffiliationResponse {
    /// Affiliation valid system-wide rather than on the local site only
    pub global_affiliation: bool,
    pub response: ResponseValue,
    pub announcement_group: Talkgroup,
    pub group_address: Talkgroup,
    pub target_address: Talkgroup,
}

impl GroupAffiliationResponse {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        GroupAffiliationResponse {
            global_affiliation: msg.get_bit(AFFILIATION_GLOBAL),
            response: ResponseValue::from_bits(msg.get_int(&AFFILIATION_RESPONSE)),
            announcement_group: Talkgroup::group(msg.get_int(&ANNOUNCEMENT_GROUP), Role::Any),
            group_address: Talkgroup::group(msg.get_int(&GROUP_ADDRESS), Role::To),
            target_address: Talkgroup::individual(msg.get_int(&TARGET_ADDRESS), Role::To),
        }
    }
}

impl MessageBody for GroupAffiliationResponse {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = Vec::new();
        identifier::push_unique(&mut ids, self.target_address);
        identifier::push_unique(&mut ids, self.group_address);
        identifier::push_unique(&mut ids, self.announcement_group);
        ids
    }
}

impl fmt::Display for GroupAffiliationResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} AFFILIATION TO:{} GROUP:{} ANNOUNCEMENT GROUP:{}",
            OspTsbkOpcode::GroupAffiliationResponse,
            self.response,
            if self.global_affiliation { "GLOBAL" } else { "LOCAL" },
            self.target_address,
            self.group_address,
            self.announcement_group
        )
    }
}

const REGISTRATION_RESPONSE: [usize; 2] = bits::<2>(18);
const SYSTEM: [usize; 12] = bits::<12>(20);
const SOURCE_ID: [usize; 24] = bits::<24>(32);
const SOURCE_ADDRESS: [usize; 24] = bits::<24>(56);

/// TSBK 0x2C: answer to a unit registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRegistrationResponse {
    pub response: ResponseValue,
    pub system: SystemId,
    /// Radio's permanent unit id
    pub source_id: Talkgroup,
    /// Working address assigned for the registration
    pub source_address: Talkgroup,
}

impl UnitRegistrationResponse {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        UnitRegistrationResponse {
            response: ResponseValue::from_bits(msg.get_int(&REGISTRATION_RESPONSE)),
            system: SystemId(msg.get_int(&SYSTEM) as u16),
            source_id: Talkgroup::individual(msg.get_int(&SOURCE_ID), Role::To),
            source_address: Talkgroup::individual(msg.get_int(&SOURCE_ADDRESS), Role::To),
        }
    }
}

impl MessageBody for UnitRegistrationResponse {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids: Vec<Identifier> = vec![self.system.into()];
        identifier::push_unique(&mut ids, self.source_id);
        identifier::push_unique(&mut ids, self.source_address);
        ids
    }
}

impl fmt::Display for UnitRegistrationResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} SYSTEM:{} SOURCE ID:{} ADDRESS:{}",
            OspTsbkOpcode::UnitRegistrationResponse,
            self.response,
            self.system,
            self.source_id,
            self.source_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_affiliation_response() {
        // LG 1, GAV 0 (accept), announcement 0x0010, group 0x0123, target 0x000456
        let msg = BitMessage::from_hex("A80080001001230004560000").unwrap();
        let pdu = GroupAffiliationResponse::from_bitmsg(&msg);
        assert!(pdu.global_affiliation);
        assert_eq!(pdu.response, ResponseValue::Accept);
        assert_eq!(pdu.announcement_group.value, 0x10);
        assert_eq!(pdu.group_address, Talkgroup::group(0x123, Role::To));
        assert_eq!(pdu.target_address, Talkgroup::individual(0x456, Role::To));
        assert_eq!(pdu.identifiers().len(), 3);
    }

    #[test]
    fn test_affiliation_deny() {
        // LG 0, GAV 2
        let msg = BitMessage::from_hex("A80002001001230004560000").unwrap();
        let pdu = GroupAffiliationResponse::from_bitmsg(&msg);
        assert!(!pdu.global_affiliation);
        assert_eq!(pdu.response, ResponseValue::Deny);
    }

    #[test]
    fn test_registration_response_dedupes_equal_addresses() {
        // RV 0, system 0x3A1, source id 0x000123, source address 0x000123
        let msg = BitMessage::from_hex("AC0003A10001230001230000").unwrap();
        let pdu = UnitRegistrationResponse::from_bitmsg(&msg);
        assert_eq!(pdu.response, ResponseValue::Accept);
        assert_eq!(pdu.system, SystemId(0x3A1));
        assert_eq!(pdu.identifiers().len(), 2);
    }
}
