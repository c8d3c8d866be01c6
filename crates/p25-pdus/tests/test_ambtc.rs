mod common;

use p25_core::debug;
use p25_core::identifier::{Channel, Identifier, Role, Talkgroup, Wacn};
use p25_pdus::pdu::ambtc::AmbtcBody;
use p25_pdus::pdu::data_block::UnconfirmedDataBlock;
use p25_pdus::{AmbtcMessage, AssemblerState, P25Message, PacketSequenceAssembler};
use common::{TEST_NAC, block, feed, header};

const AFFILIATION_HEADER: &str = "377D00000456822800010000";
const AFFILIATION_BLOCK_0: &str = "23A1000123000123A1020001";
const AFFILIATION_BLOCK_1: &str = "000000000000000000000000";

#[test]
fn test_assembled_group_affiliation_response() {
    debug::setup_logging_verbose();
    let seq = feed(AFFILIATION_HEADER, &[AFFILIATION_BLOCK_0, AFFILIATION_BLOCK_1]);
    let msg = AmbtcMessage::from_sequence(seq, TEST_NAC, 1_700_000_000_000).unwrap();
    assert!(msg.is_valid());

    let AmbtcBody::GroupAffiliationResponse(ref body) = msg.body else {
        panic!("expected group affiliation response, got {:?}", msg.body);
    };
    assert_eq!(body.source_wacn, Some(Wacn(18)));
    assert_eq!(body.announcement_group, Some(Talkgroup::group(256, Role::To)));
    assert_eq!(
        msg.to_string(),
        "NAC:659 AMBTC GROUP AFFILIATION RESPONSE TO:1110 FM WACN:00012 FM SYSTEM:3A1 FM ID:291 \
         GRP WACN:00012 GRP SYSTEM:3A1 GRP ID:512 ANNOUNCEMENT GRP:256"
    );
}

#[test]
fn test_partial_sequence_decodes_available_fields() {
    debug::setup_logging_verbose();
    // 3 blocks declared, transmission ends after 2
    let seq = feed("377D00000456832800010000", &[AFFILIATION_BLOCK_0, AFFILIATION_BLOCK_1]);
    assert_eq!(seq.received_blocks(), 2);

    let msg = AmbtcMessage::from_sequence(seq, TEST_NAC, 0).unwrap();
    assert!(!msg.is_complete());
    assert!(!msg.is_valid());
    let summary = msg.to_string();
    assert!(summary.starts_with("NAC:659 AMBTC GROUP AFFILIATION RESPONSE *INCOMPLETE - RECEIVED 2/3 DATA BLOCKS"));
    assert!(summary.ends_with("ANNOUNCEMENT GRP:256"));
}

#[test]
fn test_short_label_padded_before_incomplete_marker() {
    // unknown opcode 0x3F, 2 blocks declared, 1 received
    let seq = feed("377D00000123823F00000000", &["106410960200000000000000"]);
    let msg = AmbtcMessage::from_sequence(seq, 1, 0).unwrap();
    let summary = msg.to_string();
    assert!(summary.starts_with("NAC:1 AMBTC UNKNOWN OPCODE:63  *INCOMPLETE - RECEIVED 1/2 DATA BLOCKS "));
}

#[test]
fn test_telephone_grant_call_timer() {
    let seq = feed("377D00000123810800000000", &["106410640032000000000000"]);
    let msg: P25Message = AmbtcMessage::from_sequence(seq, TEST_NAC, 0).unwrap().into();
    assert_eq!(msg.channels(), vec![Channel::implicit(1, 100)]);
    assert!(msg.to_string().ends_with("ADDR:291 CHAN:1-100 CALL TIMER:5000ms SERVICE OPTIONS:PRI:0"));
}

#[test]
fn test_unit_to_unit_grant_identifiers() {
    let seq = feed("377D00000456810400010000", &["23A100012310641064000000"]);
    let msg = AmbtcMessage::from_sequence(seq, TEST_NAC, 0).unwrap();
    let ids = msg.identifiers();
    assert_eq!(ids[0], Identifier::Talkgroup(Talkgroup::individual(0x456, Role::To)));
    assert!(ids.contains(&Identifier::Wacn(Wacn(0x12))));
    assert!(ids.contains(&Identifier::Talkgroup(Talkgroup::individual(0x123, Role::From))));
}

#[test]
fn test_identifiers_stable_across_calls() {
    let seq = feed(AFFILIATION_HEADER, &[AFFILIATION_BLOCK_0, AFFILIATION_BLOCK_1]);
    let msg = AmbtcMessage::from_sequence(seq, TEST_NAC, 0).unwrap();
    assert_eq!(msg.identifiers(), msg.identifiers());
}

#[test]
fn test_assembler_restarts_on_new_header() {
    debug::setup_logging_verbose();
    let mut assembler = PacketSequenceAssembler::new();
    assembler.receive_header(header("377D00000456832800010000"));
    assembler.receive_data_block(block(AFFILIATION_BLOCK_0));

    // a fresh header interrupts the open sequence
    assembler.receive_header(header(AFFILIATION_HEADER));
    assembler.receive_data_block(block(AFFILIATION_BLOCK_0));
    let state = assembler.receive_data_block(block(AFFILIATION_BLOCK_1));
    assert_eq!(state, AssemblerState::Complete);

    let seq = assembler.take_sequence().unwrap();
    assert_eq!(seq.expected_blocks(), 2);
    assert_eq!(seq.received_blocks(), 2);

    // further blocks with no header are ignored
    let stray = UnconfirmedDataBlock::from_bitmsg(p25_core::BitMessage::new(96), 0).unwrap();
    assert_eq!(assembler.receive_data_block(stray), AssemblerState::AwaitingHeader);
}
