mod common;

use p25_core::debug;
use p25_core::identifier::{Digit, Identifier, Role};
use p25_pdus::UmbtcMessage;
use p25_pdus::pdu::umbtc::UmbtcBody;
use common::{TEST_NAC, feed};

const HEADER: &str = "157D0000ABCD820000000000";

#[test]
fn test_explicit_dialing_across_blocks() {
    debug::setup_logging_verbose();
    // 20 digits: 18 in block 0, 2 in block 1
    let seq = feed(HEADER, &["081400123456789012345678", "900000000000000000000000"]);
    let msg = UmbtcMessage::from_sequence(seq, TEST_NAC, 0).unwrap();
    assert!(msg.is_valid());

    let UmbtcBody::TelephoneInterconnectRequestExplicitDialing(ref body) = msg.body else {
        panic!("expected explicit dialing, got {:?}", msg.body);
    };
    let number = body.telephone_number.as_ref().unwrap();
    assert_eq!(number.0[18..], [Digit::Number(9), Digit::Number(0)]);

    let ids = msg.identifiers();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[1], Identifier::TelephoneNumber(number.clone(), Role::To));
    assert!(msg.to_string().contains(" TO:12345678901234567890 "));
}

#[test]
fn test_dialing_cut_short() {
    debug::setup_logging_verbose();
    let seq = feed(HEADER, &["081400123456789012345678"]);
    let msg = UmbtcMessage::from_sequence(seq, TEST_NAC, 0).unwrap();
    assert!(!msg.is_valid());
    let summary = msg.to_string();
    assert!(summary.contains("*INCOMPLETE - RECEIVED 1/2 DATA BLOCKS"));
    assert!(summary.contains(" TO:123456789012345678?? "));
}
