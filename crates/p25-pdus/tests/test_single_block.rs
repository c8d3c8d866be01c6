use p25_core::identifier::{Channel, Identifier, PatchGroup, Role, Talkgroup};
use p25_core::{BitMessage, Direction, debug};
use p25_pdus::{LinkControlWord, P25Message, Tsbk};

const TEST_NAC: u16 = 0x293;

fn lc(hex: &str) -> P25Message {
    LinkControlWord::from_bitmsg(BitMessage::from_hex(hex).unwrap(), TEST_NAC, 0)
        .unwrap()
        .into()
}

fn tsbk(hex: &str) -> P25Message {
    Tsbk::from_bitmsg(BitMessage::from_hex(hex).unwrap(), Direction::Osp, TEST_NAC, 0)
        .unwrap()
        .into()
}

#[test]
fn test_patch_group_only_lists_present_slots() {
    debug::setup_logging_verbose();
    // patch group 100 with slots 200 and 100; the slot equal to the patch group is not listed
    let msg = lc("4390006400C8006400");
    let mut expected = PatchGroup::new(Talkgroup::group(100, Role::To));
    expected.add_patched_groups(vec![Talkgroup::group(200, Role::To)]);
    assert_eq!(msg.identifiers(), vec![Identifier::PatchGroup(expected)]);
    assert!(msg.channels().is_empty());
}

#[test]
fn test_lc_and_tsbk_group_grant_agree() {
    debug::setup_logging_verbose();
    let from_lc = lc("00008400012300ABCD");
    let from_tsbk = tsbk("8000841064012300ABCD5A5A");
    assert_eq!(from_lc.identifiers(), from_tsbk.identifiers());
    assert_eq!(from_tsbk.channels(), vec![Channel::implicit(1, 100)]);
    assert_eq!(from_lc.nac(), from_tsbk.nac());
}

#[test]
fn test_tsbk_telephone_grant_call_timer() {
    // SO 0x02, ch 0x1064, timer 50, address 0x000123
    let msg = tsbk("880002106400320001230000");
    assert!(msg.to_string().contains("CALL TIMER:5000MS"));
}
