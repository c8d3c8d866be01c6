use p25_core::BitMessage;

use crate::pdu::data_block::UnconfirmedDataBlock;
use crate::pdu::header::PduHeader;
use crate::pdu::packet_sequence::PacketSequence;

/// Builds a sequence from a header and unconfirmed block payloads, all given as hex
pub fn sequence(header_hex: &str, blocks: &[&str]) -> PacketSequence {
    let header = PduHeader::from_bitmsg(BitMessage::from_hex(header_hex).unwrap()).unwrap();
    let mut seq = PacketSequence::new(header);
    for hex in blocks {
        seq.add_block(UnconfirmedDataBlock::from_bitmsg(BitMessage::from_hex(hex).unwrap(), 0).unwrap());
    }
    seq
}
