use p25_core::BitMessage;
use p25_pdus::pdu::data_block::UnconfirmedDataBlock;
use p25_pdus::pdu::header::PduHeader;
use p25_pdus::pdu::packet_sequence::PacketSequence;
use p25_pdus::{AssemblerState, PacketSequenceAssembler};

pub const TEST_NAC: u16 = 0x293;

pub fn header(hex: &str) -> PduHeader {
    PduHeader::from_bitmsg(BitMessage::from_hex(hex).unwrap()).unwrap()
}

pub fn block(hex: &str) -> UnconfirmedDataBlock {
    UnconfirmedDataBlock::from_bitmsg(BitMessage::from_hex(hex).unwrap(), 0).unwrap()
}

/// Runs a header and its blocks through an assembler the way a channel decoder would,
/// and returns whatever the assembler holds at the end of the transmission.
pub fn feed(header_hex: &str, blocks: &[&str]) -> PacketSequence {
    let mut assembler = PacketSequenceAssembler::new();
    let mut state = assembler.receive_header(header(header_hex));
    for hex in blocks {
        assert_ne!(state, AssemblerState::AwaitingHeader);
        state = assembler.receive_data_block(block(hex));
    }
    if state == AssemblerState::Complete {
        assembler.take_sequence().unwrap()
    } else {
        assembler.end_of_sequence().unwrap()
    }
}
