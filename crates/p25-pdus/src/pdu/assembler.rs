use crate::pdu::data_block::DataBlock;
use crate::pdu::header::PduHeader;
use crate::pdu::packet_sequence::PacketSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    AwaitingHeader,
    Accumulating,
    Complete,
}

/// Collects one packet sequence at a time from a single channel.
/// No timeouts: the transport calls `end_of_sequence` when the carrier drops.
#[derive(Debug, Default)]
pub struct PacketSequenceAssembler {
    sequence: Option<PacketSequence>,
}

impl PacketSequenceAssembler {
    pub fn new() -> Self {
        Self { sequence: None }
    }

    pub fn state(&self) -> AssemblerState {
        match &self.sequence {
            None => AssemblerState::AwaitingHeader,
            Some(seq) if seq.is_complete() => AssemblerState::Complete,
            Some(_) => AssemblerState::Accumulating,
        }
    }

    pub fn reset(&mut self) {
        self.sequence = None;
    }

    /// Opens a new sequence. A sequence still held is discarded.
    pub fn receive_header(&mut self, header: PduHeader) -> AssemblerState {
        if let Some(old) = &self.sequence {
            tracing::warn!(
                "discarding sequence for llid {} in state {:?}, received {}/{} blocks",
                old.header().address,
                old.state(),
                old.received_blocks(),
                old.expected_blocks()
            );
        }

        tracing::debug!("sequence start: {}", header);
        self.sequence = Some(PacketSequence::new(header));
        self.state()
    }

    pub fn receive_data_block(&mut self, block: impl Into<DataBlock>) -> AssemblerState {
        let Some(seq) = self.sequence.as_mut() else {
            tracing::warn!("data block without header, dropped");
            return AssemblerState::AwaitingHeader;
        };

        seq.add_block(block);
        tracing::debug!("sequence block {}/{}", seq.received_blocks(), seq.expected_blocks());
        self.state()
    }

    /// Transfers the finished sequence to the caller and awaits the next header.
    pub fn take_sequence(&mut self) -> Option<PacketSequence> {
        if self.state() != AssemblerState::Complete {
            tracing::warn!("sequence not complete (state: {:?})", self.state());
            return None;
        }
        self.sequence.take()
    }

    /// Transport signaled the end of the transmission: hands back whatever was accumulated.
    pub fn end_of_sequence(&mut self) -> Option<PacketSequence> {
        let seq = self.sequence.take();
        if let Some(seq) = &seq {
            if !seq.is_complete() {
                tracing::debug!(
                    "end of sequence with {}/{} blocks",
                    seq.received_blocks(),
                    seq.expected_blocks()
                );
            }
        }
        seq
    }
}

#[cfg(test)]
mod tests {
    use p25_core::{BitMessage, debug};

    use super::*;
    use crate::pdu::data_block::UnconfirmedDataBlock;

    fn header(blocks_to_follow: u32) -> PduHeader {
        let mut msg = BitMessage::from_hex("377D00000123800000000000").unwrap();
        msg.set_int_range(blocks_to_follow, 49, 55);
        PduHeader::from_bitmsg(msg).unwrap()
    }

    fn block() -> UnconfirmedDataBlock {
        UnconfirmedDataBlock::from_bitmsg(BitMessage::new(96), 0).unwrap()
    }

    #[test]
    fn test_two_block_sequence() {
        debug::setup_logging_verbose();
        let mut assembler = PacketSequenceAssembler::new();
        assert_eq!(assembler.state(), AssemblerState::AwaitingHeader);
        assert_eq!(assembler.receive_header(header(2)), AssemblerState::Accumulating);
        assert!(assembler.take_sequence().is_none());
        assert_eq!(assembler.receive_data_block(block()), AssemblerState::Accumulating);
        assert_eq!(assembler.receive_data_block(block()), AssemblerState::Complete);

        let seq = assembler.take_sequence().unwrap();
        assert!(seq.is_complete());
        assert_eq!(seq.received_blocks(), 2);
        assert_eq!(assembler.state(), AssemblerState::AwaitingHeader);
    }

    #[test]
    fn test_block_without_header_dropped() {
        debug::setup_logging_verbose();
        let mut assembler = PacketSequenceAssembler::new();
        assert_eq!(assembler.receive_data_block(block()), AssemblerState::AwaitingHeader);
        assert!(assembler.end_of_sequence().is_none());
    }

    #[test]
    fn test_end_of_sequence_hands_back_partial() {
        debug::setup_logging_verbose();
        let mut assembler = PacketSequenceAssembler::new();
        assembler.receive_header(header(3));
        assembler.receive_data_block(block());

        let seq = assembler.end_of_sequence().unwrap();
        assert!(!seq.is_complete());
        assert_eq!(seq.received_blocks(), 1);
        assert_eq!(assembler.state(), AssemblerState::AwaitingHeader);
    }

    #[test]
    fn test_new_header_discards_open_sequence() {
        debug::setup_logging_verbose();
        let mut assembler = PacketSequenceAssembler::new();
        assembler.receive_header(header(3));
        assembler.receive_data_block(block());
        assert_eq!(assembler.receive_header(header(0)), AssemblerState::Complete);

        let seq = assembler.take_sequence().unwrap();
        assert_eq!(seq.received_blocks(), 0);
    }
}
