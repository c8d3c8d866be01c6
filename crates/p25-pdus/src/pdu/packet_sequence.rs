use p25_core::BitMessage;

use crate::pdu::data_block::{BITS_PROCESSED_PER_BLOCK, ConfirmedDataBlock, DataBlock, UnconfirmedDataBlock};
use crate::pdu::header::PduHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    Accumulating { received: usize, expected: usize },
    Complete,
}

/// Header plus the data blocks received for it, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketSequence {
    header: PduHeader,
    blocks: Vec<DataBlock>,
}

impl PacketSequence {
    pub fn new(header: PduHeader) -> Self {
        let expected = header.blocks_to_follow as usize;
        PacketSequence {
            header,
            blocks: Vec::with_capacity(expected),
        }
    }

    pub fn header(&self) -> &PduHeader {
        &self.header
    }

    pub fn blocks(&self) -> &[DataBlock] {
        &self.blocks
    }

    /// Appends a block. Returns false and drops the block when the header's count is already reached.
    pub fn add_block(&mut self, block: impl Into<DataBlock>) -> bool {
        if self.is_complete() {
            tracing::warn!(
                "dropping data block beyond declared count {} for llid {}",
                self.expected_blocks(),
                self.header.address
            );
            return false;
        }
        self.blocks.push(block.into());
        true
    }

    pub fn expected_blocks(&self) -> usize {
        self.header.blocks_to_follow as usize
    }

    pub fn received_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn state(&self) -> SequenceState {
        if self.is_complete() {
            SequenceState::Complete
        } else {
            SequenceState::Accumulating {
                received: self.received_blocks(),
                expected: self.expected_blocks(),
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.received_blocks() >= self.expected_blocks()
    }

    pub fn has_errors(&self) -> bool {
        self.bit_errors_count() > 0
    }

    /// Corrected bit errors over header and all received blocks
    pub fn bit_errors_count(&self) -> usize {
        self.header.bit_errors + self.blocks.iter().map(DataBlock::bit_errors).sum::<usize>()
    }

    /// Encoded bits processed for header and all received blocks
    pub fn bits_processed_count(&self) -> usize {
        (1 + self.blocks.len()) * BITS_PROCESSED_PER_BLOCK
    }

    pub fn block(&self, index: usize) -> Option<&DataBlock> {
        self.blocks.get(index)
    }

    /// Unconfirmed block at `index`; None if not received or of the confirmed variant
    pub fn unconfirmed_block(&self, index: usize) -> Option<&UnconfirmedDataBlock> {
        match self.blocks.get(index)? {
            DataBlock::Unconfirmed(b) => Some(b),
            DataBlock::Confirmed(_) => {
                tracing::warn!("expected unconfirmed data block at index {}, found confirmed", index);
                None
            }
        }
    }

    /// Payload of the unconfirmed block at `index`
    pub fn unconfirmed_message(&self, index: usize) -> Option<&BitMessage> {
        self.unconfirmed_block(index).map(|b| &b.message)
    }

    /// Confirmed block at `index`; None if not received or of the unconfirmed variant
    pub fn confirmed_block(&self, index: usize) -> Option<&ConfirmedDataBlock> {
        match self.blocks.get(index)? {
            DataBlock::Confirmed(b) => Some(b),
            DataBlock::Unconfirmed(_) => {
                tracing::warn!("expected confirmed data block at index {}, found unconfirmed", index);
                None
            }
        }
    }

    /// Concatenated payload hex of all received blocks
    pub fn to_hex_string(&self) -> String {
        self.blocks.iter().map(|b| b.message().to_hex_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use p25_core::debug;

    use super::*;

    fn header(blocks_to_follow: u32) -> PduHeader {
        let mut msg = BitMessage::from_hex("377D00000123800000000000").unwrap();
        msg.set_int_range(blocks_to_follow, 49, 55);
        PduHeader::from_bitmsg(msg).unwrap().with_bit_errors(1)
    }

    fn block(hex: &str, bit_errors: usize) -> UnconfirmedDataBlock {
        UnconfirmedDataBlock::from_bitmsg(BitMessage::from_hex(hex).unwrap(), bit_errors).unwrap()
    }

    #[test]
    fn test_incomplete_sequence() {
        debug::setup_logging_verbose();
        let mut seq = PacketSequence::new(header(3));
        assert!(seq.add_block(block("000000000000000000000000", 0)));
        assert!(seq.add_block(block("111111111111111111111111", 2)));

        assert!(!seq.is_complete());
        assert_eq!(seq.state(), SequenceState::Accumulating { received: 2, expected: 3 });
        assert!(seq.unconfirmed_block(1).is_some());
        assert!(seq.unconfirmed_block(2).is_none());
        assert!(seq.confirmed_block(0).is_none());
        assert_eq!(seq.bit_errors_count(), 3);
        assert_eq!(seq.bits_processed_count(), 3 * 196);
        assert!(seq.has_errors());
    }

    #[test]
    fn test_extra_blocks_dropped() {
        debug::setup_logging_verbose();
        let mut seq = PacketSequence::new(header(1));
        assert!(seq.add_block(block("AAAAAAAAAAAAAAAAAAAAAAAA", 0)));
        assert_eq!(seq.state(), SequenceState::Complete);
        assert!(!seq.add_block(block("BBBBBBBBBBBBBBBBBBBBBBBB", 0)));
        assert_eq!(seq.received_blocks(), 1);
        assert_eq!(seq.to_hex_string(), "AAAAAAAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn test_header_only_sequence_is_complete() {
        let seq = PacketSequence::new(header(0));
        assert!(seq.is_complete());
        assert_eq!(seq.bits_processed_count(), 196);
    }
}
