pub mod broadcast;
pub mod control;
pub mod telephone;
pub mod voice;

use p25_core::bits;
use p25_core::identifier::Wacn;

use crate::pdu::packet_sequence::PacketSequence;

const HEADER_SOURCE_WACN: [usize; 16] = bits::<16>(64);
const BLOCK_0_SOURCE_WACN: [usize; 4] = bits::<4>(0);

/// Source WACN split across header (high 16 bits) and block 0 (low 4 bits).
/// Absent until block 0 arrives.
pub(crate) fn source_wacn(seq: &PacketSequence) -> Option<Wacn> {
    let block_0 = seq.unconfirmed_message(0)?;
    let high = seq.header().message.get_int(&HEADER_SOURCE_WACN);
    Some(Wacn((high << 4) + block_0.get_int(&BLOCK_0_SOURCE_WACN)))
}
