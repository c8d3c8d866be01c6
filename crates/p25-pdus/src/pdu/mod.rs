//! Multi-block packet data units: header, data blocks, sequence assembly and the
//! trunking control messages carried in them.

pub mod ambtc;
pub mod assembler;
pub mod data_block;
pub mod enums;
pub mod header;
pub mod packet_sequence;
pub mod umbtc;

#[cfg(test)]
pub(crate) mod test_util;

use core::fmt;

use p25_core::Nac;

use packet_sequence::PacketSequence;

/// Width the message stub is padded to before the decoded fields
const STUB_WIDTH: usize = 30;

/// Writes `NAC:<nac> <family> <opcode>` padded to a fixed width, plus the incomplete marker when
/// blocks are missing.
pub(crate) fn fmt_sequence_stub(
    f: &mut fmt::Formatter,
    nac: Nac,
    family: &str,
    opcode: impl fmt::Display,
    sequence: &PacketSequence,
) -> fmt::Result {
    let stub = format!("NAC:{} {} {}", nac, family, opcode);
    write!(f, "{:<width$}", stub, width = STUB_WIDTH)?;
    if !sequence.is_complete() {
        write!(
            f,
            " *INCOMPLETE - RECEIVED {}/{} DATA BLOCKS",
            sequence.received_blocks(),
            sequence.expected_blocks()
        )?;
    }
    Ok(())
}

/// Fallback summary for sequences without a decoder
pub(crate) fn fmt_unknown(f: &mut fmt::Formatter, sequence: &PacketSequence) -> fmt::Result {
    write!(
        f,
        " {} DATA BLOCKS:{}",
        sequence.header(),
        sequence.received_blocks()
    )?;
    if sequence.received_blocks() > 0 {
        write!(f, " MSG:{}", sequence.to_hex_string())?;
    }
    Ok(())
}
