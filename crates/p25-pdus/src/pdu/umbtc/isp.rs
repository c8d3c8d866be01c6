//! Inbound UMBTC requests

use core::fmt;

use p25_core::identifier::{Digit, Identifier, Role, Talkgroup, TelephoneNumber};
use p25_core::{BitMessage, ServiceOptions, bits};

use crate::common::MessageBody;
use crate::pdu::packet_sequence::PacketSequence;

const BLOCK_0_DIGIT_COUNT: [usize; 8] = bits::<8>(8);
const BLOCK_0_SERVICE_OPTIONS: [usize; 8] = bits::<8>(16);
const BLOCK_0_FIRST_DIGIT: usize = 24;
const BLOCK_0_MAX_DIGITS: usize = 18;
const MAX_DIGITS: usize = 34;

/// 4-bit code of the 1-based digit `index`, None when its block is missing or the index is out of range
fn digit_code(block_0: Option<&BitMessage>, block_1: Option<&BitMessage>, index: usize) -> Option<u8> {
    let (block, start) = match index {
        1..=BLOCK_0_MAX_DIGITS => (block_0?, BLOCK_0_FIRST_DIGIT + 4 * (index - 1)),
        19..=MAX_DIGITS => (block_1?, 4 * (index - 19)),
        _ => return None,
    };
    Some(block.get_int_range(start, start + 3) as u8)
}

/// ISP 0x08: subscriber dials a telephone number through the interconnect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneInterconnectRequestExplicitDialing {
    /// Header address
    pub source_address: Talkgroup,
    pub service_options: Option<ServiceOptions>,
    /// Dialed digits, present once block 0 arrived. Digits in a missing block are Unknown.
    pub telephone_number: Option<TelephoneNumber>,
}

impl TelephoneInterconnectRequestExplicitDialing {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let block_0 = seq.unconfirmed_message(0);
        let block_1 = seq.unconfirmed_message(1);

        let telephone_number = block_0.map(|b| {
            let count = b.get_int(&BLOCK_0_DIGIT_COUNT) as usize;
            if count > MAX_DIGITS {
                tracing::debug!("digit count {} exceeds {} digit capacity", count, MAX_DIGITS);
            }
            (1..=count)
                .map(|index| Digit::decode(digit_code(block_0, block_1, index)))
                .collect()
        });

        TelephoneInterconnectRequestExplicitDialing {
            source_address: Talkgroup::individual(seq.header().address, Role::From),
            service_options: block_0.map(|b| ServiceOptions::new(b.get_int(&BLOCK_0_SERVICE_OPTIONS) as u8)),
            telephone_number,
        }
    }
}

impl MessageBody for TelephoneInterconnectRequestExplicitDialing {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = vec![self.source_address.into()];
        if let Some(number) = &self.telephone_number {
            ids.push(Identifier::TelephoneNumber(number.clone(), Role::To));
        }
        ids
    }
}

impl fmt::Display for TelephoneInterconnectRequestExplicitDialing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FM:{}", self.source_address)?;
        if let Some(number) = &self.telephone_number {
            write!(f, " TO:{}", number)?;
        }
        if let Some(so) = self.service_options {
            write!(f, " SERVICE OPTIONS:{}", so)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::test_util::sequence;

    // inbound, unconfirmed, SAP 0x3D, LLID 0x00ABCD, 2 blocks
    const HEADER: &str = "157D0000ABCD820000000000";
    // opcode 0x08, 20 digits, SO 0x00, digits 1-18
    const BLOCK_0: &str = "081400123456789012345678";
    // digits 19-20
    const BLOCK_1: &str = "900000000000000000000000";

    #[test]
    fn test_digits_span_both_blocks() {
        let seq = sequence(HEADER, &[BLOCK_0, BLOCK_1]);
        let pdu = TelephoneInterconnectRequestExplicitDialing::from_sequence(&seq);
        let number = pdu.telephone_number.clone().unwrap();
        assert_eq!(number.len(), 20);
        assert_eq!(number.to_string(), "12345678901234567890");
        assert_eq!(pdu.to_string(), "FM:43981 TO:12345678901234567890 SERVICE OPTIONS:PRI:0");
    }

    #[test]
    fn test_digits_beyond_18_not_read_from_block_0() {
        // the leading nibbles of block 0 are 0 and 8; digits 19-20 must come from block 1
        let seq = sequence(HEADER, &[BLOCK_0, BLOCK_1]);
        let pdu = TelephoneInterconnectRequestExplicitDialing::from_sequence(&seq);
        let number = pdu.telephone_number.unwrap();
        assert_eq!(number.0[18], Digit::Number(9));
        assert_eq!(number.0[19], Digit::Number(0));
    }

    #[test]
    fn test_missing_block_1_digits_unknown() {
        let seq = sequence(HEADER, &[BLOCK_0]);
        let pdu = TelephoneInterconnectRequestExplicitDialing::from_sequence(&seq);
        assert_eq!(pdu.telephone_number.unwrap().to_string(), "123456789012345678??");
    }

    #[test]
    fn test_digit_count_past_capacity() {
        // count 36: digits 35 and 36 have no bits
        let seq = sequence(HEADER, &["082400123456789012345678", "901234567890123400000000"]);
        let pdu = TelephoneInterconnectRequestExplicitDialing::from_sequence(&seq);
        let number = pdu.telephone_number.unwrap();
        assert_eq!(number.len(), 36);
        assert!(number.to_string().ends_with("1234??"));
    }

    #[test]
    fn test_header_only() {
        let seq = sequence(HEADER, &[]);
        let pdu = TelephoneInterconnectRequestExplicitDialing::from_sequence(&seq);
        assert_eq!(pdu.telephone_number, None);
        assert_eq!(pdu.service_options, None);
        assert_eq!(pdu.identifiers().len(), 1);
        assert_eq!(pdu.to_string(), "FM:43981");
    }
}
