//! Telephone interconnect fields shared by link control words, TSBKs and multi-block messages

use core::fmt;

use p25_core::BitMessage;
use p25_core::identifier::{Digit, Identifier, Role, Talkgroup, TelephoneNumber};

use crate::common::MessageBody;

/// Call timer fields count in 100 ms units
pub const CALL_TIMER_UNIT_MS: u64 = 100;

/// Convert a raw call timer field into milliseconds
pub fn call_timer_ms(raw: u16) -> u64 {
    raw as u64 * CALL_TIMER_UNIT_MS
}

/// Number of dialed digits in an answer request
const ANSWER_REQUEST_DIGITS: usize = 10;

/// Telephone interconnect answer request: a landline party calling a radio.
/// LC carries the digits at bit 8, TSBK at bit 16; the 24-bit target follows the digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneInterconnectAnswerRequest {
    /// Up to 10 digits, terminated by the first 0xF filler nibble
    pub telephone_number: TelephoneNumber,
    pub target_address: Talkgroup,
}

impl TelephoneInterconnectAnswerRequest {
    pub fn from_bitmsg_at(msg: &BitMessage, offset: usize) -> Self {
        let telephone_number = (0..ANSWER_REQUEST_DIGITS)
            .map(|d| {
                let start = offset + d * 4;
                msg.get_int_range(start, start + 3) as u8
            })
            .take_while(|&code| code != 0xF)
            .map(|code| Digit::decode(Some(code)))
            .collect();

        let target_start = offset + ANSWER_REQUEST_DIGITS * 4;
        TelephoneInterconnectAnswerRequest {
            telephone_number,
            target_address: Talkgroup::individual(msg.get_int_range(target_start, target_start + 23), Role::To),
        }
    }

    pub fn fmt_summary(&self, f: &mut fmt::Formatter, label: impl fmt::Display) -> fmt::Result {
        write!(f, "{} TO:{} TELEPHONE:{}", label, self.target_address, self.telephone_number)
    }
}

impl MessageBody for TelephoneInterconnectAnswerRequest {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            self.target_address.into(),
            Identifier::TelephoneNumber(self.telephone_number.clone(), Role::From),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_timer_scaling() {
        assert_eq!(call_timer_ms(50), 5000);
        assert_eq!(call_timer_ms(0), 0);
        assert_eq!(call_timer_ms(u16::MAX), 6_553_500);
    }

    #[test]
    fn test_answer_request_digits_lc_offset() {
        // digits 5,5,5,0,1,2,3 then filler
        let msg = BitMessage::from_hex("075550123FFF000456").unwrap();
        let pdu = TelephoneInterconnectAnswerRequest::from_bitmsg_at(&msg, 8);
        assert_eq!(pdu.telephone_number.to_string(), "5550123");
        assert_eq!(pdu.target_address.value, 0x456);
        assert_eq!(pdu.identifiers().len(), 2);
    }

    #[test]
    fn test_answer_request_all_ten_digits() {
        let msg = BitMessage::from_hex("0A0001234567890000010000").unwrap();
        let pdu = TelephoneInterconnectAnswerRequest::from_bitmsg_at(&msg, 16);
        assert_eq!(pdu.telephone_number.to_string(), "0123456789");
        assert_eq!(pdu.target_address.value, 1);
    }
}
