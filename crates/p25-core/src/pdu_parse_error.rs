use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PduParseErr {
    InvalidPduType { expected: u64, found: u64 },
    BufferEnded { field: Option<&'static str> },
    InvalidValue { field: &'static str, value: u64 },
    InconsistentLength { expected: usize, found: usize },
}

impl fmt::Display for PduParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PduParseErr::InvalidPduType { expected, found } => {
                write!(f, "invalid pdu type: expected 0x{:02X}, found 0x{:02X}", expected, found)
            }
            PduParseErr::BufferEnded { field: Some(field) } => write!(f, "buffer ended while reading {}", field),
            PduParseErr::BufferEnded { field: None } => write!(f, "buffer ended"),
            PduParseErr::InvalidValue { field, value } => write!(f, "invalid value {} for {}", value, field),
            PduParseErr::InconsistentLength { expected, found } => {
                write!(f, "inconsistent length: expected {} bits, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for PduParseErr {}

/// Checks whether a PDU type value matches the expected value. If not, returns PduParseErr::InvalidPduType
#[macro_export]
macro_rules! expect_pdu_type {
    ($value:expr, $expected:expr) => {{
        let raw_expected = $expected.into_raw();
        if $value == raw_expected {
            Ok(())
        } else {
            Err($crate::PduParseErr::InvalidPduType {
                expected: raw_expected as u64,
                found: $value as u64,
            })
        }
    }};
}

/// Checks that a message carries exactly the number of bits its layout requires.
/// If not, returns PduParseErr::InconsistentLength
#[macro_export]
macro_rules! expect_len {
    ($msg:expr, $expected:expr) => {{
        let found = $msg.len();
        if found == $expected {
            Ok(())
        } else {
            Err($crate::PduParseErr::InconsistentLength { expected: $expected, found })
        }
    }};
}

/// Checks that a message carries at least the number of bits its layout requires.
#[macro_export]
macro_rules! expect_min_len {
    ($msg:expr, $expected:expr) => {{
        let found = $msg.len();
        if found >= $expected {
            Ok(())
        } else {
            Err($crate::PduParseErr::InconsistentLength { expected: $expected, found })
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitMessage;

    #[test]
    fn test_expect_len() {
        let msg = BitMessage::new(72);
        assert_eq!(expect_len!(msg, 72), Ok(()));
        assert_eq!(
            expect_len!(msg, 96),
            Err(PduParseErr::InconsistentLength { expected: 96, found: 72 })
        );
        assert_eq!(expect_min_len!(msg, 64), Ok(()));
    }

    #[test]
    fn test_display() {
        let e = PduParseErr::InvalidPduType { expected: 0x17, found: 0x15 };
        assert_eq!(e.to_string(), "invalid pdu type: expected 0x17, found 0x15");
    }
}
