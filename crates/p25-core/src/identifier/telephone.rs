use std::fmt;

/// One dialed symbol, decoded from a 4-bit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Digit {
    Number(u8),
    Star,
    Pound,
    HookFlash,
    Pause,
    Unknown,
}

impl Digit {
    /// Map a 4-bit code to its symbol. An absent code (block not received or
    /// index out of range) yields `Unknown`.
    pub fn decode(raw: Option<u8>) -> Self {
        match raw {
            Some(n @ 0..=9) => Digit::Number(n),
            Some(0xA) => Digit::Star,
            Some(0xB) => Digit::Pound,
            Some(0xC) => Digit::HookFlash,
            Some(0xD) => Digit::Pause,
            _ => Digit::Unknown,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Digit::Number(n) => (b'0' + n) as char,
            Digit::Star => '*',
            Digit::Pound => '#',
            Digit::HookFlash => 'H',
            Digit::Pause => 'P',
            Digit::Unknown => '?',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct TelephoneNumber(pub Vec<Digit>);

impl TelephoneNumber {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Digit> for TelephoneNumber {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        TelephoneNumber(iter.into_iter().collect())
    }
}

impl fmt::Display for TelephoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{}", digit.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table() {
        let number: TelephoneNumber = [Some(5), Some(0xA), Some(0xB), Some(0xC), Some(0xD), Some(0xE), None]
            .into_iter()
            .map(Digit::decode)
            .collect();
        assert_eq!(number.to_string(), "5*#HP??");
        assert_eq!(number.len(), 7);
    }
}
