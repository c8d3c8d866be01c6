//! One surface over every decoded message family.

use core::fmt;

use p25_core::identifier::{Channel, Identifier};
use p25_core::{Nac, Timestamp};

use crate::lc::LinkControlWord;
use crate::pdu::ambtc::AmbtcMessage;
use crate::pdu::umbtc::UmbtcMessage;
use crate::tsbk::Tsbk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum P25Message {
    Lc(LinkControlWord),
    Tsbk(Tsbk),
    Ambtc(AmbtcMessage),
    Umbtc(UmbtcMessage),
}

impl P25Message {
    pub fn identifiers(&self) -> Vec<Identifier> {
        match self {
            P25Message::Lc(m) => m.identifiers(),
            P25Message::Tsbk(m) => m.identifiers(),
            P25Message::Ambtc(m) => m.identifiers(),
            P25Message::Umbtc(m) => m.identifiers(),
        }
    }

    pub fn channels(&self) -> Vec<Channel> {
        match self {
            P25Message::Lc(m) => m.channels(),
            P25Message::Tsbk(m) => m.channels(),
            P25Message::Ambtc(m) => m.channels(),
            P25Message::Umbtc(m) => m.channels(),
        }
    }

    pub fn nac(&self) -> Nac {
        match self {
            P25Message::Lc(m) => m.nac,
            P25Message::Tsbk(m) => m.nac,
            P25Message::Ambtc(m) => m.nac,
            P25Message::Umbtc(m) => m.nac,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            P25Message::Lc(m) => m.timestamp,
            P25Message::Tsbk(m) => m.timestamp,
            P25Message::Ambtc(m) => m.timestamp,
            P25Message::Umbtc(m) => m.timestamp,
        }
    }

    pub fn bit_errors_count(&self) -> usize {
        match self {
            P25Message::Lc(m) => m.bit_errors,
            P25Message::Tsbk(m) => m.bit_errors,
            P25Message::Ambtc(m) => m.bit_errors_count(),
            P25Message::Umbtc(m) => m.bit_errors_count(),
        }
    }

    /// Multi-block messages count encoded bits per block; single blocks count their decoded length
    pub fn bits_processed_count(&self) -> usize {
        match self {
            P25Message::Lc(m) => m.message.len(),
            P25Message::Tsbk(m) => m.message.len(),
            P25Message::Ambtc(m) => m.bits_processed_count(),
            P25Message::Umbtc(m) => m.bits_processed_count(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            P25Message::Lc(m) => m.is_valid(),
            P25Message::Tsbk(m) => m.is_valid(),
            P25Message::Ambtc(m) => m.is_valid(),
            P25Message::Umbtc(m) => m.is_valid(),
        }
    }
}

impl From<LinkControlWord> for P25Message {
    fn from(m: LinkControlWord) -> Self {
        P25Message::Lc(m)
    }
}

impl From<Tsbk> for P25Message {
    fn from(m: Tsbk) -> Self {
        P25Message::Tsbk(m)
    }
}

impl From<AmbtcMessage> for P25Message {
    fn from(m: AmbtcMessage) -> Self {
        P25Message::Ambtc(m)
    }
}

impl From<UmbtcMessage> for P25Message {
    fn from(m: UmbtcMessage) -> Self {
        P25Message::Umbtc(m)
    }
}

impl fmt::Display for P25Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            P25Message::Lc(m) => write!(f, "{}", m),
            P25Message::Tsbk(m) => write!(f, "{}", m),
            P25Message::Ambtc(m) => write!(f, "{}", m),
            P25Message::Umbtc(m) => write!(f, "{}", m),
        }
    }
}
