//! Network topology identifiers: WACN, system, RF subsystem, site and registration area.

use std::fmt;

/// Wide Area Communications Network id, 20 bits
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wacn(pub u32);

/// System id within a WACN, 12 bits
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SystemId(pub u16);

/// RF subsystem id within a system
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rfss(pub u8);

/// Site id within an RF subsystem
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Site(pub u8);

/// Location registration area
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lra(pub u8);

impl fmt::Display for Wacn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05X}", self.0)
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03X}", self.0)
    }
}

impl fmt::Display for Rfss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Lra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}
