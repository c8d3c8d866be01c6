use std::fmt;

/// Message direction relative to the fixed network.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum Direction {
    /// Inbound signaling packet, subscriber to network
    Isp,
    /// Outbound signaling packet, network to subscriber
    Osp,
}

impl Direction {
    /// Header outbound flag (1 = outbound)
    #[inline]
    pub fn from_outbound_flag(outbound: bool) -> Self {
        if outbound { Direction::Osp } else { Direction::Isp }
    }

    #[inline]
    pub fn is_outbound(&self) -> bool {
        matches!(self, Direction::Osp)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Isp => write!(f, "ISP"),
            Direction::Osp => write!(f, "OSP"),
        }
    }
}
