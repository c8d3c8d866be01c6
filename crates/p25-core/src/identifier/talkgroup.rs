use std::fmt;

use super::Role;
use super::format::IntegerFormat;

#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TalkgroupKind {
    /// 16-bit group address
    Group,
    /// 24-bit unit (radio) address
    Individual,
}

impl fmt::Display for TalkgroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalkgroupKind::Group => write!(f, "GROUP"),
            TalkgroupKind::Individual => write!(f, "UNIT"),
        }
    }
}

/// Group or radio address on the trunked network.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Talkgroup {
    pub value: u32,
    pub kind: TalkgroupKind,
    pub role: Role,
}

impl Talkgroup {
    pub const GROUP_DECIMAL_WIDTH: usize = 5;
    pub const UNIT_DECIMAL_WIDTH: usize = 8;
    pub const GROUP_HEXADECIMAL_WIDTH: usize = 4;
    pub const UNIT_HEXADECIMAL_WIDTH: usize = 6;

    pub fn group(value: u32, role: Role) -> Self {
        Talkgroup { value, kind: TalkgroupKind::Group, role }
    }

    pub fn individual(value: u32, role: Role) -> Self {
        Talkgroup { value, kind: TalkgroupKind::Individual, role }
    }

    /// Unit address with no particular role, e.g. a telephone interconnect party
    pub fn any(value: u32) -> Self {
        Self::individual(value, Role::Any)
    }

    pub fn is_group(&self) -> bool {
        self.kind == TalkgroupKind::Group
    }

    /// Render the value in the requested base, optionally zero padded to the
    /// protocol width for the address kind.
    pub fn format(&self, format: IntegerFormat, fixed_width: bool) -> String {
        match (format, fixed_width) {
            (IntegerFormat::Decimal, false) => self.value.to_string(),
            (IntegerFormat::Hexadecimal, false) => format!("{:X}", self.value),
            (IntegerFormat::Decimal, true) => {
                let width = if self.is_group() { Self::GROUP_DECIMAL_WIDTH } else { Self::UNIT_DECIMAL_WIDTH };
                format!("{:0width$}", self.value, width = width)
            }
            (IntegerFormat::Hexadecimal, true) => {
                let width = if self.is_group() { Self::GROUP_HEXADECIMAL_WIDTH } else { Self::UNIT_HEXADECIMAL_WIDTH };
                format!("{:0width$X}", self.value, width = width)
            }
        }
    }
}

impl fmt::Display for Talkgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
