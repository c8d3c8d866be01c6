//! Typed identifiers extracted from decoded messages.
//!
//! Identifiers are immutable values built from raw field integers. A decoded
//! message exposes an ordered list of them; optional identifiers whose presence
//! condition is false are omitted from that list rather than carried as empty.

use std::fmt;

pub mod channel;
pub mod format;
pub mod network;
pub mod patch_group;
pub mod talkgroup;
pub mod telephone;

pub use channel::Channel;
pub use format::{IdentifierFormatter, IntegerFormat};
pub use network::{Lra, Rfss, Site, SystemId, Wacn};
pub use patch_group::PatchGroup;
pub use talkgroup::{Talkgroup, TalkgroupKind};
pub use telephone::{Digit, TelephoneNumber};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    Apco25,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Apco25 => write!(f, "APCO-25"),
        }
    }
}

/// Side of the transaction an identifier refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Any,
    From,
    To,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => write!(f, "ANY"),
            Role::From => write!(f, "FROM"),
            Role::To => write!(f, "TO"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identifier {
    Talkgroup(Talkgroup),
    PatchGroup(PatchGroup),
    Wacn(Wacn),
    SystemId(SystemId),
    Rfss(Rfss),
    Site(Site),
    Lra(Lra),
    TelephoneNumber(TelephoneNumber, Role),
}

impl Identifier {
    pub fn protocol(&self) -> Protocol {
        Protocol::Apco25
    }

    pub fn role(&self) -> Role {
        match self {
            Identifier::Talkgroup(tg) => tg.role,
            Identifier::PatchGroup(pg) => pg.patch_group.role,
            Identifier::TelephoneNumber(_, role) => *role,
            Identifier::Wacn(_) | Identifier::SystemId(_) | Identifier::Rfss(_) | Identifier::Site(_) | Identifier::Lra(_) => {
                Role::Any
            }
        }
    }

    pub fn as_talkgroup(&self) -> Option<&Talkgroup> {
        match self {
            Identifier::Talkgroup(tg) => Some(tg),
            _ => None,
        }
    }
}

impl From<Talkgroup> for Identifier {
    fn from(tg: Talkgroup) -> Self {
        Identifier::Talkgroup(tg)
    }
}

impl From<PatchGroup> for Identifier {
    fn from(pg: PatchGroup) -> Self {
        Identifier::PatchGroup(pg)
    }
}

impl From<Wacn> for Identifier {
    fn from(v: Wacn) -> Self {
        Identifier::Wacn(v)
    }
}

impl From<SystemId> for Identifier {
    fn from(v: SystemId) -> Self {
        Identifier::SystemId(v)
    }
}

impl From<Rfss> for Identifier {
    fn from(v: Rfss) -> Self {
        Identifier::Rfss(v)
    }
}

impl From<Site> for Identifier {
    fn from(v: Site) -> Self {
        Identifier::Site(v)
    }
}

impl From<Lra> for Identifier {
    fn from(v: Lra) -> Self {
        Identifier::Lra(v)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Talkgroup(tg) => write!(f, "{}", tg),
            Identifier::PatchGroup(pg) => write!(f, "{}", pg),
            Identifier::Wacn(v) => write!(f, "{}", v),
            Identifier::SystemId(v) => write!(f, "{}", v),
            Identifier::Rfss(v) => write!(f, "{}", v),
            Identifier::Site(v) => write!(f, "{}", v),
            Identifier::Lra(v) => write!(f, "{}", v),
            Identifier::TelephoneNumber(n, _) => write!(f, "{}", n),
        }
    }
}

/// Appends `id` unless an equal identifier is already listed.
pub fn push_unique(list: &mut Vec<Identifier>, id: impl Into<Identifier>) {
    let id = id.into();
    if !list.contains(&id) {
        list.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        let id: Identifier = Talkgroup::individual(42, Role::From).into();
        assert_eq!(id.role(), Role::From);
        assert_eq!(id.protocol(), Protocol::Apco25);
        assert_eq!(Identifier::Wacn(Wacn(1)).role(), Role::Any);
    }

    #[test]
    fn test_push_unique() {
        let mut list = Vec::new();
        push_unique(&mut list, Talkgroup::group(5, Role::To));
        push_unique(&mut list, Talkgroup::group(5, Role::To));
        push_unique(&mut list, Talkgroup::group(5, Role::From));
        assert_eq!(list.len(), 2);
    }
}
