//! Site and network status broadcasts.
//!
//! Link control words and TSBKs carry the same broadcast layouts; the TSBK variant is
//! shifted 8 bits further into the message. Each decoder takes the bit offset of the
//! field block (8 for LC, 16 for TSBK) and reads relative to it.

use core::fmt;

use p25_core::identifier::{Channel, Identifier, Lra, Rfss, Site, SystemId, Wacn};
use p25_core::{BitMessage, SiteFlags, SystemServices};

use crate::common::MessageBody;

/// Secondary control channel broadcast: up to two alternate control channels of the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryControlChannelBroadcast {
    pub rfss: Rfss,
    pub site: Site,
    pub channel_a: Channel,
    pub services_a: SystemServices,
    /// Present when the raw channel B field is non-zero
    pub channel_b: Option<Channel>,
    pub services_b: Option<SystemServices>,
}

impl SecondaryControlChannelBroadcast {
    pub fn from_bitmsg_at(msg: &BitMessage, offset: usize) -> Self {
        let raw_channel_b = msg.get_int_range(offset + 40, offset + 55) as u16;
        let has_b = raw_channel_b != 0;
        SecondaryControlChannelBroadcast {
            rfss: Rfss(msg.get_int_range(offset, offset + 7) as u8),
            site: Site(msg.get_int_range(offset + 8, offset + 15) as u8),
            channel_a: Channel::from_packed(msg.get_int_range(offset + 16, offset + 31) as u16),
            services_a: SystemServices::new(msg.get_int_range(offset + 32, offset + 39) as u8),
            channel_b: has_b.then(|| Channel::from_packed(raw_channel_b)),
            services_b: has_b.then(|| SystemServices::new(msg.get_int_range(offset + 56, offset + 63) as u8)),
        }
    }

    pub fn fmt_summary(&self, f: &mut fmt::Formatter, label: impl fmt::Display) -> fmt::Result {
        write!(
            f,
            "{} RFSS:{} SITE:{} CHAN A:{} {}",
            label, self.rfss, self.site, self.channel_a, self.services_a
        )?;
        if let (Some(channel_b), Some(services_b)) = (self.channel_b, self.services_b) {
            write!(f, " CHAN B:{} {}", channel_b, services_b)?;
        }
        Ok(())
    }
}

impl MessageBody for SecondaryControlChannelBroadcast {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.rfss.into(), self.site.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        let mut channels = vec![self.channel_a];
        channels.extend(self.channel_b);
        channels
    }
}

/// Adjacent site / RFSS status broadcast. For RFSS status only the active network
/// flag is defined; the remaining flag bits are reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatusBroadcast {
    pub lra: Lra,
    pub flags: SiteFlags,
    pub system: SystemId,
    pub rfss: Rfss,
    pub site: Site,
    pub channel: Channel,
    pub services: SystemServices,
}

impl SiteStatusBroadcast {
    pub fn from_bitmsg_at(msg: &BitMessage, offset: usize) -> Self {
        SiteStatusBroadcast {
            lra: Lra(msg.get_int_range(offset, offset + 7) as u8),
            flags: SiteFlags::new(msg.get_int_range(offset + 8, offset + 11) as u8),
            system: SystemId(msg.get_int_range(offset + 12, offset + 23) as u16),
            rfss: Rfss(msg.get_int_range(offset + 24, offset + 31) as u8),
            site: Site(msg.get_int_range(offset + 32, offset + 39) as u8),
            channel: Channel::from_packed(msg.get_int_range(offset + 40, offset + 55) as u16),
            services: SystemServices::new(msg.get_int_range(offset + 56, offset + 63) as u8),
        }
    }

    pub fn fmt_summary(&self, f: &mut fmt::Formatter, label: impl fmt::Display) -> fmt::Result {
        write!(
            f,
            "{} LRA:{} SYSTEM:{} RFSS:{} SITE:{} CHAN:{} {}{}",
            label, self.lra, self.system, self.rfss, self.site, self.channel, self.flags, self.services
        )
    }
}

impl MessageBody for SiteStatusBroadcast {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.lra.into(), self.system.into(), self.rfss.into(), self.site.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

/// Network status broadcast: WACN and system of the control channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatusBroadcast {
    pub lra: Lra,
    pub wacn: Wacn,
    pub system: SystemId,
    pub channel: Channel,
    pub services: SystemServices,
}

impl NetworkStatusBroadcast {
    pub fn from_bitmsg_at(msg: &BitMessage, offset: usize) -> Self {
        NetworkStatusBroadcast {
            lra: Lra(msg.get_int_range(offset, offset + 7) as u8),
            wacn: Wacn(msg.get_int_range(offset + 8, offset + 27)),
            system: SystemId(msg.get_int_range(offset + 28, offset + 39) as u16),
            channel: Channel::from_packed(msg.get_int_range(offset + 40, offset + 55) as u16),
            services: SystemServices::new(msg.get_int_range(offset + 56, offset + 63) as u8),
        }
    }

    pub fn fmt_summary(&self, f: &mut fmt::Formatter, label: impl fmt::Display) -> fmt::Result {
        write!(
            f,
            "{} LRA:{} WACN:{} SYSTEM:{} CHAN:{} {}",
            label, self.lra, self.wacn, self.system, self.channel, self.services
        )
    }
}

impl MessageBody for NetworkStatusBroadcast {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.lra.into(), self.wacn.into(), self.system.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}
