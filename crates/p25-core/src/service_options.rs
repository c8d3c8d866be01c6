use std::fmt;

/// Per-call service options octet carried by voice grants and channel users.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ServiceOptions(u8);

impl ServiceOptions {
    pub fn new(raw: u8) -> Self {
        ServiceOptions(raw)
    }

    pub fn into_raw(self) -> u8 {
        self.0
    }

    pub fn is_emergency(&self) -> bool {
        self.0 & 0x80 != 0
    }

    /// Call is encrypted
    pub fn is_encrypted(&self) -> bool {
        self.0 & 0x40 != 0
    }

    pub fn is_full_duplex(&self) -> bool {
        self.0 & 0x20 != 0
    }

    /// Packet mode as opposed to circuit mode
    pub fn is_packet_mode(&self) -> bool {
        self.0 & 0x10 != 0
    }

    /// Priority level 0-7, higher is more important
    pub fn priority(&self) -> u8 {
        self.0 & 0x07
    }
}

impl fmt::Display for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_emergency() {
            write!(f, "EMERGENCY ")?;
        }
        if self.is_encrypted() {
            write!(f, "ENCRYPTED ")?;
        }
        if self.is_full_duplex() {
            write!(f, "FULL DUPLEX ")?;
        }
        if self.is_packet_mode() {
            write!(f, "PACKET ")?;
        }
        write!(f, "PRI:{}", self.priority())
    }
}

/// Services offered by a site, as advertised in status broadcasts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SystemServices(u8);

impl SystemServices {
    pub fn new(raw: u8) -> Self {
        SystemServices(raw)
    }

    pub fn into_raw(self) -> u8 {
        self.0
    }

    pub fn is_composite_control(&self) -> bool {
        self.0 & 0x01 != 0
    }
    pub fn is_updates_only(&self) -> bool {
        self.0 & 0x02 != 0
    }
    pub fn is_backup_control(&self) -> bool {
        self.0 & 0x04 != 0
    }
    pub fn has_data(&self) -> bool {
        self.0 & 0x10 != 0
    }
    pub fn has_voice(&self) -> bool {
        self.0 & 0x20 != 0
    }
    pub fn has_registration(&self) -> bool {
        self.0 & 0x40 != 0
    }
    pub fn has_authentication(&self) -> bool {
        self.0 & 0x80 != 0
    }
}

impl fmt::Display for SystemServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.is_composite_control(), "COMPOSITE"),
            (self.is_updates_only(), "UPDATES ONLY"),
            (self.is_backup_control(), "BACKUP"),
            (self.has_data(), "DATA"),
            (self.has_voice(), "VOICE"),
            (self.has_registration(), "REGISTRATION"),
            (self.has_authentication(), "AUTHENTICATION"),
        ];
        let names: Vec<&str> = flags.iter().filter(|(set, _)| *set).map(|(_, name)| *name).collect();
        write!(f, "SERVICES:[{}]", names.join(","))
    }
}

/// 4-bit status flags of an adjacent site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SiteFlags(u8);

impl SiteFlags {
    pub fn new(raw: u8) -> Self {
        assert!(raw >> 4 == 0, "site flags are 4 bits, got {}", raw);
        SiteFlags(raw)
    }

    /// Conventional site, no trunking
    pub fn is_conventional(&self) -> bool {
        self.0 & 0b1000 != 0
    }
    pub fn is_failure(&self) -> bool {
        self.0 & 0b0100 != 0
    }
    /// Information is current, i.e. the broadcasting site is in contact with the adjacent site
    pub fn is_valid(&self) -> bool {
        self.0 & 0b0010 != 0
    }
    /// Site has an active connection to the RFSS controller
    pub fn is_active_network(&self) -> bool {
        self.0 & 0b0001 != 0
    }
}

impl fmt::Display for SiteFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_conventional() {
            write!(f, "CONVENTIONAL ")?;
        }
        if self.is_failure() {
            write!(f, "FAILURE ")?;
        }
        if self.is_valid() {
            write!(f, "VALID ")?;
        }
        if self.is_active_network() {
            write!(f, "NETWORKED ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_options_flags() {
        let so = ServiceOptions::new(0b1100_0101);
        assert!(so.is_emergency());
        assert!(so.is_encrypted());
        assert!(!so.is_full_duplex());
        assert!(!so.is_packet_mode());
        assert_eq!(so.priority(), 5);
        assert_eq!(so.to_string(), "EMERGENCY ENCRYPTED PRI:5");
    }

    #[test]
    fn test_service_options_plain() {
        assert_eq!(ServiceOptions::new(0x04).to_string(), "PRI:4");
        assert_eq!(ServiceOptions::new(0x30).to_string(), "FULL DUPLEX PACKET PRI:0");
    }

    #[test]
    fn test_system_services() {
        let ss = SystemServices::new(0x71);
        assert!(ss.is_composite_control());
        assert!(ss.has_data());
        assert!(ss.has_voice());
        assert!(ss.has_registration());
        assert!(!ss.has_authentication());
        assert_eq!(ss.to_string(), "SERVICES:[COMPOSITE,DATA,VOICE,REGISTRATION]");
    }

    #[test]
    fn test_site_flags() {
        let flags = SiteFlags::new(0b0011);
        assert!(flags.is_valid());
        assert!(flags.is_active_network());
        assert!(!flags.is_failure());
        assert_eq!(flags.to_string(), "VALID NETWORKED ");
    }
}
