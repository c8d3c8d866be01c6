use p25_core::identifier::{IdentifierFormatter, IntegerFormat};

/// Identifier display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CfgIdentifiers {
    pub talkgroup_format: IntegerFormat,
    /// Zero-pad talkgroups to the protocol width for their kind
    pub talkgroup_fixed_width: bool,
}

impl CfgIdentifiers {
    pub fn formatter(&self) -> IdentifierFormatter {
        IdentifierFormatter::new(self.talkgroup_format, self.talkgroup_fixed_width)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CfgDecoder {
    /// 12 bits, assumed when the feeding pipeline supplies no NAC
    pub default_nac: u16,
}

#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    pub debug_log: Option<String>,
    pub identifiers: CfgIdentifiers,
    pub decoder: CfgDecoder,
}

impl DecoderConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.decoder.default_nac > 0xFFF {
            return Err("default_nac must fit in 12 bits");
        }
        Ok(())
    }
}
