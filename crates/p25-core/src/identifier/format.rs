use serde::Deserialize;

use super::Identifier;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum IntegerFormat {
    #[default]
    Decimal,
    Hexadecimal,
}

/// Renders identifiers according to user display preferences.
/// Only talkgroups are affected; everything else uses its Display impl.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct IdentifierFormatter {
    pub talkgroup_format: IntegerFormat,
    pub talkgroup_fixed_width: bool,
}

impl IdentifierFormatter {
    pub fn new(talkgroup_format: IntegerFormat, talkgroup_fixed_width: bool) -> Self {
        IdentifierFormatter {
            talkgroup_format,
            talkgroup_fixed_width,
        }
    }

    pub fn format(&self, identifier: &Identifier) -> String {
        match identifier {
            Identifier::Talkgroup(tg) => tg.format(self.talkgroup_format, self.talkgroup_fixed_width),
            Identifier::PatchGroup(pg) => {
                let patched: Vec<String> = pg
                    .patched_groups()
                    .iter()
                    .map(|tg| tg.format(self.talkgroup_format, self.talkgroup_fixed_width))
                    .collect();
                format!(
                    "P:{}[{}]",
                    pg.patch_group.format(self.talkgroup_format, self.talkgroup_fixed_width),
                    patched.join(",")
                )
            }
            other => other.to_string(),
        }
    }
}
