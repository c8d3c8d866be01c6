use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use p25_core::identifier::IntegerFormat;
use serde::Deserialize;
use toml::Value;

use super::decoder_config::{CfgDecoder, CfgIdentifiers, DecoderConfig};

/// Build `DecoderConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref ids) = root.identifiers {
        if !ids.extra.is_empty() {
            return Err(format!("Unrecognized fields in identifiers: {:?}", sorted_keys(&ids.extra)).into());
        }
    }
    if let Some(ref dec) = root.decoder {
        if !dec.extra.is_empty() {
            return Err(format!("Unrecognized fields in decoder: {:?}", sorted_keys(&dec.extra)).into());
        }
    }

    let mut cfg = DecoderConfig {
        debug_log: root.debug_log,
        ..Default::default()
    };

    if let Some(ids) = root.identifiers {
        apply_identifiers_patch(&mut cfg.identifiers, ids);
    }
    if let Some(dec) = root.decoder {
        apply_decoder_patch(&mut cfg.decoder, dec);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Build `DecoderConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `DecoderConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    from_reader(BufReader::new(f))
}

fn apply_identifiers_patch(dst: &mut CfgIdentifiers, src: IdentifiersDto) {
    if let Some(v) = src.talkgroup_format {
        dst.talkgroup_format = v;
    }
    if let Some(v) = src.talkgroup_fixed_width {
        dst.talkgroup_fixed_width = v;
    }
}

fn apply_decoder_patch(dst: &mut CfgDecoder, src: DecoderDto) {
    if let Some(v) = src.default_nac {
        dst.default_nac = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    identifiers: Option<IdentifiersDto>,

    #[serde(default)]
    decoder: Option<DecoderDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct IdentifiersDto {
    talkgroup_format: Option<IntegerFormat>,
    talkgroup_fixed_width: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct DecoderDto {
    default_nac: Option<u16>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml = r#"
            config_version = "0.1"
            debug_log = "/tmp/p25.log"

            [identifiers]
            talkgroup_format = "Hexadecimal"
            talkgroup_fixed_width = true

            [decoder]
            default_nac = 0x293
        "#;
        let cfg = from_toml_str(toml).unwrap();
        assert_eq!(cfg.debug_log.as_deref(), Some("/tmp/p25.log"));
        assert_eq!(cfg.identifiers.talkgroup_format, IntegerFormat::Hexadecimal);
        assert!(cfg.identifiers.talkgroup_fixed_width);
        assert_eq!(cfg.decoder.default_nac, 0x293);
    }

    #[test]
    fn test_minimal_config_defaults() {
        let cfg = from_toml_str("config_version = \"0.1\"").unwrap();
        assert_eq!(cfg.debug_log, None);
        assert_eq!(cfg.identifiers, CfgIdentifiers::default());
        assert_eq!(cfg.identifiers.talkgroup_format, IntegerFormat::Decimal);
    }

    #[test]
    fn test_rejects_wrong_version() {
        let err = from_toml_str("config_version = \"0.5\"").unwrap_err();
        assert!(err.to_string().contains("Unrecognized config_version"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = from_toml_str("config_version = \"0.1\"\nfoo = 1").unwrap_err();
        assert!(err.to_string().contains("foo"));

        let err = from_toml_str("config_version = \"0.1\"\n[identifiers]\nwidth = 3").unwrap_err();
        assert!(err.to_string().contains("identifiers"));
    }

    #[test]
    fn test_rejects_wide_nac() {
        let err = from_toml_str("config_version = \"0.1\"\n[decoder]\ndefault_nac = 4096").unwrap_err();
        assert!(err.to_string().contains("12 bits"));
    }

    #[test]
    fn test_from_reader() {
        let input = "config_version = \"0.1\"\n[identifiers]\ntalkgroup_fixed_width = true\n";
        let cfg = from_reader(input.as_bytes()).unwrap();
        assert!(cfg.identifiers.talkgroup_fixed_width);
    }
}
