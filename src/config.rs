use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::EncodingError;
use crate::text::is_valid_size;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub codec: CodecConfig,
    /// Named field widths in bytes, e.g. `nickname = 22`.
    #[serde(default = "default_fields")]
    pub fields: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    #[serde(default = "default_size")]
    pub default_size: usize,
}

fn default_size() -> usize {
    16
}

fn default_fields() -> BTreeMap<String, usize> {
    BTreeMap::from([("nickname".to_string(), 22), ("trainer_name".to_string(), 16)])
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            default_size: default_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            codec: CodecConfig::default(),
            fields: default_fields(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Every configured width must be a usable field size.
    pub fn validate(&self) -> Result<(), EncodingError> {
        std::iter::once(self.codec.default_size)
            .chain(self.fields.values().copied())
            .find(|&size| !is_valid_size(size))
            .map_or(Ok(()), |size| Err(EncodingError::InvalidSize(size)))
    }

    pub fn field_size(&self, name: &str) -> Option<usize> {
        self.fields.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
        [codec]
        default_size = 24

        [fields]
        nickname = 22
        trainer_name = 16
        box_name = 40
    "#;

    #[test]
    fn test_config_loads_from_toml_string() {
        let config = Config::from_toml_str(SAMPLE_CONFIG).expect("config should parse");
        assert_eq!(config.codec.default_size, 24);
        assert_eq!(config.field_size("nickname"), Some(22));
        assert_eq!(config.field_size("box_name"), Some(40));
        assert_eq!(config.field_size("missing"), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_defaults_when_sections_missing() {
        let config = Config::from_toml_str("").expect("empty config should parse");
        assert_eq!(config.codec.default_size, 16);
        assert_eq!(config.field_size("nickname"), Some(22));
        assert_eq!(config.field_size("trainer_name"), Some(16));
    }

    #[test]
    fn test_default_matches_empty_toml() {
        let parsed = Config::from_toml_str("").unwrap();
        let built = Config::default();
        assert_eq!(parsed.codec.default_size, built.codec.default_size);
        assert_eq!(parsed.fields, built.fields);
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        let bad = r#"
            [codec]
            default_size = "sixteen"
        "#;
        assert!(Config::from_toml_str(bad).is_err());
    }

    #[test]
    fn test_validate_rejects_odd_sizes() {
        let config = Config::from_toml_str(
            r#"
            [fields]
            nickname = 21
        "#,
        )
        .unwrap();
        assert_eq!(config.validate(), Err(EncodingError::InvalidSize(21)));
    }

    #[test]
    fn test_validate_rejects_zero_default() {
        let config = Config::from_toml_str("[codec]\ndefault_size = 0\n").unwrap();
        assert_eq!(config.validate(), Err(EncodingError::InvalidSize(0)));
    }
}
