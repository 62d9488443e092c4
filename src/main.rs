//! Decode and encode Generation IV text fields from the command line.
//!
//! Usage:
//!   gen4text decode --file save.bin --offset 0x68 --field nickname
//!   gen4text decode --hex "3A014D01FFFF0000"
//!   gen4text encode --text Piplup --size 16

use std::path::PathBuf;

use anyhow::Context;
use gen4_text::{Config, EncodedField};
use tracing_subscriber::EnvFilter;

enum Command {
    DecodeFile {
        file: PathBuf,
        offset: usize,
        len: Length,
    },
    DecodeHex(String),
    Encode {
        text: String,
        len: Option<Length>,
    },
}

enum Length {
    Bytes(usize),
    Field(String),
}

fn parse_number(value: &str) -> anyhow::Result<usize> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.with_context(|| format!("not a number: {value}"))
}

fn parse_hex(value: &str) -> anyhow::Result<Vec<u8>> {
    let digits: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        anyhow::bail!("hex input has an odd number of digits");
    }
    digits
        .chunks(2)
        .map(|pair| {
            let byte: String = pair.iter().collect();
            u8::from_str_radix(&byte, 16).with_context(|| format!("bad hex byte: {byte}"))
        })
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

fn parse_args() -> anyhow::Result<Command> {
    let mut args = std::env::args().skip(1);
    let mode = args.next().context("expected `decode` or `encode`")?;

    let mut file = None;
    let mut hex = None;
    let mut text = None;
    let mut offset = 0usize;
    let mut len = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--file" => file = Some(PathBuf::from(args.next().context("--file needs a value")?)),
            "--hex" => hex = Some(args.next().context("--hex needs a value")?),
            "--text" => text = Some(args.next().context("--text needs a value")?),
            "--offset" => offset = parse_number(&args.next().context("--offset needs a value")?)?,
            "--len" | "--size" => {
                let value = args.next().with_context(|| format!("{flag} needs a value"))?;
                len = Some(Length::Bytes(parse_number(&value)?));
            }
            "--field" => len = Some(Length::Field(args.next().context("--field needs a value")?)),
            other => anyhow::bail!("unknown flag: {other}"),
        }
    }

    match mode.as_str() {
        "decode" => match (file, hex) {
            (Some(file), None) => Ok(Command::DecodeFile {
                file,
                offset,
                len: len.context("decode --file needs --len or --field")?,
            }),
            (None, Some(hex)) => Ok(Command::DecodeHex(hex)),
            _ => anyhow::bail!("decode needs exactly one of --file or --hex"),
        },
        "encode" => Ok(Command::Encode {
            text: text.context("--text is required")?,
            len,
        }),
        other => anyhow::bail!("unknown command: {other}"),
    }
}

fn resolve_len(len: &Length, config: &Config) -> anyhow::Result<usize> {
    match len {
        Length::Bytes(n) => Ok(*n),
        Length::Field(name) => config
            .field_size(name)
            .with_context(|| format!("no field named {name} in config")),
    }
}

fn load_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "gen4text.toml".into());
    if !std::path::Path::new(&path).exists() {
        tracing::debug!("no config at {path}, using defaults");
        return Ok(Config::default());
    }
    Config::from_file(&path).with_context(|| format!("failed to load config from {path}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    let command = parse_args()?;

    match command {
        Command::DecodeFile { file, offset, len } => {
            let len = resolve_len(&len, &config)?;
            let data =
                std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            tracing::info!(offset, len, "decoding field from {}", file.display());
            let mut field = EncodedField::from_slice(&data, offset, len)
                .with_context(|| format!("reading {len} bytes at offset {offset:#x}"))?;
            println!("{}", field.text());
        }
        Command::DecodeHex(hex) => {
            let bytes = parse_hex(&hex)?;
            let mut field = EncodedField::from_bytes(&bytes)?;
            println!("{}", field.text());
        }
        Command::Encode { text, len } => {
            let size = match &len {
                Some(len) => resolve_len(len, &config)?,
                None => config.codec.default_size,
            };
            let field = EncodedField::from_text(text, size)?;
            println!("{}", to_hex(&field.into_bytes()?));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_decimal_and_hex() {
        assert_eq!(parse_number("22").unwrap(), 22);
        assert_eq!(parse_number("0x68").unwrap(), 0x68);
        assert_eq!(parse_number("0X10").unwrap(), 16);
        assert!(parse_number("nope").is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("2B01 FFFF").unwrap(), vec![0x2B, 0x01, 0xFF, 0xFF]);
        assert!(parse_hex("2B0").is_err());
        assert!(parse_hex("ZZ").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x2B, 0x01, 0xFF, 0xFF]), "2B01FFFF");
    }

    #[test]
    fn test_resolve_len_from_config() {
        let config = Config::default();
        assert_eq!(resolve_len(&Length::Field("nickname".into()), &config).unwrap(), 22);
        assert_eq!(resolve_len(&Length::Bytes(8), &config).unwrap(), 8);
        assert!(resolve_len(&Length::Field("unknown".into()), &config).is_err());
    }
}
