pub mod config;
pub mod error;
pub mod text;

pub use config::Config;
pub use error::EncodingError;
pub use text::{
    charmap::{forward_lookup, reverse_lookup, CharMap},
    codec::{decode_at, decode_string, encode_string},
    field::{EncodedField, FieldState},
};
