// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every variant carries a plain message so errors stay `Clone` and can be
//! moved through iced messages (decode results travel back to `update`).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Storage Error: {0}")]
    Storage(String),
    #[error("Decode Error: {0}")]
    Decode(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn storage_and_decode_errors_display_their_message() {
        assert_eq!(
            Error::Storage("quota".into()).to_string(),
            "Storage Error: quota"
        );
        assert_eq!(
            Error::Decode("truncated".into()).to_string(),
            "Decode Error: truncated"
        );
    }
}
