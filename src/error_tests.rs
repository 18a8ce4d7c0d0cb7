//! Tests for GiftError type

use super::*;

#[test]
fn test_invalid_config_error_display() {
    let error = GiftError::InvalidConfig("error_rate must be within [0, 1]".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid configuration"));
    assert!(msg.contains("error_rate"));
}

#[test]
fn test_config_parse_error_display_includes_path() {
    let error = GiftError::ConfigParse {
        path: PathBuf::from("/tmp/giftai/config.toml"),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/giftai/config.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let gift_err = GiftError::from(io_err);
    assert!(matches!(gift_err, GiftError::Io(_)));
    assert!(gift_err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = GiftError::InvalidConfig("bad".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidConfig"));
}
