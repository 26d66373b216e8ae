// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use disparity_view::constants::DISPARITY_MESSAGE_TYPE;
use disparity_view::{AppError, Config, RangeMode};
use std::io::Write;

#[test]
fn test_config_default() {
    let config = Config::default();

    // Frames are scaled by their own bounds unless configured otherwise
    assert!(config.dynamic_range, "Dynamic range should be on by default");
    assert_eq!(config.range_mode(), RangeMode::Dynamic);
    assert_eq!(config.message_types, vec![DISPARITY_MESSAGE_TYPE.to_string()]);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"dynamic_range": false, "max_range": 96.0, "log_filter": "debug"}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.range_mode(), RangeMode::Fixed { max_range: 96.0 });
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_config_without_path_is_default() {
    assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
}
