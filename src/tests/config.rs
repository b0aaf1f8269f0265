use super::Config;
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = Config::parse("").unwrap();
    let defaults = Config::default();

    assert_eq!(cfg.wrap_width, defaults.wrap_width);
    assert_eq!(cfg.edit_label, defaults.edit_label);
    assert_eq!(cfg.prefetch_rows, defaults.prefetch_rows);
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "wrap_width = 72\nedit_label = \"[edit]\"").unwrap();

    let cfg = Config::load(file.path());
    assert_eq!(cfg.wrap_width, 72);
    assert_eq!(cfg.edit_label, "[edit]");
    assert_eq!(cfg.prefetch_rows, 4);
}

#[test]
fn test_invalid_config_reports_error() {
    let result = Config::parse("wrap_width = \"wide\"");
    assert!(matches!(result, Err(Error::Config(ref message)) if !message.is_empty()));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "wrap_width = \"wide\"").unwrap();
    assert_eq!(Config::load(file.path()).wrap_width, 100);
}

#[test]
fn test_missing_config_file_falls_back() {
    let cfg = Config::load(std::path::Path::new("/nonexistent/obelus.toml"));
    assert_eq!(cfg.wrap_width, 100);
}

#[test]
fn test_markdown_heading_levels() {
    let format = MarkdownFormat;
    assert_eq!(format.heading_level("atx_h1_marker"), Some(1));
    assert_eq!(format.heading_level("atx_h6_marker"), Some(6));
    assert_eq!(format.heading_level("setext_h1_underline"), None);
}
