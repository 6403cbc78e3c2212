// File: ./tests/config_tests.rs
use chrono_tz::Tz;
use icsprose::cli::{CliAction, parse_args};
use icsprose::config::{Config, OutputFormat};
use icsprose::paths::{AppPaths, CONFIG_DIR_ENV};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.timezone.is_none());
    assert!(!config.include_metadata);
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.local_zone().unwrap(), Tz::UTC);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: Config = toml::from_str("timezone = \"Asia/Tokyo\"").unwrap();
    assert_eq!(config.timezone.as_deref(), Some("Asia/Tokyo"));
    assert!(!config.include_metadata);
    assert_eq!(config.output, OutputFormat::Text);

    let options = config.format_options().unwrap();
    assert_eq!(options.dates.local_zone, Tz::Asia__Tokyo);
}

#[test]
fn test_full_toml() {
    let config: Config = toml::from_str(
        "timezone = \"Europe/Paris\"\ninclude_metadata = true\noutput = \"json\"\n",
    )
    .unwrap();
    assert!(config.include_metadata);
    assert_eq!(config.output, OutputFormat::Json);
    assert!(config.format_options().unwrap().include_metadata);
}

#[test]
fn test_unknown_timezone_rejected() {
    let config = Config {
        timezone: Some("Mars/Olympus_Mons".to_string()),
        ..Config::default()
    };
    let err = config.format_options().unwrap_err();
    assert!(err.to_string().contains("Mars/Olympus_Mons"));
}

#[test]
fn test_missing_file_detected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(Config::is_missing_config_error(&err));
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
}

#[test]
fn test_broken_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "include_metadata = \"maybe\"").unwrap();

    let err = Config::load_or_default(&path).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_config_dir_env_override() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested");
    unsafe {
        env::set_var(CONFIG_DIR_ENV, &nested);
    }

    let path = AppPaths::get_config_file_path().unwrap();
    assert_eq!(path, nested.join("config.toml"));
    // Looking up the path must not touch the filesystem.
    assert!(!nested.exists());
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

    fs::create_dir_all(&nested).unwrap();
    fs::write(&path, "output = \"json\"").unwrap();
    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.output, OutputFormat::Json);

    unsafe {
        env::remove_var(CONFIG_DIR_ENV);
    }
}

#[test]
fn test_cli_overrides_config() {
    let args = ["--timezone", "America/Chicago", "--metadata", "--format", "json", "-"]
        .iter()
        .map(|s| s.to_string());
    let CliAction::Convert(parsed) = parse_args(args).unwrap() else {
        panic!("expected a conversion");
    };
    assert!(parsed.input.is_none());

    let mut config = Config::default();
    parsed.apply_to(&mut config);
    assert_eq!(config.timezone.as_deref(), Some("America/Chicago"));
    assert!(config.include_metadata);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn test_cli_help_and_version() {
    assert_eq!(
        parse_args(vec!["--help".to_string()]).unwrap(),
        CliAction::Help
    );
    assert_eq!(
        parse_args(vec!["-V".to_string()]).unwrap(),
        CliAction::Version
    );
    assert!(parse_args(vec!["--bogus".to_string()]).is_err());
    assert!(parse_args(vec!["a.ics".to_string(), "b.ics".to_string()]).is_err());
}
