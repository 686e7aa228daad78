//! Tests for command-line argument parsing
//!
//! Note: These tests verify the argument parser configuration by creating
//! a test parser with the same structure as the main application.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Create a command with the same argument structure as the main binary
fn create_test_command() -> ClapCommand {
    ClapCommand::new("nose-keyboard")
        .version("0.1.0")
        .about("Nose-pointer on-screen keyboard")
        .arg(
            Arg::new("trace")
                .value_name("TRACE")
                .required_unless_present("print-config")
                .help("Perception trace to replay"),
        )
        .arg(
            Arg::new("config")
                .short('C')
                .long("config")
                .value_name("PATH")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("calibration")
                .long("calibration")
                .value_name("PATH")
                .help("Calibration record"),
        )
        .arg(
            Arg::new("recalibrate")
                .short('r')
                .long("recalibrate")
                .action(ArgAction::SetTrue)
                .help("Force the calibration wizard"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .value_parser(clap::value_parser!(u32))
                .help("Screen width"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .value_parser(clap::value_parser!(u32))
                .help("Screen height"),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .value_name("TYPE")
                .help("Pointer smoothing"),
        )
        .arg(
            Arg::new("fit-grid")
                .long("fit-grid")
                .action(ArgAction::SetTrue)
                .help("Fit the hit grid to the layout rows"),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .action(ArgAction::SetTrue)
                .help("Print an example configuration"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug output"),
        )
}

#[test]
fn test_help_argument() {
    let cmd = create_test_command();
    let result = cmd.try_get_matches_from(vec!["nose-keyboard", "--help"]);

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn test_trace_is_required() {
    let cmd = create_test_command();
    let result = cmd.try_get_matches_from(vec!["nose-keyboard"]);

    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn test_print_config_needs_no_trace() {
    let cmd = create_test_command();
    let matches = cmd
        .try_get_matches_from(vec!["nose-keyboard", "--print-config"])
        .unwrap();
    assert!(matches.get_flag("print-config"));
    assert!(matches.get_one::<String>("trace").is_none());
}

#[test]
fn test_trace_with_overrides() {
    let cmd = create_test_command();
    let matches = cmd
        .try_get_matches_from(vec![
            "nose-keyboard",
            "session.jsonl",
            "--calibration",
            "cal.json",
            "-r",
            "--width",
            "1280",
            "--height",
            "720",
            "-f",
            "exponential:0.3",
            "--fit-grid",
        ])
        .unwrap();

    assert_eq!(matches.get_one::<String>("trace").map(|s| s.as_str()), Some("session.jsonl"));
    assert_eq!(matches.get_one::<String>("calibration").map(|s| s.as_str()), Some("cal.json"));
    assert!(matches.get_flag("recalibrate"));
    assert_eq!(matches.get_one::<u32>("width"), Some(&1280));
    assert_eq!(matches.get_one::<u32>("height"), Some(&720));
    assert_eq!(matches.get_one::<String>("filter").map(|s| s.as_str()), Some("exponential:0.3"));
    assert!(matches.get_flag("fit-grid"));
    assert!(!matches.get_flag("debug"));
}

#[test]
fn test_invalid_screen_size() {
    let cmd = create_test_command();
    let result = cmd.try_get_matches_from(vec!["nose-keyboard", "t.jsonl", "--width", "wide"]);
    assert!(result.is_err());
}
