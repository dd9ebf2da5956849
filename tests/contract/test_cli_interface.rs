use clap::Parser;
use riskscan::cli::args::Cli;
use riskscan::{CliError, ContentType};
use std::path::PathBuf;

#[test]
fn test_basic_cli_parsing() {
    let cli = Cli::try_parse_from(vec!["riskscan", "--type", "image"]);

    assert!(cli.is_ok());
    let cli = cli.unwrap();

    assert_eq!(cli.content_type, ContentType::Image);
    assert_eq!(cli.model, "mixtral-8x7b-32768"); // Default model
    assert_eq!(cli.max_attempts, 3); // Default attempts
    assert!(cli.timeout.is_none());
}

#[test]
fn test_cli_with_all_options() {
    let args = vec![
        "riskscan",
        "--type", "email",
        "--file", "suspicious.eml",
        "--api-key", "gsk_test",
        "--model", "llama3-70b-8192",
        "--timeout", "120",
        "--max-attempts", "5",
        "--json",
        "--verbose",
    ];

    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.content_type, ContentType::Email);
    assert_eq!(cli.file, Some(PathBuf::from("suspicious.eml")));
    assert_eq!(cli.api_key.as_deref(), Some("gsk_test"));
    assert_eq!(cli.model, "llama3-70b-8192");
    assert_eq!(cli.timeout, Some(120));
    assert_eq!(cli.max_attempts, 5);
    assert!(cli.json);
    assert!(cli.verbose);
}

#[test]
fn test_type_is_required() {
    assert!(Cli::try_parse_from(vec!["riskscan"]).is_err());
}

#[test]
fn test_max_attempts_range() {
    assert!(Cli::try_parse_from(vec!["riskscan", "-T", "email", "--max-attempts", "0"]).is_err());
    assert!(Cli::try_parse_from(vec!["riskscan", "-T", "email", "--max-attempts", "11"]).is_err());
}

#[test]
fn test_help_output() {
    let err = Cli::try_parse_from(vec!["riskscan", "--help"]).unwrap_err();
    let help = err.to_string();

    assert!(help.contains("--type"));
    assert!(help.contains("--api-key"));
    assert!(help.contains("GROQ_API_KEY"));
}

#[test]
fn test_help_and_version_are_not_argument_errors() {
    for flag in ["--help", "--version"] {
        let err = Cli::parse_args_from(vec!["riskscan", flag]).unwrap_err();
        assert!(
            matches!(err, CliError::Informational(_)),
            "{} produced {:?}",
            flag,
            err
        );
    }

    let version = Cli::parse_args_from(vec!["riskscan", "--version"]).unwrap_err();
    assert!(version.to_string().contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_real_parse_errors_stay_invalid_arguments() {
    let err = Cli::parse_args_from(vec!["riskscan", "--type", "video"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));

    let err = Cli::parse_args_from(vec!["riskscan"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));
}
