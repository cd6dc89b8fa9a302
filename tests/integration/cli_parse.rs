use clap::{CommandFactory, Parser};
use treefs::tooling::{Cli, Commands, OutputFormat};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["treefs", "demo"],
        vec!["treefs", "demo", "--format", "json"],
        vec!["treefs", "run", "script.txt"],
        vec!["treefs", "run", "script.txt", "--keep-going", "--format", "text"],
        vec!["treefs", "--config", "treefs.toml", "--log-level", "debug", "demo"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "failed to parse {:?}", args);
    }
}

#[test]
fn parse_invalid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["treefs"],
        vec!["treefs", "run"],
        vec!["treefs", "demo", "--format", "yaml"],
        vec!["treefs", "scan"],
    ];

    for args in cases {
        assert!(Cli::try_parse_from(args.clone()).is_err(), "unexpectedly parsed {:?}", args);
    }
}

#[test]
fn run_arguments_are_captured() {
    let cli = Cli::try_parse_from(["treefs", "run", "s.txt", "--keep-going", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Run {
            script,
            format,
            keep_going,
        } => {
            assert_eq!(script.to_str(), Some("s.txt"));
            assert_eq!(format, OutputFormat::Json);
            assert!(keep_going);
        }
        Commands::Demo { .. } => panic!("expected run"),
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
