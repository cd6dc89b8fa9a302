use std::io::Write;
use tempfile::NamedTempFile;
use treefs::config::{SizingConfig, TreefsConfig};
use treefs::tooling::{CliContext, Commands, OutputFormat};
use treefs::ApiError;

fn fixed_config(size: u64) -> TreefsConfig {
    TreefsConfig {
        sizing: SizingConfig {
            fixed: Some(size),
            ..SizingConfig::default()
        },
        ..TreefsConfig::default()
    }
}

#[test]
fn run_script_file() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "# build a small tree").unwrap();
    writeln!(script, "mkdir /src/bin").unwrap();
    writeln!(script, "write /src/lib.rs pub mod a;").unwrap();
    writeln!(script, "ls /src").unwrap();
    writeln!(script, "cat /src/lib.rs").unwrap();
    writeln!(script, "stat /").unwrap();

    let mut ctx = CliContext::new(&fixed_config(4096)).unwrap();
    let out = ctx
        .execute(&Commands::Run {
            script: script.path().to_path_buf(),
            format: OutputFormat::Text,
            keep_going: false,
        })
        .unwrap();

    assert_eq!(
        out,
        "bin\nlib.rs\npub mod a;\ndirectory / size=4096 children=1"
    );
}

#[test]
fn missing_script_is_io_error() {
    let mut ctx = CliContext::new(&fixed_config(1)).unwrap();
    let err = ctx
        .execute(&Commands::Run {
            script: "/nonexistent/script.txt".into(),
            format: OutputFormat::Text,
            keep_going: true,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
fn demo_json_records_every_command() {
    let mut ctx = CliContext::new(&fixed_config(1000)).unwrap();
    let out = ctx
        .execute(&Commands::Demo {
            format: OutputFormat::Json,
        })
        .unwrap();
    let records: serde_json::Value = serde_json::from_str(&out).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 9);
    assert_eq!(records[3]["output"], serde_json::json!(["a", "b", "o"]));
    assert!(records[7].get("error").is_some());
}
