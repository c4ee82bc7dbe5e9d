// tests/cli_parsing.rs

use clap::Parser;

use ddcci_bridge::cli::{BridgeCommand, CliArgs};

#[test]
fn parses_set_subcommand() {
    let args = CliArgs::try_parse_from([
        "ddcci-bridge",
        "set",
        "ddcci",
        "1",
        "brightness",
        "50",
    ])
    .unwrap();

    match args.command {
        BridgeCommand::Set {
            adapter,
            id,
            property,
            value,
        } => {
            assert_eq!(adapter, "ddcci");
            assert_eq!(id, "1");
            assert_eq!(property, "brightness");
            assert_eq!(value, "50");
        }
        other => panic!("expected Set, got {other:?}"),
    }
    assert!(!args.enable_logging);
}

#[test]
fn parses_global_flags_before_subcommand() {
    let args = CliArgs::try_parse_from([
        "ddcci-bridge",
        "--config",
        "/tmp/bridge.toml",
        "--enable-logging",
        "version",
    ])
    .unwrap();

    assert_eq!(args.config.as_deref(), Some("/tmp/bridge.toml"));
    assert!(args.enable_logging);
    assert!(matches!(args.command, BridgeCommand::Version));
}

#[test]
fn detect_requires_at_least_one_adapter() {
    assert!(CliArgs::try_parse_from(["ddcci-bridge", "detect"]).is_err());

    let args = CliArgs::try_parse_from(["ddcci-bridge", "detect", "ddcci", "test"]).unwrap();
    match args.command {
        BridgeCommand::Detect { adapters } => assert_eq!(adapters, ["ddcci", "test"]),
        other => panic!("expected Detect, got {other:?}"),
    }
}
