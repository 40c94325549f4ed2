//! Tests for CLI argument parsing

use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;

use navtree::cli::{Cli, Commands, ConfigCommands};

#[test]
fn given_build_with_file_and_pretty_when_parsing_then_captures_both() {
    let cli = Cli::try_parse_from(["navtree", "build", "listing.json", "--pretty"]).unwrap();

    match cli.command {
        Some(Commands::Build { file, pretty }) => {
            assert_eq!(file, Some(PathBuf::from("listing.json")));
            assert!(pretty);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[rstest]
#[case(&["navtree", "tree"], 0)]
#[case(&["navtree", "-d", "tree"], 1)]
#[case(&["navtree", "tree", "-ddd"], 3)]
fn given_debug_flags_when_parsing_then_counts_them(#[case] args: &[&str], #[case] expected: u8) {
    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.debug, expected);
}

#[rstest]
#[case("0x123", 7)]
#[case("UberCategory", -3)]
#[case("-7", 1)]
fn given_order_command_when_parsing_then_accepts_title_and_id(#[case] title: &str, #[case] id: i64) {
    let id_arg = id.to_string();
    let cli = Cli::try_parse_from(["navtree", "order", title, id_arg.as_str()]).unwrap();

    match cli.command {
        Some(Commands::Order { title: t, id: i }) => {
            assert_eq!(t, title);
            assert_eq!(i, id);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_config_path_when_parsing_then_selects_subcommand() {
    let cli = Cli::try_parse_from(["navtree", "-C", "/tmp", "config", "path"]).unwrap();

    assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp")));
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Path
        })
    ));
}
