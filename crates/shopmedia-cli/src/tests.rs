use std::path::Path;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["shopmedia"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn run_defaults_to_reference_file_names() {
    let cli = Cli::try_parse_from(["shopmedia", "run"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Run { ref input, ref output })
            if input == Path::new("stores.csv") && output == Path::new("output.csv")
    ));
}

#[test]
fn run_accepts_custom_paths() {
    let cli = Cli::try_parse_from([
        "shopmedia",
        "run",
        "--input",
        "shops.tsv",
        "--output",
        "/tmp/result.csv",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Run { ref input, ref output })
            if input == Path::new("shops.tsv") && output == Path::new("/tmp/result.csv")
    ));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["shopmedia", "crawl"]).is_err());
}
