use super::*;

#[test]
fn test_verbose_selects_debug() {
    let cli = Cli::parse_from(["mcpsync", "--verbose", "generate"]);
    assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));

    let cli = Cli::parse_from(["mcpsync", "generate"]);
    assert_eq!(cli.build_config().log_level.as_deref(), Some("warn"));
}

#[test]
fn test_verbose_is_global() {
    let cli = Cli::parse_from(["mcpsync", "import", "--cursor", "-v"]);
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Import(_)));
}

#[test]
fn test_home_flag() {
    let cli = Cli::parse_from(["mcpsync", "--home", "/tmp/h", "generate"]);
    assert_eq!(cli.build_config().home, Some(PathBuf::from("/tmp/h")));
}

#[test]
fn test_generate_flags_parse() {
    let cli = Cli::parse_from([
        "mcpsync",
        "generate",
        "--cursor",
        "--geminicli",
        "--base-dir",
        "a,b",
        "--delete",
    ]);
    assert!(matches!(cli.command, Commands::Generate(_)));
}

#[test]
fn test_placeholder_names() {
    for name in ["add", "gitignore", "init", "status", "validate", "watch"] {
        let cli = Cli::parse_from(["mcpsync", name]);
        assert_eq!(cli.command.name(), name);
    }
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["mcpsync", "generate", "--vim"]).is_err());
}

#[tokio::test]
async fn test_placeholder_fails() {
    let err = placeholder::execute("watch").await.unwrap_err();
    assert_eq!(err.to_string(), "Command 'watch' is not implemented yet");
}
