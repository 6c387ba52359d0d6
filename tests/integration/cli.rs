use predicates::prelude::*;

use crate::common::mcpsync;
use mcpsync::test_utils::TestEnvironment;

#[test]
fn test_help_lists_commands() {
    let env = TestEnvironment::new().unwrap();
    mcpsync(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_version() {
    let env = TestEnvironment::new().unwrap();
    mcpsync(&env)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_help_shows_tool_flags() {
    let env = TestEnvironment::new().unwrap();
    mcpsync(&env)
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--geminicli"))
        .stdout(predicate::str::contains("--base-dir"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnvironment::new().unwrap();
    mcpsync(&env).arg("sync-all").assert().failure();
}

#[test]
fn test_placeholder_commands_fail() {
    let env = TestEnvironment::new().unwrap();
    for name in ["add", "gitignore", "init", "status", "validate", "watch"] {
        mcpsync(&env)
            .arg(name)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(format!(
                "Command '{name}' is not implemented yet"
            )));
    }
}

#[test]
fn test_home_flag_overrides_environment() {
    let env = TestEnvironment::with_sample_config().unwrap();
    let other_home = env.temp_dir.path().join("other-home");

    mcpsync(&env)
        .args(["generate", "--cursor", "--home"])
        .arg(&other_home)
        .assert()
        .success();

    assert!(other_home.join(".cursor").join("mcp_servers.json").exists());
    assert!(!env.home_dir.join(".cursor").join("mcp_servers.json").exists());
}
