use assert_cmd::Command;
use mcpsync::test_utils::TestEnvironment;

/// `mcpsync` run from the project directory with both home variables pointing at the
/// test home and colors disabled.
pub fn mcpsync(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("mcpsync").unwrap();
    cmd.current_dir(&env.project_dir)
        .env("HOME", &env.home_dir)
        .env("USERPROFILE", &env.home_dir)
        .env("MCPSYNC_HOME", &env.home_dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
