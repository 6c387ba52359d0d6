use mcpsync::core::Tool;
use mcpsync::test_utils::{SAMPLE_CONFIG, TestEnvironment};
use predicates::prelude::*;
use serde_json::Value;

use crate::common::mcpsync;

#[test]
fn test_generate_all_tools() {
    let env = TestEnvironment::with_sample_config().unwrap();

    mcpsync(&env)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated MCP configurations for 6 tools"));

    let canonical: Value = serde_json::from_str(SAMPLE_CONFIG).unwrap();
    for tool in Tool::ALL {
        let written = env.read_json(&env.generated_path(tool)).unwrap();
        assert_eq!(written, canonical, "{tool} output differs");
    }
}

#[test]
fn test_generate_single_tool() {
    let env = TestEnvironment::with_sample_config().unwrap();

    mcpsync(&env)
        .args(["generate", "--claudecode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated MCP configurations for 1 tools"));

    let written = env.read_json(&env.home_dir.join(".config/claude/mcp_servers.json")).unwrap();
    assert_eq!(written, serde_json::from_str::<Value>(SAMPLE_CONFIG).unwrap());
    assert!(!env.generated_path(Tool::Cursor).exists());
}

#[test]
fn test_generate_verbose_lists_files() {
    let env = TestEnvironment::with_sample_config().unwrap();

    mcpsync(&env)
        .args(["generate", "--cursor", "--roo", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating MCP configurations for: cursor, roo"))
        .stdout(predicate::str::contains("Generated cursor configuration at"))
        .stdout(predicate::str::contains("Generated roo configuration at"));
}

#[test]
fn test_generate_without_canonical_fails() {
    let env = TestEnvironment::new().unwrap();

    mcpsync(&env)
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating configurations for ."))
        .stderr(predicate::str::contains("MCP configuration file not found"));

    for tool in Tool::ALL {
        assert!(!env.generated_path(tool).exists());
    }
}

#[test]
fn test_generate_invalid_canonical_fails() {
    let env = TestEnvironment::new().unwrap();
    env.write_canonical("{ invalid json").unwrap();

    mcpsync(&env)
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read MCP configuration"));
}

#[test]
fn test_generate_continues_after_failed_base_dir() {
    let env = TestEnvironment::new().unwrap();
    env.write_canonical_in("web", r#"{"mcpServers":{"web":{"command":"web-mcp"}}}"#).unwrap();

    mcpsync(&env)
        .args(["generate", "--cline", "--base-dir", "api, web"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating configurations for api"))
        .stdout(predicate::str::contains("Generated MCP configurations for 1 tools"));

    let written = env.read_json(&env.generated_path(Tool::Cline)).unwrap();
    assert_eq!(written["mcpServers"]["web"]["command"], "web-mcp");
}

#[test]
fn test_generate_is_idempotent() {
    let env = TestEnvironment::with_sample_config().unwrap();
    let path = env.generated_path(Tool::GeminiCli);

    mcpsync(&env).args(["generate", "--geminicli"]).assert().success();
    let first = std::fs::read(&path).unwrap();

    mcpsync(&env).args(["generate", "--geminicli"]).assert().success();
    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test]
fn test_generate_delete_flag_is_accepted() {
    let env = TestEnvironment::with_sample_config().unwrap();
    mcpsync(&env).args(["generate", "--delete"]).assert().success();
}
