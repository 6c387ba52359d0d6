use mcpsync::test_utils::TestEnvironment;
use predicates::prelude::*;
use serde_json::json;

use crate::common::mcpsync;

#[test]
fn test_import_cursor() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_file(".cursor/mcp.json", r#"{"mcpServers":{"x":{"command":"node"}}}"#)
        .unwrap();

    mcpsync(&env)
        .args(["import", "--cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported MCP configuration from cursor"))
        .stdout(predicate::str::contains("Imported 1 server(s)"));

    let canonical = env.read_json(&env.canonical_path()).unwrap();
    assert_eq!(canonical, json!({"mcpServers": {"cursor-x": {"command": "node"}}}));
}

#[test]
fn test_import_verbose_lists_servers() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_file(
        ".roo/mcp.json",
        r#"{"mcpServers":{"b":{"command":"b"},"a":{"command":"a"}}}"#,
    )
    .unwrap();

    mcpsync(&env)
        .args(["import", "--roo", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported servers: b, a"));
}

#[test]
fn test_import_from_global_cursor_config() {
    let env = TestEnvironment::new().unwrap();
    env.write_home_file(".cursor/mcp.json", r#"{"mcpServers":{"g":{"command":"g"}}}"#)
        .unwrap();

    mcpsync(&env).args(["import", "--cursor"]).assert().success();

    let canonical = env.read_json(&env.canonical_path()).unwrap();
    assert_eq!(canonical["mcpServers"]["cursor-g"]["command"], "g");
}

#[test]
fn test_import_merges_with_existing() {
    let env = TestEnvironment::new().unwrap();
    env.write_canonical(r#"{"mcpServers":{"mine":{"command":"keep"}}}"#).unwrap();
    env.write_project_file(".mcp.json", r#"{"mcpServers":{"s":{"command":"claude-s"}}}"#)
        .unwrap();

    mcpsync(&env).args(["import", "--claudecode"]).assert().success();

    let canonical = env.read_json(&env.canonical_path()).unwrap();
    assert_eq!(canonical["mcpServers"]["mine"]["command"], "keep");
    assert_eq!(canonical["mcpServers"]["claudecode-s"]["command"], "claude-s");
}

#[test]
fn test_import_copilot_settings() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_file(
        ".vscode/settings.json",
        r#"{"mcp":{"servers":{"gh":{"command":"gh-mcp"}}}}"#,
    )
    .unwrap();

    mcpsync(&env).args(["import", "--copilot"]).assert().success();

    let canonical = env.read_json(&env.canonical_path()).unwrap();
    assert_eq!(canonical["mcpServers"]["copilot-gh"]["command"], "gh-mcp");
}

#[test]
fn test_import_requires_a_tool() {
    let env = TestEnvironment::new().unwrap();

    mcpsync(&env)
        .arg("import")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify at least one tool to import from"));
    assert!(!env.canonical_path().exists());
}

#[test]
fn test_import_rejects_multiple_tools() {
    let env = TestEnvironment::new().unwrap();

    mcpsync(&env)
        .args(["import", "--cursor", "--cline"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify only one tool at a time"));
    assert!(!env.canonical_path().exists());
}

#[test]
fn test_import_missing_source() {
    let env = TestEnvironment::new().unwrap();

    mcpsync(&env)
        .args(["import", "--roo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No MCP configuration found for roo"));
}

#[test]
fn test_import_invalid_source() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_file(".cursor/mcp.json", "invalid json").unwrap();

    mcpsync(&env)
        .args(["import", "--cursor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read MCP configuration from"));
    assert!(!env.canonical_path().exists());
}

#[test]
fn test_import_geminicli_is_unknown() {
    let env = TestEnvironment::new().unwrap();

    mcpsync(&env)
        .args(["import", "--geminicli"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown tool: geminicli"));
}

#[test]
fn test_import_then_generate() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_file(".cursor/mcp.json", r#"{"mcpServers":{"x":{"command":"node"}}}"#)
        .unwrap();

    mcpsync(&env).args(["import", "--cursor"]).assert().success();
    mcpsync(&env).args(["generate", "--roo"]).assert().success();

    let written = env.read_json(&env.home_dir.join(".roo/mcp_servers.json")).unwrap();
    assert_eq!(written, json!({"mcpServers": {"cursor-x": {"command": "node"}}}));
}

#[test]
fn test_import_keeps_remote_servers_and_order() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_file(
        ".mcp.json",
        r#"{"mcpServers":{"zeta":{"type":"sse","url":"https://example.com/sse"},"alpha":{"command":"a"}}}"#,
    )
    .unwrap();

    mcpsync(&env)
        .args(["import", "--claudecode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 server(s)"));

    let content = std::fs::read_to_string(env.canonical_path()).unwrap();
    assert!(content.find("claudecode-zeta").unwrap() < content.find("claudecode-alpha").unwrap());

    let canonical = env.read_json(&env.canonical_path()).unwrap();
    assert_eq!(
        canonical["mcpServers"]["claudecode-zeta"],
        json!({"type": "sse", "url": "https://example.com/sse"})
    );
}
