// BDD tests for the traitschema binary
//
// Feature: Schema generation for configurable classes
//   As configuration tooling
//   I want a JSON Schema for a class's configurable traits
//   So that I can validate and document its configuration surface

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn traitschema() -> Command {
    Command::new(env!("CARGO_BIN_EXE_traitschema"))
}

fn stdout_json(args: &[&str]) -> Value {
    let output = traitschema().args(args).output();
    let stdout = output.map(|o| o.stdout).unwrap_or_default();
    serde_json::from_slice(&stdout).unwrap_or(Value::Null)
}

#[test]
fn bdd_example_class_schema() {
    // Scenario: Bool trait and nullable union trait
    //   When I run "traitschema demo Example"
    //   Then stdout is the schema for a and b
    //   And exit code should be 0

    traitschema()
        .args(["demo", "Example"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(
        stdout_json(&["demo", "Example"]),
        json!({
            "a": {"type": ["bool"], "description": "toggle"},
            "b": {"type": ["number", "string", "null"], "description": "val"}
        })
    );
}

#[test]
fn bdd_lenient_skips_unknown_type() {
    // Scenario: Unknown trait type under the lenient policy
    //   When I run "traitschema --policy lenient demo Hooks"
    //   Then stderr says "Skipping c"
    //   And the schema has no "c" key

    traitschema()
        .args(["--policy", "lenient", "demo", "Hooks"])
        .assert()
        .success()
        .stderr("Skipping c\n")
        .stdout(predicate::str::contains("\"label\""))
        .stdout(predicate::str::contains("\"c\"").not());
}

#[test]
fn bdd_strict_fails_on_unknown_type() {
    // Scenario: Unknown trait type under the strict policy
    //   When I run "traitschema demo Hooks"
    //   Then stdout is empty
    //   And stderr names the trait type
    //   And exit code is non-zero

    traitschema()
        .args(["demo", "Hooks"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("demo.HookCallable"));
}

#[test]
fn bdd_unknown_module_and_class() {
    // Scenario: Lookup failures
    //   When I run with a module or class that does not exist
    //   Then stderr names it
    //   And exit code is 3

    traitschema()
        .args(["nosuchmodule", "Spawner"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nosuchmodule"));

    traitschema()
        .args(["kubespawner", "NoSuchSpawner"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("NoSuchSpawner"));
}

#[test]
fn bdd_output_is_deterministic() {
    // Scenario: Two runs against the same class
    //   Then stdout is byte-identical

    let first = traitschema().args(["kubespawner", "KubeSpawner"]).output();
    let second = traitschema().args(["kubespawner", "KubeSpawner"]).output();
    let first = first.map(|o| o.stdout).unwrap_or_default();
    let second = second.map(|o| o.stdout).unwrap_or_default();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn bdd_sources_agree() {
    // Scenario: Both enumeration sources
    //   When I run with --source class-traits and --source member-scan
    //   Then the schemas are identical

    let by_traits = stdout_json(&["--source", "class-traits", "jupyterhub.auth", "PAMAuthenticator"]);
    let by_scan = stdout_json(&["--source", "member-scan", "jupyterhub.auth", "PAMAuthenticator"]);

    assert!(by_traits.get("admin_users").is_some());
    assert!(by_traits.get("encoding").is_some());
    assert_eq!(by_traits, by_scan);
}

#[test]
fn bdd_pretty_printed_with_sorted_keys() {
    // Scenario: Output formatting
    //   Then entries use 2-space indentation
    //   And keys appear in sorted order

    let output = traitschema().args(["jupyterhub.spawner", "Spawner"]).output();
    let stdout = output
        .map(|o| String::from_utf8_lossy(&o.stdout).into_owned())
        .unwrap_or_default();

    assert!(stdout.starts_with("{\n  \"args\": {\n    \"description\""));
    let args = stdout.find("\"args\"");
    let cmd = stdout.find("\"cmd\"");
    let start_timeout = stdout.find("\"start_timeout\"");
    assert!(args < cmd);
    assert!(cmd < start_timeout);
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn bdd_help_lists_flags() {
    traitschema()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--policy"))
        .stdout(predicate::str::contains("--source"));
}
