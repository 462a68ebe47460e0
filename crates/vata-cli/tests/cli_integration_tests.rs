//! CLI integration tests
//!
//! Run the `vata-wrap` binary against stub shell scripts standing in for
//! `vata`. Every invocation gets `--vata` explicitly and a scrubbed
//! environment so local configuration cannot leak in.

#![cfg(unix)]

use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn stub_tool(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("vata");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn echo_tool(dir: &TempDir) -> PathBuf {
    stub_tool(dir, "printf '%s\\n' \"$@\"")
}

fn wrap(dir: &TempDir, tool: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vata-wrap"))
        .current_dir(dir.path())
        .env_remove("VATA_BIN")
        .env_remove("VATA_TIMEOUT_MS")
        .env_remove("RUST_LOG")
        .arg("--vata")
        .arg(tool)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
#[serial]
fn test_dry_run_prints_argv() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("never-run");

    let output = wrap(&dir, &tool, &["--dry-run", "load", "a.timbuk"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{} -r expl load a.timbuk\n", tool.display())
    );
}

#[test]
#[serial]
fn test_dry_run_inclusion_with_typed_options() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("never-run");

    let output = wrap(
        &dir,
        &tool,
        &[
            "--dry-run",
            "--json",
            "incl",
            "A.timbuk",
            "B.timbuk",
            "--dir",
            "up",
            "--alg",
            "congr",
            "--sim",
            "--order",
            "breadth",
            "--rec",
            "--sim-time",
            "false",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let argv: Vec<String> = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(
        argv[1..],
        [
            "-r",
            "expl",
            "incl",
            "-o",
            "dir=up,order=breadth,alg=congr,sim=yes,optC=no,rec=yes,timeS=no",
            "A.timbuk",
            "B.timbuk",
        ]
    );
}

#[test]
#[serial]
fn test_dry_run_raw_options_and_encoding() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("never-run");

    let output = wrap(
        &dir,
        &tool,
        &[
            "--dry-run",
            "-r",
            "expl_fa",
            "-p",
            "red",
            "a.timbuk",
            "--options",
            "dir=bwd",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{} -r expl_fa -p red -o dir=bwd a.timbuk\n", tool.display())
    );
}

#[test]
#[serial]
fn test_malformed_options_rejected_before_execution() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("never-run");

    let output = wrap(&dir, &tool, &["equiv", "a", "b", "--options", "order"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ERR_MALFORMED_OPTIONS"));
    assert!(stdout(&output).is_empty());
}

#[test]
#[serial]
fn test_conflicting_prune_flags_rejected() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("never-run");

    let output = wrap(&dir, &tool, &["-p", "-s", "--dry-run", "load", "a"]);

    assert!(!output.status.success());
}

#[test]
#[serial]
fn test_tool_output_and_status_are_forwarded() {
    let dir = TempDir::new().unwrap();
    let tool = stub_tool(&dir, "echo \"ops $3\"\necho 'warn' >&2\nexit 1");

    let output = wrap(&dir, &tool, &["union", "a", "b"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "ops union\n");
    assert!(stderr(&output).contains("warn"));
}

#[test]
#[serial]
fn test_help_subcommand_runs_tool_help() {
    let dir = TempDir::new().unwrap();
    let tool = echo_tool(&dir);

    let output = wrap(&dir, &tool, &["-r", "bdd-td", "help"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "-r\nbdd-td\nhelp\n");
}

#[test]
#[serial]
fn test_output_file_receives_stdout() {
    let dir = TempDir::new().unwrap();
    let tool = echo_tool(&dir);
    let out = dir.path().join("result.txt");

    let output = wrap(
        &dir,
        &tool,
        &["--output", out.to_str().unwrap(), "witness", "w.timbuk"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "-r\nexpl\nwitness\nw.timbuk\n"
    );
}

#[test]
#[serial]
fn test_zero_timeout_disables_limit() {
    let dir = TempDir::new().unwrap();
    let tool = stub_tool(&dir, "sleep 0.2\necho finished");

    let output = wrap(&dir, &tool, &["--timeout-ms", "0", "cmpl", "a"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "finished\n");
}

#[test]
#[serial]
fn test_json_result_goes_to_output_file() {
    let dir = TempDir::new().unwrap();
    let tool = stub_tool(&dir, "echo accepted\necho 'note' >&2\nexit 3");
    let out = dir.path().join("result.json");

    let output = wrap(
        &dir,
        &tool,
        &["--json", "--output", out.to_str().unwrap(), "cmpl", "a"],
    );

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    let text = fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["exit_status"], 3);
    assert_eq!(json["stdout"], "accepted\n");
    assert_eq!(json["stderr"], "note\n");
}

#[test]
#[serial]
fn test_json_result() {
    let dir = TempDir::new().unwrap();
    let tool = stub_tool(&dir, "echo accepted\nexit 0");

    let output = wrap(&dir, &tool, &["--json", "sim", "a.timbuk", "--dir", "down"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["stdout"], "accepted\n");
    assert_eq!(json["stderr"], "");
    assert_eq!(json["exit_status"], 0);
}

#[test]
#[serial]
fn test_timeout_exit_code() {
    let dir = TempDir::new().unwrap();
    let tool = stub_tool(&dir, "exec sleep 5");

    let output = wrap(&dir, &tool, &["--timeout-ms", "200", "load", "a"]);

    assert_eq!(output.status.code(), Some(124));
    assert!(stderr(&output).contains("ERR_TIMEOUT"));
}

#[test]
#[serial]
fn test_missing_tool_exits_one() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("not-installed");

    let output = wrap(&dir, &tool, &["load", "a"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not-installed"));
}

#[test]
#[serial]
fn test_config_file_sets_encoding() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("never-run");
    let config = dir.path().join("vata.toml");
    fs::write(&config, "encoding = \"bdd-bu\"\n").unwrap();

    let output = wrap(
        &dir,
        &tool,
        &[
            "--config",
            config.to_str().unwrap(),
            "--dry-run",
            "cmpl",
            "a",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{} -r bdd-bu cmpl a\n", tool.display())
    );
}
