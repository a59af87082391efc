#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn locate_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("config-locate").unwrap()
}

/// Create a temp project with a Cargo.toml marker at its root.
fn project() -> tempfile::TempDir {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join("Cargo.toml"), "[package]\n").unwrap();
	temp_dir
}

fn write_file(path: &Path, content: &str) {
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	locate_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Find and read a project's config file"));
}

#[test]
fn test_version_flag() {
	locate_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("config-locate"));
}

#[test]
fn test_no_args_shows_help() {
	locate_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// path subcommand tests
// ============================================================================

#[test]
fn test_path_finds_root_config_dir() {
	let temp_dir = project();
	let config_path = temp_dir.path().join("config").join("app.json");
	write_file(&config_path, "{}");

	locate_cmd()
		.args(["path", "app.json"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::ends_with("config/app.json\n"));
}

#[test]
fn test_path_from_nested_directory() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("app.json"), "{}");
	let nested = temp_dir.path().join("src").join("deep");
	fs::create_dir_all(&nested).unwrap();

	locate_cmd()
		.args(["path", "app.json"])
		.current_dir(&nested)
		.assert()
		.success()
		.stdout(predicate::str::ends_with("app.json\n"))
		.stdout(predicate::str::ends_with("src/app.json\n").not());
}

#[test]
fn test_path_not_found() {
	let temp_dir = project();

	locate_cmd()
		.args(["path", "missing.json"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("No config file named missing.json found"));
}

#[test]
fn test_path_custom_src_dir() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("lib").join("app.json"), "{}");

	locate_cmd()
		.args(["path", "app.json", "--src-dir", "lib"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::ends_with("lib/app.json\n"));

	locate_cmd()
		.args(["path", "app.json"])
		.current_dir(temp_dir.path())
		.assert()
		.failure();
}

#[test]
fn test_path_cwd_option() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("app.json"), "{}");

	locate_cmd()
		.args(["path", "app.json", "-C"])
		.arg(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("app.json"));
}

#[test]
fn test_root_not_found() {
	let temp_dir = tempfile::tempdir().unwrap();

	locate_cmd()
		.args([
			"path",
			"app.json",
			"--marker",
			"marker-that-should-not-exist-8f3a1c.lock",
		])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("No project root found"));
}

#[test]
fn test_custom_marker() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join("deno.json"), "{}").unwrap();
	write_file(&temp_dir.path().join("config").join("app.json"), "{}");

	locate_cmd()
		.args(["path", "app.json", "--marker", "deno.json"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("app.json"));
}

// ============================================================================
// read subcommand tests
// ============================================================================

#[test]
fn test_read_prints_contents() {
	let temp_dir = project();
	write_file(
		&temp_dir.path().join("src").join("app.json"),
		r#"{"port": 8080}"#,
	);

	locate_cmd()
		.args(["read", "app.json"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(r#"{"port": 8080}"#);
}

#[test]
fn test_read_root_file_wins() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("app.json"), "root");
	write_file(&temp_dir.path().join("src").join("app.json"), "src");

	locate_cmd()
		.args(["read", "app.json"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout("root");
}

#[test]
fn test_read_skips_directory_candidate() {
	let temp_dir = project();
	fs::create_dir_all(temp_dir.path().join("app.json")).unwrap();
	write_file(
		&temp_dir.path().join("src").join("config").join("app.json"),
		"nested",
	);

	locate_cmd()
		.args(["read", "app.json"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout("nested");
}

#[test]
fn test_read_base64() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("app.json"), "{}");

	locate_cmd()
		.args(["read", "app.json", "--encoding", "base64"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout("e30=");
}

#[test]
fn test_read_unknown_encoding() {
	let temp_dir = project();

	locate_cmd()
		.args(["read", "app.json", "--encoding", "latin1"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Unknown encoding"));
}

#[test]
fn test_read_not_found() {
	let temp_dir = project();

	locate_cmd()
		.args(["read", "app.json"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("No config file named app.json found"));
}

// ============================================================================
// candidates subcommand tests
// ============================================================================

#[test]
fn test_candidates_lists_search_order() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("src").join("app.json"), "{}");
	write_file(&temp_dir.path().join("config").join("app.json"), "{}");

	let output = locate_cmd()
		.args(["candidates", "app.json"])
		.current_dir(temp_dir.path())
		.output()
		.unwrap();

	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	let lines: Vec<&str> = stdout
		.lines()
		.filter(|line| line.starts_with("  "))
		.collect();

	assert_eq!(lines.len(), 4);
	assert!(lines[0].ends_with("(missing)"));
	assert!(lines[1].ends_with("(selected)"));
	assert!(lines[2].ends_with("(shadowed)"));
	assert!(lines[3].ends_with("(missing)"));
	assert!(stdout.starts_with("Project root: "));
}

#[test]
fn test_verbose_logs_to_stderr() {
	let temp_dir = project();
	write_file(&temp_dir.path().join("app.json"), "{}");

	locate_cmd()
		.args(["path", "app.json", "--verbose"])
		.current_dir(temp_dir.path())
		.env_remove("RUST_LOG")
		.assert()
		.success()
		.stderr(predicate::str::contains("resolved config file"));
}
