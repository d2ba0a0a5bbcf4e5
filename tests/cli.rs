//! End-to-end runs of the command-line entry point against temp files

use std::path::Path;

use clap::Parser;
use scrubber::cli::{run_with_keymap, CliArgs};
use scrubber::keymap::{default_bindings, Keymap};

fn write_file(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

/// Run with a config path that does not exist and the built-in keymap, so
/// user settings and keymaps never leak in
fn run_cli(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let config = dir.join("config.yaml");
    let mut argv = vec!["scrubber", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    run_with_keymap(CliArgs::try_parse_from(argv)?, || {
        Keymap::with_bindings(default_bindings())
    })
}

#[test]
fn test_inspect_reports_literal_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.css", "body {\n  color: #A0b0C0;\n}\n");

    let out = run_cli(
        dir.path(),
        &["inspect", file.to_str().unwrap(), "--line", "2", "--column", "12"],
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["kind"], "color6");
    assert_eq!(json["text"], "#A0b0C0");
    assert_eq!(json["line"], 2);
    assert_eq!(json["start"], 10);
    assert_eq!(json["end"], 17);
}

#[test]
fn test_inspect_without_literal_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.css", "display: none;\n");

    let result = run_cli(
        dir.path(),
        &["inspect", file.to_str().unwrap(), "--line", "1", "--column", "3"],
    );
    assert!(result.is_err());
}

#[test]
fn test_inspect_rejects_number_too_large_to_scrub() {
    let dir = tempfile::tempdir().unwrap();
    let text = format!("x = {}\n", "9".repeat(400));
    let file = write_file(dir.path(), "a.txt", &text);

    let result = run_cli(
        dir.path(),
        &["inspect", file.to_str().unwrap(), "--line", "1", "--column", "6"],
    );
    assert!(result.is_err());

    // Nudge agrees: nothing to scrub there
    let out = run_cli(
        dir.path(),
        &["nudge", file.to_str().unwrap(), "--line", "1", "--column", "6"],
    )
    .unwrap();
    assert_eq!(format!("{}\n", out), text);
}

#[test]
fn test_nudge_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.css", "a { width: 10px; }\n");

    let out = run_cli(
        dir.path(),
        &[
            "nudge",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--column",
            "12",
            "--times",
            "5",
        ],
    )
    .unwrap();

    assert_eq!(out, "a { width: 15px; }");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "a { width: 15px; }\n");
}

#[test]
fn test_nudge_down_dry_run_leaves_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.txt", "alpha = 0.3\n");

    let out = run_cli(
        dir.path(),
        &[
            "nudge",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--column",
            "9",
            "--down",
            "--times",
            "4",
            "--dry-run",
        ],
    )
    .unwrap();

    assert_eq!(out, "alpha = -0.1");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "alpha = 0.3\n");
}

#[test]
fn test_drag_replays_pointer_positions() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.css", "fill: #808080;\n");

    let out = run_cli(
        dir.path(),
        &[
            "drag",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--column",
            "8",
            "80",
            "-16",
        ],
    )
    .unwrap();

    // Only the final position counts
    assert_eq!(out, "fill: #7e7e7e;");
}

#[test]
fn test_drag_without_literal_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.css", "fill: red;\n");

    let result = run_cli(
        dir.path(),
        &["drag", file.to_str().unwrap(), "--line", "1", "--column", "8", "8"],
    );
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "fill: red;\n");
}

#[test]
fn test_keys_nudge_then_undo() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.txt", "x = 1\n");

    let out = run_cli(
        dir.path(),
        &[
            "keys",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--column",
            "5",
            "--dry-run",
            "cmd+alt+up",
            "cmd+alt+up",
            "cmd+alt+up",
        ],
    )
    .unwrap();
    assert_eq!(out, "x = 4");

    let out = run_cli(
        dir.path(),
        &[
            "keys",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--column",
            "5",
            "cmd+alt+up",
            "cmd+alt+up",
            "cmd+z",
        ],
    )
    .unwrap();
    assert_eq!(out, "x = 1");
}

#[test]
fn test_line_past_end_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.txt", "x = 1\n");

    let result = run_cli(
        dir.path(),
        &["nudge", file.to_str().unwrap(), "--line", "9"],
    );
    assert!(result.is_err());
}
