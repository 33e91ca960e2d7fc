use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn doodlepad_cmd() -> Command {
    Command::cargo_bin("doodlepad").expect("binary exists")
}

const SMALL_CONFIG: &str = r#"
[canvas]
width = 64
height = 64

[long_press]
delay_ms = 50
period_ms = 1000
"#;

const TWO_STROKES: &str = r#"
[[step]]
action = "brush-size"
size = 6

[[step]]
action = "down"
x = 10.0
y = 10.0

[[step]]
action = "move"
points = [[20.0, 10.0]]

[[step]]
action = "up"
x = 20.0
y = 10.0

[[step]]
action = "down"
x = 40.0
y = 40.0

[[step]]
action = "up"
x = 40.0
y = 40.0

[[step]]
action = "undo"
"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn doodlepad_help_prints_usage() {
    doodlepad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Touch freehand drawing canvas with long-press color picking",
        ));
}

#[test]
fn no_flags_prints_quick_start() {
    doodlepad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("doodlepad --script"))
        .stdout(predicate::str::contains("Pick color"));
}

#[test]
fn output_requires_script_flag() {
    doodlepad_cmd()
        .args(["--output", "drawing.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("doodlepad").join("config.toml");

    doodlepad_cmd()
        .arg("--init-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[long_press]"));
    assert!(written.contains("default_brush_size = 25"));

    doodlepad_cmd()
        .arg("--init-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_config_uses_config_home() {
    let temp = TempDir::new().unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success();

    assert!(temp.path().join("doodlepad").join("config.toml").exists());
}

#[test]
fn script_replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let config = write(temp.path(), "config.toml", SMALL_CONFIG);
    let script = write(temp.path(), "strokes.toml", TWO_STROKES);
    let output = temp.path().join("out").join("drawing.png");

    doodlepad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 strokes (1 visible)"))
        .stdout(predicate::str::contains("drawing.png"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn long_press_script_discards_tap_point() {
    let temp = TempDir::new().unwrap();
    let config = write(temp.path(), "config.toml", SMALL_CONFIG);
    let script = write(
        temp.path(),
        "hold.toml",
        r#"
        [[step]]
        action = "down"
        x = 30.0
        y = 30.0

        [[step]]
        action = "wait"
        ms = 300

        [[step]]
        action = "up"
        x = 30.0
        y = 30.0
        "#,
    );
    let output = temp.path().join("hold.png");

    doodlepad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 0 strokes (0 visible)"));
}

#[test]
fn missing_script_reports_path() {
    let temp = TempDir::new().unwrap();
    let config = write(temp.path(), "config.toml", SMALL_CONFIG);

    doodlepad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"))
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn empty_script_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = write(temp.path(), "config.toml", SMALL_CONFIG);
    let script = write(temp.path(), "empty.toml", "# nothing here\n");

    doodlepad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("empty.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script contains no steps"));
}

#[test]
fn broken_config_fails_before_replay() {
    let temp = TempDir::new().unwrap();
    let config = write(temp.path(), "config.toml", "[canvas\nwidth = 5");
    let script = write(temp.path(), "strokes.toml", TWO_STROKES);

    doodlepad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
