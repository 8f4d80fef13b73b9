use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use stockwidget::store::{FilePreferences, WidgetData, update_widget_data};
use tempfile::tempdir;

fn run_stockwidget(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stockwidget"))
        .args(args)
        .output()
        .unwrap()
}

fn write_config(dir: &Path, extra: &str) {
    fs::write(
        dir.join("stockwidget.toml"),
        format!("store_path = \"prefs.json\"\ninstances = [1, 2]\n{extra}"),
    )
    .unwrap();
    update_widget_data(
        &FilePreferences::new(dir.join("prefs.json")),
        &WidgetData::now(5, 2),
    )
    .unwrap();
}

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(stdout.to_vec())
        .unwrap()
        .lines()
        .map(|line| {
            serde_json::from_str(line).unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})"))
        })
        .collect()
}

#[test]
fn test_configured_json_output_stays_clean_with_debug() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "output = \"json\"\n");
    let config_dir = dir.path().to_str().unwrap();

    let output = run_stockwidget(&["--config", config_dir, "refresh", "--debug"]);
    assert!(output.status.success());

    let views = json_lines(&output.stdout);
    assert_eq!(views.len(), 2);
    assert_eq!(views[0]["instance"], 1);
    assert_eq!(views[1]["widget_count"], "5");
}

#[test]
fn test_json_flag_stays_clean_with_debug() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "");
    let config_dir = dir.path().to_str().unwrap();

    let output = run_stockwidget(&["-d", "-c", config_dir, "refresh", "--json", "2"]);
    assert!(output.status.success());

    let views = json_lines(&output.stdout);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["instance"], 2);

    let output = run_stockwidget(&["-d", "-c", config_dir, "show", "--json"]);
    assert!(output.status.success());
    let states = json_lines(&output.stdout);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["totalStock"], "5");
}

#[test]
fn test_text_output_uses_logger() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "");
    let config_dir = dir.path().to_str().unwrap();

    let output = run_stockwidget(&["--config", config_dir, "refresh"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("┣ Widget 1"));
    assert!(stdout.contains("widget_count: 5"));
}
