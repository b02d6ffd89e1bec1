use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

const SCION_URL: &str = "https://www.pathofexile.com/passive-skill-tree/AAAABgAAAeXRAAA=";

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_treelink"))
        .args(args)
        .output()
        .expect("failed to run treelink CLI")
}

fn temp_json_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "treelink_{}_{}.json",
        std::process::id(),
        nanos
    ))
}

#[test]
fn decode_prints_text_summary() {
    let output = run_cli(&["decode", SCION_URL]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("class: Scion (ascendancy 0)"));
    assert!(stdout.contains("nodes (1): 58833"));
}

#[test]
fn decode_prints_json_when_asked() {
    let output = run_cli(&["decode", "--json", SCION_URL]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: Value = serde_json::from_str(stdout.trim()).expect("stdout is not valid JSON");
    assert_eq!(value["class"], "Scion");
    assert_eq!(value["nodes"], serde_json::json!([58833]));
    assert_eq!(value["dialect"], "official");
}

#[test]
fn decode_honors_tree_version_flag() {
    let output = run_cli(&["decode", "--json", "--tree-version", "3.22", SCION_URL]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: Value = serde_json::from_str(stdout.trim()).expect("stdout is not valid JSON");
    assert_eq!(value["tree_version"], "3_22");
}

#[test]
fn decode_rejects_garbage_input() {
    let output = run_cli(&["decode", "definitely not a tree link"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
}

#[test]
fn encode_prints_canonical_url() {
    let selection_json = r#"{
        "class": "Scion",
        "ascend_class_id": 0,
        "tree_version": "V3_25",
        "nodes": [58833],
        "ascendancy_nodes": [],
        "masteries": {},
        "bandit_choice": 0
    }"#;
    let path = temp_json_path();
    std::fs::write(&path, selection_json).expect("failed to write temp selection");

    let output = run_cli(&["encode", path.to_string_lossy().as_ref()]);
    std::fs::remove_file(&path).ok();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), SCION_URL);
}

#[test]
fn encode_rejects_invalid_json() {
    let path = temp_json_path();
    std::fs::write(&path, "{not json").expect("failed to write temp selection");

    let output = run_cli(&["encode", path.to_string_lossy().as_ref()]);
    std::fs::remove_file(&path).ok();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid selection JSON"));
}
