use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn qmltr_extract() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qmltr-extract"))
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = qmltr_extract().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Usage: qmltr-extract"));
}

#[test]
fn test_one_argument_prints_usage_without_touching_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");

    let output = qmltr_extract().arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().contains("Usage:"));
    assert!(!input.exists());
}

#[test]
fn test_converts_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.qml");
    fs::write(&input, r#"{"a": {"b": {"name": "X"}}, "c": {"name": "a\\b\"c"}}"#).unwrap();

    let status = qmltr_extract().arg(&input).arg(&out).status().unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        concat!(
            "import QtQuick 2.0\n",
            "Item {\n",
            "    property string b_name: qsTr(\"X\")\n",
            "    property string c_name: qsTr(\"a\\\\b\\\"c\")\n",
            "}\n",
        )
    );
}

#[test]
fn test_accumulate_prefix_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.qml");
    fs::write(&input, r#"{"a": {"b": {"name": "X"}}}"#).unwrap();

    let status = qmltr_extract()
        .arg("--accumulate-prefix")
        .arg(&input)
        .arg(&out)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(fs::read_to_string(&out)
        .unwrap()
        .contains("    property string a_b_name: qsTr(\"X\")\n"));
}

#[test]
fn test_list_prints_properties() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.qml");
    fs::write(&input, r#"{"disk": {"name": "Floppy"}}"#).unwrap();

    let output = qmltr_extract()
        .arg("--list")
        .arg(&input)
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, serde_json::json!([{"name": "disk_name", "value": "Floppy"}]));
}

#[test]
fn test_missing_input_fails_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.json");
    let out = dir.path().join("out.qml");

    let output = qmltr_extract().arg(&input).arg(&out).output().unwrap();

    assert!(!output.status.success());
    assert!(!out.exists());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_unknown_flag_prints_usage() {
    let output = qmltr_extract().arg("-x").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Usage: qmltr-extract"));
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.qml");
    fs::write(&input, r#"{"disk": {"name": "Floppy"}}"#).unwrap();

    let status = qmltr_extract()
        .arg(&input)
        .arg(&out)
        .arg("leftover")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(fs::read_to_string(&out)
        .unwrap()
        .contains("    property string disk_name: qsTr(\"Floppy\")\n"));
}

#[test]
fn test_deeply_nested_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deep.json");
    let out = dir.path().join("out.qml");
    let depth = 200;
    let text = format!(
        "{}{{\"name\": \"deep\"}}{}",
        "{\"k\": ".repeat(depth),
        "}".repeat(depth)
    );
    fs::write(&input, text).unwrap();

    let status = qmltr_extract().arg(&input).arg(&out).status().unwrap();

    assert!(status.success());
    assert!(fs::read_to_string(&out)
        .unwrap()
        .contains("    property string k_name: qsTr(\"deep\")\n"));
}
