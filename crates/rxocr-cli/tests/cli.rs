use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const RESPONSE: &str = r#"{
    "version": "V2",
    "images": [{
        "name": "demo",
        "inferResult": "SUCCESS",
        "fields": [{"inferText": "처방전"}],
        "tables": [{
            "cells": [
                {"rowIndex": 0, "columnIndex": 0, "cellTextLines": [{"cellWords": [{"inferText": "처방"}, {"inferText": "의약품의"}, {"inferText": "명칭"}]}]},
                {"rowIndex": 0, "columnIndex": 1, "cellTextLines": [{"cellWords": [{"inferText": "1회"}, {"inferText": "투약량"}]}]},
                {"rowIndex": 0, "columnIndex": 2, "cellTextLines": [{"cellWords": [{"inferText": "1일"}, {"inferText": "투여횟수"}]}]},
                {"rowIndex": 0, "columnIndex": 3, "cellTextLines": [{"cellWords": [{"inferText": "총"}, {"inferText": "투약일수"}]}]},
                {"rowIndex": 1, "columnIndex": 0, "cellTextLines": [{"cellWords": [{"inferText": "[정]0012"}, {"inferText": "타이레놀"}]}]},
                {"rowIndex": 1, "columnIndex": 1, "cellTextLines": [{"cellWords": [{"inferText": "1"}, {"inferText": "정"}]}]},
                {"rowIndex": 1, "columnIndex": 2, "cellTextLines": [{"cellWords": [{"inferText": "3"}, {"inferText": "정"}]}]},
                {"rowIndex": 1, "columnIndex": 3, "cellTextLines": [{"cellWords": [{"inferText": "5일"}]}]}
            ]
        }]
    }]
}"#;

fn write_config(dir: &Path) -> String {
    let path = dir.join("config.json");
    fs::write(&path, "{}").unwrap();
    path.to_string_lossy().into_owned()
}

fn rxocr() -> Command {
    Command::cargo_bin("rxocr").unwrap()
}

#[test]
fn test_extract_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("response.json");
    fs::write(&input, RESPONSE).unwrap();
    let config = write_config(dir.path());

    rxocr()
        .args(["--config", &config, "extract"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"[정] 타이레놀""#))
        .stdout(predicate::str::contains(r#""dosage":"1 cc""#))
        .stdout(predicate::str::contains(r#""frequency":"3번""#))
        .stdout(predicate::str::contains(r#""duration":"5""#));
}

#[test]
fn test_extract_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("response.json");
    let output = dir.path().join("out.csv");
    fs::write(&input, RESPONSE).unwrap();
    let config = write_config(dir.path());

    rxocr()
        .args(["--config", &config, "extract", "-f", "csv", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "name,dosage,frequency,duration,method\n[정] 타이레놀,1 cc,3번,5,\n"
    );
}

#[test]
fn test_extract_unparsable_response() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, r#"{"images": []}"#).unwrap();
    let config = write_config(dir.path());

    rxocr()
        .args(["--config", &config, "extract"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no images"));
}

#[test]
fn test_text_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("response.json");
    fs::write(&input, RESPONSE).unwrap();

    rxocr()
        .arg("text")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("처방전"));
}

#[test]
fn test_batch_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    fs::write(dir.path().join("a.json"), RESPONSE).unwrap();
    fs::write(dir.path().join("b.json"), "not json").unwrap();
    let config_dir = tempfile::tempdir().unwrap();
    let config = write_config(config_dir.path());

    let pattern = dir.path().join("*.json");

    rxocr()
        .args(["--config", &config, "batch", "--summary", "--continue-on-error", "-o"])
        .arg(&out_dir)
        .arg(pattern.to_string_lossy().as_ref())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"));

    assert!(out_dir.join("a.json").exists());
    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("a.json,success,1"));
    assert!(summary.contains("b.json,error"));
}

#[test]
fn test_config_get_uses_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"extraction":{"method_label":"복용법"}}"#).unwrap();

    rxocr()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.method_label"])
        .assert()
        .success()
        .stdout(predicate::str::contains("복용법"));
}

#[test]
fn test_config_set_writes_config_flag_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    rxocr()
        .args(["--config", &config, "config", "set", "extraction.method_label", "투약법"])
        .assert()
        .success();

    let saved = fs::read_to_string(&config).unwrap();
    assert!(saved.contains("투약법"));

    rxocr()
        .args(["--config", &config, "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.as_str()))
        .stdout(predicate::str::contains("exists"));
}
