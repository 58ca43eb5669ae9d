use assert_cmd::Command as StdinCommand;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn decode_yaml_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let input = "a: 2\nb:\n  - true\n  - x\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let v_out: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v_out, serde_json::json!({"a": 2, "b": [true, "x"]}));
    Ok(())
}

#[test]
fn encode_json_to_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let input = "{\n  \"a\": 1,\n  \"b\": [true, \"x\"]\n}\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .arg("--encode")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert!(out.contains("a: 1"));
    assert!(out.contains("b:"));
    assert!(out.contains("- true"));
    assert!(out.contains("- x"));
    Ok(())
}

#[test]
fn reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    StdinCommand::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .write_stdin("[1, 2.5, ~]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1,2.5,null]"));
    Ok(())
}

#[test]
fn syntax_error_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    StdinCommand::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .write_stdin("{a: 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("flow mapping"));
    Ok(())
}

#[test]
fn strict_flag_rejects_deeper_sibling() -> Result<(), Box<dyn std::error::Error>> {
    StdinCommand::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .arg("--strict")
        .write_stdin("a: 1\n  b: 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("indentation"));
    StdinCommand::new(assert_cmd::cargo::cargo_bin!("quickyaml-cli"))
        .write_stdin("a: 1\n  b: 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"a\":1}"));
    Ok(())
}
