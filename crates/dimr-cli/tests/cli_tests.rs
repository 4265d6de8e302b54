//! End-to-end runs over manifests written to a temporary directory.

use clap::Parser;
use dimr_cli::args::CliArgs;
use dimr_cli::driver;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// `Lib` declares `I1` with a default `M1` and an abstract `M2`; `App`
/// runs on a legacy runtime and implements only `M2`.
const MANIFEST: &str = r#"{
  "assemblies": [
    {
      "name": "Lib",
      "coreLibrary": { "name": "System.Runtime", "runtimeFeatures": ["DefaultImplementationsOfInterfaces"] },
      "types": [
        {
          "name": "I1",
          "kind": "interface",
          "members": [
            { "member": "method", "name": "M1", "hasBody": true },
            { "member": "method", "name": "M2" }
          ]
        }
      ]
    },
    {
      "name": "App",
      "references": ["Lib"],
      "coreLibrary": { "name": "mscorlib" },
      "types": [
        {
          "name": "Test",
          "kind": "class",
          "interfaces": ["I1"],
          "interfaceListSpan": { "file": "app.cs", "start": 12, "length": 2 },
          "members": [
            { "member": "method", "name": "M2", "modifiers": ["public"], "hasBody": true }
          ]
        }
      ]
    }
  ]
}"#;

fn write_manifest(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("manifest.json");
    std::fs::write(&path, text).expect("write manifest");
    path
}

fn args(manifest: &Path, extra: &[&str]) -> CliArgs {
    let mut argv = vec!["dimr".to_string(), manifest.display().to_string()];
    argv.extend(extra.iter().map(|s| (*s).to_string()));
    CliArgs::try_parse_from(argv).expect("args should parse")
}

#[test]
fn reports_the_last_assembly_by_default() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&dir, MANIFEST);

    let report = driver::run(&args(&manifest, &[])).expect("run");
    assert_eq!(report.assembly, "App");
    let codes: Vec<u32> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![8707]);
    assert!(report.has_errors());
    assert_eq!(report.implementations, None);
}

#[test]
fn reports_a_selected_assembly_with_implementations() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&dir, MANIFEST);

    let lib = driver::run(&args(&manifest, &["--assembly", "Lib"])).expect("run");
    assert_eq!(lib.assembly, "Lib");
    assert!(lib.diagnostics.is_empty());

    let app = driver::run(&args(&manifest, &["--implementations"])).expect("run");
    let entries = app.implementations.expect("implementation map");
    let rows: Vec<(&str, Option<&str>)> = entries
        .iter()
        .map(|e| (e.interface_member.as_str(), e.source))
        .collect();
    assert_eq!(rows, vec![("I1.M1()", Some("default")), ("I1.M2()", Some("implicit"))]);
}

#[test]
fn unknown_assembly_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&dir, MANIFEST);
    let err = driver::run(&args(&manifest, &["--assembly", "Nope"])).expect_err("should fail");
    assert_eq!(err.to_string(), "assembly 'Nope' is not in the manifest");
}

#[test]
fn missing_manifest_reports_its_path() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.json");
    let err = driver::run(&args(&missing, &[])).expect_err("should fail");
    assert!(err.to_string().contains("absent.json"), "{err:#}");
}

#[test]
fn binary_exits_with_2_on_errors_and_prints_json() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&dir, MANIFEST);

    let output = Command::new(env!("CARGO_BIN_EXE_dimr"))
        .arg(&manifest)
        .arg("--json")
        .env_remove("DIMR_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run dimr");
    assert_eq!(output.status.code(), Some(2));

    let json: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(json["assembly"], "App");
    assert_eq!(json["diagnostics"][0]["code"], 8707);
    assert_eq!(json["diagnostics"][0]["file"], "app.cs");
}

#[test]
fn binary_exits_with_0_when_clean() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&dir, MANIFEST);

    let output = Command::new(env!("CARGO_BIN_EXE_dimr"))
        .arg(&manifest)
        .args(["--assembly", "Lib", "--pretty", "false"])
        .env_remove("DIMR_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run dimr");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No diagnostics."), "{stderr}");
}
