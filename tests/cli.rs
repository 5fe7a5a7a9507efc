use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use fhe_scaffold::Registry;

fn run(root: &Path, args: &[&str]) -> (Output, serde_json::Value) {
    let output = Command::new(env!("CARGO_BIN_EXE_fhe-scaffold"))
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .unwrap();
    let json = serde_json::from_slice(&output.stdout).unwrap();
    (output, json)
}

/// A repository holding the base template and every built-in example's
/// sources, except those of `missing`.
fn builtin_repo(root: &Path, missing: &str) {
    let write = |relative: &str, content: &str| {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };

    write(
        "fhevm-hardhat-template/package.json",
        "{\n  \"name\": \"fhevm-hardhat-template\"\n}\n",
    );
    write("fhevm-hardhat-template/deploy/deploy.ts", "// placeholder\n");

    for example in Registry::builtin().examples() {
        if example.id == missing {
            continue;
        }
        let name = example.contract_name();
        write(
            &example.contract.to_string_lossy(),
            &format!("contract {} {{}}\n", name),
        );
        write(
            &example.test.to_string_lossy(),
            &format!("describe(\"{}\", () => {{}});\n", name),
        );
    }
}

fn ids_with_status(json: &serde_json::Value, status: &str) -> Vec<String> {
    json["data"]["summary"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["status"] == status)
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn docs_all_with_missing_source_exits_one_and_reports_successes() {
    let dir = tempfile::tempdir().unwrap();
    builtin_repo(dir.path(), "blind-auction");

    let (output, json) = run(dir.path(), &["generate-docs", "--all"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json["data"]["summary"]["failed"], 1);
    assert_eq!(ids_with_status(&json, "failed"), vec!["blind-auction".to_string()]);
    let succeeded = ids_with_status(&json, "ok");
    assert_eq!(succeeded.len(), Registry::builtin().examples().len() - 1);
    assert!(succeeded.contains(&"fhe-counter".to_string()));
    assert!(String::from_utf8_lossy(&output.stderr).contains("blind-auction"));

    let index = fs::read_to_string(dir.path().join("docs/SUMMARY.md")).unwrap();
    assert!(index.contains("(fhe-counter.md)"));
    assert!(!index.contains("blind-auction.md"));
}

#[test]
fn category_with_missing_member_exits_zero_and_warns() {
    let dir = tempfile::tempdir().unwrap();
    builtin_repo(dir.path(), "blind-auction");
    let out = dir.path().join("advanced");

    let (output, json) = run(
        dir.path(),
        &["create-category", "advanced", out.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["includedCount"], 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: Skipping 'blind-auction'"));
    assert!(out.join("contracts/EncryptedSum.sol").is_file());
    assert!(out.join("contracts/ConfidentialToken.sol").is_file());
    assert!(!out.join("contracts/BlindAuction.sol").exists());
}

#[test]
fn unknown_example_exits_one_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out2");

    let (output, json) = run(
        dir.path(),
        &["create-example", "gamma", out.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "registry.example_not_found");
    assert!(json["error"]["details"]["available"]
        .as_array()
        .unwrap()
        .iter()
        .any(|id| id == "fhe-counter"));
    assert!(!out.exists());
}

#[test]
fn missing_id_lists_examples() {
    let dir = tempfile::tempdir().unwrap();

    let (output, json) = run(dir.path(), &["create-example"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json["data"]["command"], "create-example.list");
    assert!(json["data"]["examples"].as_array().unwrap().len() >= 10);
}

#[test]
fn blank_id_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();

    let (output, json) = run(dir.path(), &["create-category", "  "]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(json["error"]["code"], "validation.invalid_argument");
}

#[test]
fn list_categories_only() {
    let dir = tempfile::tempdir().unwrap();

    let (output, json) = run(dir.path(), &["list", "--categories"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(json["data"].get("examples").is_none());
    let ids: Vec<_> = json["data"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert!(ids.contains(&"basic".to_string()));
}

#[test]
fn generate_docs_needs_an_id_or_all() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fhe-scaffold"))
        .arg("--root")
        .arg(dir.path())
        .arg("generate-docs")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("docs").exists());
}
