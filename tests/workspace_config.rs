mod common;

use common::{registry, Fixture};
use fhe_scaffold::{example, Workspace};

#[test]
fn scaffold_json_redirects_template_and_output() {
    let fx = Fixture::new();
    std::fs::rename(fx.path("fhevm-hardhat-template"), fx.path("base")).unwrap();
    fx.write(
        "scaffold.json",
        r#"{"defaults":{"template":{"dir":"base"},"output":{"root":"generated","example_prefix":"demo"}}}"#,
    );

    let workspace = Workspace::load(fx.root()).unwrap();
    let dest = workspace.default_example_output("alpha");
    assert_eq!(dest, fx.path("generated/demo-alpha"));

    example::generate(&workspace, &registry(), "alpha", &dest).unwrap();
    assert!(dest.join("contracts/A.sol").is_file());
    assert!(!dest.join("contracts/FHECounter.sol").exists());
}

#[test]
fn invalid_scaffold_json_is_rejected() {
    let fx = Fixture::new();
    fx.write("scaffold.json", "{\"defaults\": [}");

    let err = Workspace::load(fx.root()).unwrap_err();
    assert_eq!(err.code.as_str(), "config.invalid_json");
}

#[test]
fn relocated_sources_still_install_into_hardhat_layout() {
    let fx = Fixture::new();
    fx.write(
        "scaffold.json",
        r#"{"defaults":{"sources":{"contracts_dir":"src/contracts","tests_dir":"src/test"}}}"#,
    );

    let workspace = Workspace::load(fx.root()).unwrap();
    let dest = fx.path("out");
    let output = example::generate(&workspace, &registry(), "alpha", &dest).unwrap();

    assert_eq!(output.contract, "contracts/A.sol");
    assert_eq!(output.test, "test/A.ts");
    assert!(dest.join("contracts/A.sol").is_file());
    assert!(dest.join("test/A.ts").is_file());
    assert!(!dest.join("src").exists());
    let readme = std::fs::read_to_string(dest.join("README.md")).unwrap();
    assert!(readme.contains("`contracts/A.sol`"));
}
