mod common;

use std::fs;

use common::{alpha, beta, files_under, registry, Fixture};
use fhe_scaffold::category;
use fhe_scaffold::output::ItemStatus;
use fhe_scaffold::{CategoryDescriptor, ExampleDescriptor, Registry};

fn registry_with_missing_member() -> Registry {
    let gone = ExampleDescriptor::new(
        "gone",
        "contracts/Gone.sol",
        "test/Gone.ts",
        "Source was deleted.",
    );
    Registry::new(
        vec![alpha(), gone, beta()],
        vec![CategoryDescriptor::new(
            "mixed",
            "Two good, one missing.",
            ["alpha", "gone", "beta"],
        )],
    )
    .unwrap()
}

#[test]
fn includes_every_member_in_order() {
    let fx = Fixture::new();
    let dest = fx.path("cat");

    let output = category::generate(&fx.workspace, &registry(), "pair", &dest).unwrap();

    assert_eq!(output.included_count, 2);
    let ids: Vec<_> = output.included.iter().map(|i| i.example_id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta"]);
    assert!(output.warnings.is_empty());
    assert_eq!(
        fs::read(dest.join("contracts/B.sol")).unwrap(),
        fs::read(fx.path("contracts/nested/B.sol")).unwrap()
    );
    assert!(dest.join("test/A.ts").is_file());
    assert!(dest.join("test/B.ts").is_file());

    let package: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["name"], "fhevm-examples-pair");

    let deploy = fs::read_to_string(dest.join("deploy/deploy.ts")).unwrap();
    let a = deploy.find(r#"deploy("A""#).unwrap();
    let b = deploy.find(r#"deploy("B""#).unwrap();
    assert!(a < b);
}

#[test]
fn missing_member_is_skipped_with_warning() {
    let fx = Fixture::new();
    let dest = fx.path("cat");

    let output =
        category::generate(&fx.workspace, &registry_with_missing_member(), "mixed", &dest).unwrap();

    assert_eq!(output.included_count, 2);
    assert_eq!(output.summary.ids_with(ItemStatus::Skipped), vec!["gone".to_string()]);
    assert!(output.warnings.iter().any(|w| w.contains("'gone'")));

    let contracts: Vec<_> = files_under(&dest.join("contracts"));
    assert_eq!(contracts, vec!["A.sol".to_string(), "B.sol".to_string()]);

    let readme = fs::read_to_string(dest.join("README.md")).unwrap();
    assert!(readme.contains("Two good, one missing."));
    assert!(readme.contains("**alpha**"));
    assert!(readme.contains("**beta**"));
    assert!(readme.contains("### Not Included\n\n- gone\n"));
}

#[test]
fn unregistered_member_is_skipped() {
    let fx = Fixture::new();
    let reg = Registry::new(
        vec![alpha()],
        vec![CategoryDescriptor::new("loose", "Has a typo.", ["alpha", "alpah"])],
    )
    .unwrap();

    let output = category::generate(&fx.workspace, &reg, "loose", &fx.path("cat")).unwrap();

    assert_eq!(output.included_count, 1);
    assert!(output
        .warnings
        .iter()
        .any(|w| w.contains("'alpah'") && w.contains("not a registered example")));
}

#[test]
fn moved_contract_is_found_by_fallback_search() {
    let fx = Fixture::new();
    fx.write("contracts/archive/MovedCounter.sol", "contract MovedCounter {}\n");
    let moved = ExampleDescriptor::new(
        "moved",
        "contracts/old-place/MovedCounter.sol",
        "test/MovedCounter.ts",
        "Lives somewhere else now.",
    );
    let reg = Registry::new(
        vec![moved],
        vec![CategoryDescriptor::new("solo", "Fallback only.", ["moved"])],
    )
    .unwrap();
    let dest = fx.path("cat");

    let output = category::generate(&fx.workspace, &reg, "solo", &dest).unwrap();

    assert_eq!(output.included_count, 1);
    assert!(output.included[0].fallback);
    assert!(output.included[0].test.is_none());
    assert!(dest.join("contracts/MovedCounter.sol").is_file());
    assert!(output.warnings.iter().any(|w| w.contains("fallback")));
    assert!(output.warnings.iter().any(|w| w.contains("no test file")));
}

#[test]
fn colliding_file_names_are_included_once() {
    let fx = Fixture::new();
    fx.write("contracts/other/A.sol", "contract OtherA {}\n");
    let other = ExampleDescriptor::new("other-a", "contracts/other/A.sol", "test/A.ts", "Clash.");
    let reg = Registry::new(
        vec![alpha(), other],
        vec![CategoryDescriptor::new("clash", "Same file name.", ["alpha", "other-a"])],
    )
    .unwrap();
    let dest = fx.path("cat");

    let output = category::generate(&fx.workspace, &reg, "clash", &dest).unwrap();

    assert_eq!(output.included_count, 1);
    assert_eq!(
        fs::read_to_string(dest.join("contracts/A.sol")).unwrap(),
        fx.read("contracts/A.sol")
    );
    assert_eq!(
        output.summary.ids_with(ItemStatus::Skipped),
        vec!["other-a".to_string()]
    );
}

#[test]
fn unknown_category_and_existing_destination_fail_without_writes() {
    let fx = Fixture::new();
    let reg = registry();

    let err = category::generate(&fx.workspace, &reg, "nope", &fx.path("cat")).unwrap_err();
    assert_eq!(err.code.as_str(), "registry.category_not_found");
    assert!(!fx.path("cat").exists());

    fs::create_dir_all(fx.path("taken")).unwrap();
    let err = category::generate(&fx.workspace, &reg, "pair", &fx.path("taken")).unwrap_err();
    assert_eq!(err.code.as_str(), "generate.destination_exists");
    assert!(files_under(&fx.path("taken")).is_empty());
}
