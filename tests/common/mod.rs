#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use fhe_scaffold::defaults;
use fhe_scaffold::{CategoryDescriptor, ExampleDescriptor, Registry, Workspace};
use tempfile::TempDir;

pub const TEMPLATE_PACKAGE_JSON: &str = "{\n  \"name\": \"fhevm-hardhat-template\",\n  \"description\": \"Hardhat template\",\n  \"version\": \"0.1.0\"\n}\n";

/// A throwaway repository: base template, example sources and docs dir.
pub struct Fixture {
    pub dir: TempDir,
    pub workspace: Workspace,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(root, "fhevm-hardhat-template/package.json", TEMPLATE_PACKAGE_JSON);
        write(root, "fhevm-hardhat-template/hardhat.config.ts", "export default {};\n");
        write(root, "fhevm-hardhat-template/contracts/FHECounter.sol", "contract FHECounter {}\n");
        write(root, "fhevm-hardhat-template/test/FHECounter.ts", "// placeholder test\n");
        write(root, "fhevm-hardhat-template/deploy/deploy.ts", "// placeholder deploy\n");
        write(root, "fhevm-hardhat-template/node_modules/dep/index.js", "module.exports = 1;\n");
        write(root, "fhevm-hardhat-template/artifacts/build-info/x.json", "{}\n");
        write(root, "fhevm-hardhat-template/tasks/cache/stale.txt", "stale\n");
        write(root, "fhevm-hardhat-template/tasks/accounts.ts", "// task\n");

        write(root, "contracts/A.sol", "// SPDX-License-Identifier: MIT\ncontract A {}\n");
        write(root, "test/A.ts", "describe(\"A\", () => {});\n");
        write(root, "contracts/nested/B.sol", "contract B {}\n");
        write(root, "test/nested/B.ts", "describe(\"B\", () => {});\n");

        let workspace = Workspace::with_defaults(root, defaults::builtin_defaults());
        Self { dir, workspace }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        write(self.dir.path(), relative, content);
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn alpha() -> ExampleDescriptor {
    ExampleDescriptor::new("alpha", "contracts/A.sol", "test/A.ts", "The first example.")
        .with_title("Alpha")
        .with_category("Basic")
}

pub fn beta() -> ExampleDescriptor {
    ExampleDescriptor::new(
        "beta",
        "contracts/nested/B.sol",
        "test/nested/B.ts",
        "The second example.",
    )
    .with_title("Beta")
    .with_category("Basic")
}

/// `alpha` and `beta` with valid sources.
pub fn registry() -> Registry {
    Registry::new(
        vec![alpha(), beta()],
        vec![CategoryDescriptor::new("pair", "Both examples.", ["alpha", "beta"])],
    )
    .unwrap()
}

/// List the relative paths of every file under `dir`, sorted.
pub fn files_under(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap().flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                out.push(
                    path.strip_prefix(base)
                        .unwrap()
                        .to_string_lossy()
                        .replace('\\', "/"),
                );
            }
        }
    }

    let mut out = Vec::new();
    walk(dir, dir, &mut out);
    out.sort();
    out
}
