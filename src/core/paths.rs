//! Repository layout: resolves configured relative paths against a root.

use std::path::{Path, PathBuf};

use crate::defaults::{self, Defaults};
use crate::error::Result;

/// A repository checkout the generators read from.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    defaults: Defaults,
}

impl Workspace {
    /// Open a workspace, reading `scaffold.json` from `root` when present.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = defaults::load_config(&root)?;
        Ok(Self::with_defaults(root, config.defaults))
    }

    pub fn with_defaults(root: impl Into<PathBuf>, defaults: Defaults) -> Self {
        Self {
            root: root.into(),
            defaults,
        }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Resolve a root-relative path. Absolute paths pass through unchanged.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn template_dir(&self) -> PathBuf {
        self.resolve(&self.defaults.template.dir)
    }

    pub fn contracts_dir(&self) -> PathBuf {
        self.resolve(&self.defaults.sources.contracts_dir)
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.resolve(&self.defaults.sources.tests_dir)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.resolve(&self.defaults.docs.dir)
    }

    pub fn index_file(&self) -> PathBuf {
        self.docs_dir().join(&self.defaults.docs.index_file)
    }

    /// `<root>/<output root>/<prefix>-<id>`
    pub fn default_output(&self, prefix: &str, id: &str) -> PathBuf {
        self.resolve(&self.defaults.output.root)
            .join(format!("{}-{}", prefix, id))
    }

    pub fn default_example_output(&self, id: &str) -> PathBuf {
        self.default_output(&self.defaults.output.example_prefix, id)
    }

    pub fn default_category_output(&self, id: &str) -> PathBuf {
        self.default_output(&self.defaults.output.category_prefix, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_joins_prefix_and_id() {
        let ws = Workspace::with_defaults("/repo", defaults::builtin_defaults());

        assert_eq!(
            ws.default_example_output("fhe-counter"),
            PathBuf::from("/repo/output/fhevm-example-fhe-counter")
        );
        assert_eq!(
            ws.default_category_output("basic"),
            PathBuf::from("/repo/output/fhevm-examples-basic")
        );
    }

    #[test]
    fn index_file_lives_in_docs_dir() {
        let ws = Workspace::with_defaults("/repo", defaults::builtin_defaults());
        assert_eq!(ws.index_file(), PathBuf::from("/repo/docs/SUMMARY.md"));
    }
}
