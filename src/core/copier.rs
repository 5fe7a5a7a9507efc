//! Recursive directory copy that leaves build artifacts behind.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Counts reported after a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub skipped_dirs: usize,
}

/// Copies a tree, skipping any directory whose name is in the exclusion set.
///
/// Exclusions match by directory name at every depth. Symlinks are followed,
/// except a directory link back to one of its own ancestors, which is skipped.
/// A failure part-way through leaves whatever was already written in place.
#[derive(Debug, Clone)]
pub struct PathCopier {
    excluded: BTreeSet<String>,
}

impl PathCopier {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn copy(&self, src: &Path, dst: &Path) -> Result<CopyStats> {
        if !src.is_dir() {
            return Err(Error::source_missing(None, src.display().to_string()));
        }

        let mut stats = CopyStats::default();
        let mut ancestors = vec![canonical(src)?];
        self.copy_recursive(src, dst, &mut stats, &mut ancestors)?;
        Ok(stats)
    }

    fn copy_recursive(
        &self,
        src: &Path,
        dst: &Path,
        stats: &mut CopyStats,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<()> {
        fs::create_dir_all(dst).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", dst.display())))
        })?;
        stats.dirs += 1;

        let mut entries = fs::read_dir(src)
            .map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("read {}", src.display())))
            })?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::internal_io(e.to_string(), Some("read dir entry".into())))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let src_path = entry.path();
            let dst_path = dst.join(entry.file_name());

            // Follows symlinks, so a linked directory is copied by content.
            let metadata = fs::metadata(&src_path).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("stat {}", src_path.display())))
            })?;

            if metadata.is_dir() {
                let name = entry.file_name();
                if self.is_excluded(&name.to_string_lossy()) {
                    stats.skipped_dirs += 1;
                    continue;
                }

                let resolved = canonical(&src_path)?;
                if ancestors.contains(&resolved) {
                    crate::log_warning!(
                        "scaffold",
                        "Skipping {}: links back to {}",
                        src_path.display(),
                        resolved.display()
                    );
                    stats.skipped_dirs += 1;
                    continue;
                }

                ancestors.push(resolved);
                let result = self.copy_recursive(&src_path, &dst_path, stats, ancestors);
                ancestors.pop();
                result?;
            } else {
                fs::copy(&src_path, &dst_path).map_err(|e| {
                    Error::internal_io(
                        e.to_string(),
                        Some(format!("copy {}", src_path.display())),
                    )
                })?;
                stats.files += 1;
            }
        }

        Ok(())
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("resolve {}", path.display())))
    })
}

impl Default for PathCopier {
    fn default() -> Self {
        Self::new(crate::defaults::builtin_defaults().template.excluded_dirs)
    }
}
