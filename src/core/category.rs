//! Multi-example project generation for a category.
//!
//! Members are collected best-effort: a member that is not registered, or
//! whose contract cannot be found even by the fallback search, is skipped with
//! a warning and generation carries on.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::output::BatchResult;
use crate::paths::Workspace;
use crate::project;
use crate::registry::{CategoryDescriptor, ExampleDescriptor, Registry};
use crate::templates;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludedExample {
    pub example_id: String,
    pub contract: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// True when the contract was found by the fallback search.
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub category_id: String,
    pub destination: String,
    pub included_count: usize,
    pub included: Vec<IncludedExample>,
    pub summary: BatchResult,
    pub warnings: Vec<String>,
    pub created: Vec<String>,
}

/// Generate one project bundling every locatable member of a category.
pub fn generate(
    workspace: &Workspace,
    registry: &Registry,
    category_id: &str,
    dest: &Path,
) -> Result<CategoryOutput> {
    let category = registry.resolve_category(category_id)?;
    project::ensure_destination_free(dest)?;
    project::ensure_template(workspace)?;

    crate::log_status!(
        "create-category",
        "Generating '{}' ({} examples)",
        category.id,
        category.examples.len()
    );
    project::materialize_template(workspace, dest)?;

    let mut collector = Collector::default();
    for member in &category.examples {
        collector.include(workspace, registry, member, dest)?;
    }

    if collector.included.is_empty() {
        collector.warn(format!(
            "No examples of category '{}' could be located",
            category.id
        ));
    }

    let contract_names: Vec<String> = collector
        .included
        .iter()
        .map(|i| contract_stem(&i.contract))
        .collect();
    project::write_deploy_script(workspace, dest, &category.id, &contract_names)?;
    project::update_package_json(
        dest,
        &format!(
            "{}-{}",
            workspace.defaults().output.category_prefix,
            category.id
        ),
        &category.description,
    )?;

    let readme = render_readme(category, &collector.included, &collector.summary);
    io::write_file(&dest.join("README.md"), &readme, "write README.md")?;

    crate::log_status!(
        "create-category",
        "Included {}/{} examples in {}",
        collector.included.len(),
        category.examples.len(),
        dest.display()
    );

    Ok(CategoryOutput {
        category_id: category.id.clone(),
        destination: dest.display().to_string(),
        included_count: collector.included.len(),
        included: collector.included,
        summary: collector.summary,
        warnings: collector.warnings,
        created: project::top_level_entries(dest)?,
    })
}

#[derive(Default)]
struct Collector {
    included: Vec<IncludedExample>,
    summary: BatchResult,
    warnings: Vec<String>,
    contract_files: HashSet<String>,
}

impl Collector {
    fn warn(&mut self, message: String) {
        crate::log_warning!("create-category", "{}", message);
        self.warnings.push(message);
    }

    fn skip(&mut self, id: &str, reason: String) {
        self.warn(format!("Skipping '{}': {}", id, reason));
        self.summary.record_skipped(id, reason);
    }

    fn include(
        &mut self,
        workspace: &Workspace,
        registry: &Registry,
        member: &str,
        dest: &Path,
    ) -> Result<()> {
        let Some(example) = registry.find_example(member) else {
            self.skip(member, "not a registered example".to_string());
            return Ok(());
        };

        let Some((contract_src, fallback)) = locate_contract(workspace, example) else {
            self.skip(
                member,
                format!(
                    "contract {} not found",
                    workspace.resolve(&example.contract).display()
                ),
            );
            return Ok(());
        };

        let contract_file = project::file_name(&contract_src);
        if !self.contract_files.insert(contract_file.clone()) {
            self.skip(
                member,
                format!("contract file {} is already included", contract_file),
            );
            return Ok(());
        }

        if fallback {
            self.warn(format!(
                "'{}': using {} found by fallback search",
                member,
                contract_src.display()
            ));
        }

        project::install_contract(&contract_src, dest)?;

        let test = match locate_test(workspace, example) {
            Some(test_src) => {
                project::install_test(&test_src, dest)?;
                Some(project::file_name(&test_src))
            }
            None => {
                self.warn(format!(
                    "'{}': no test file found, including contract only",
                    member
                ));
                None
            }
        };

        self.summary.record_ok(member);
        self.included.push(IncludedExample {
            example_id: example.id.clone(),
            contract: contract_file,
            test,
            fallback,
        });
        Ok(())
    }
}

/// Registry path first, then a search of the contracts directory.
fn locate_contract(workspace: &Workspace, example: &ExampleDescriptor) -> Option<(PathBuf, bool)> {
    let primary = workspace.resolve(&example.contract);
    if primary.is_file() {
        return Some((primary, false));
    }

    find_by_stem(
        &workspace.contracts_dir(),
        &stem(&example.contract),
        extension(&example.contract, "sol"),
    )
    .map(|path| (path, true))
}

fn locate_test(workspace: &Workspace, example: &ExampleDescriptor) -> Option<PathBuf> {
    let primary = workspace.resolve(&example.test);
    if primary.is_file() {
        return Some(primary);
    }

    find_by_stem(
        &workspace.tests_dir(),
        &stem(&example.test),
        extension(&example.test, "ts"),
    )
}

/// Best-effort search under `dir` for a `*.<ext>` file whose stem matches.
///
/// A case-insensitive exact stem match wins; otherwise the first path (in
/// sorted order) whose stem contains `needle` case-insensitively.
pub fn find_by_stem(dir: &Path, needle: &str, ext: &str) -> Option<PathBuf> {
    if needle.is_empty() || !dir.is_dir() {
        return None;
    }

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        ext
    );
    let mut candidates: Vec<PathBuf> = glob::glob(&pattern).ok()?.flatten().collect();
    candidates.sort();

    let needle = needle.to_lowercase();
    let stems: Vec<String> = candidates.iter().map(|p| stem(p).to_lowercase()).collect();

    let index = stems
        .iter()
        .position(|s| *s == needle)
        .or_else(|| stems.iter().position(|s| s.contains(&needle)))?;
    Some(candidates[index].clone())
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn extension<'a>(path: &'a Path, default: &'a str) -> &'a str {
    path.extension().and_then(|e| e.to_str()).unwrap_or(default)
}

fn contract_stem(file: &str) -> String {
    stem(Path::new(file))
}

fn render_readme(
    category: &CategoryDescriptor,
    included: &[IncludedExample],
    summary: &BatchResult,
) -> String {
    let contract_list = if included.is_empty() {
        "_No examples could be included._\n".to_string()
    } else {
        included
            .iter()
            .map(|i| match &i.test {
                Some(test) => format!(
                    "- **{}**: `contracts/{}`, `test/{}`\n",
                    i.example_id, i.contract, test
                ),
                None => format!("- **{}**: `contracts/{}`\n", i.example_id, i.contract),
            })
            .collect()
    };

    let skipped = summary.ids_with(crate::output::ItemStatus::Skipped);
    let skipped_list = if skipped.is_empty() {
        String::new()
    } else {
        let lines: String = skipped.iter().map(|id| format!("- {}\n", id)).collect();
        format!("\n### Not Included\n\n{}", lines)
    };

    template::render(
        templates::CATEGORY_README,
        &[
            (TemplateVars::TITLE, category.title.as_str()),
            (TemplateVars::CATEGORY_ID, category.id.as_str()),
            (TemplateVars::CONTRACT_LIST, contract_list.as_str()),
            (TemplateVars::SKIPPED_LIST, skipped_list.as_str()),
            (TemplateVars::DESCRIPTION, category.description.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn find_by_stem_prefers_exact_match() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a/FHECounterV2.sol"));
        touch(&dir.path().join("b/fhecounter.sol"));

        let found = find_by_stem(dir.path(), "FHECounter", "sol").unwrap();
        assert_eq!(found, dir.path().join("b/fhecounter.sol"));
    }

    #[test]
    fn find_by_stem_falls_back_to_substring() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("moved/BlindAuctionV2.sol"));
        touch(&dir.path().join("moved/BlindAuction.ts"));

        let found = find_by_stem(dir.path(), "blindauction", "sol").unwrap();
        assert_eq!(found, dir.path().join("moved/BlindAuctionV2.sol"));
    }

    #[test]
    fn find_by_stem_misses_cleanly() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Other.sol"));

        assert!(find_by_stem(dir.path(), "Missing", "sol").is_none());
        assert!(find_by_stem(&dir.path().join("nope"), "Other", "sol").is_none());
        assert!(find_by_stem(dir.path(), "", "sol").is_none());
    }

    #[test]
    fn readme_lists_included_and_skipped() {
        let category = CategoryDescriptor::new("ops", "Homomorphic ops.", ["add", "gone"]);
        let included = vec![IncludedExample {
            example_id: "add".to_string(),
            contract: "FHEAdd.sol".to_string(),
            test: None,
            fallback: false,
        }];
        let mut summary = BatchResult::new();
        summary.record_ok("add");
        summary.record_skipped("gone", "missing");

        let readme = render_readme(&category, &included, &summary);
        assert!(readme.contains("Homomorphic ops."));
        assert!(readme.contains("- **add**: `contracts/FHEAdd.sol`"));
        assert!(readme.contains("### Not Included\n\n- gone\n"));
        assert!(!readme.contains("{{"));
    }
}
