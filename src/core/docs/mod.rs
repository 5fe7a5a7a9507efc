//! Documentation pages for registered examples.
//!
//! Each page shows an example's contract and test side by side in GitBook
//! tabs and is linked from the navigation index (see [`index`]).

pub mod index;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::BatchResult;
use crate::paths::Workspace;
use crate::project;
use crate::registry::{ExampleDescriptor, Registry};
use crate::templates;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

use index::IndexEntry;

/// Which pages to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsTarget {
    Example(String),
    All,
}

/// Everything needed to write one page.
#[derive(Debug, Clone)]
pub struct DocEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub contract_file: String,
    pub contract_text: String,
    pub test_file: String,
    pub test_text: String,
    pub output: PathBuf,
}

impl DocEntry {
    /// Read the example's sources from the workspace.
    pub fn load(workspace: &Workspace, example: &ExampleDescriptor) -> Result<Self> {
        let contract_path = workspace.resolve(&example.contract);
        let test_path = workspace.resolve(&example.test);

        let contract_text = read_source(&example.id, &contract_path)?;
        let test_text = read_source(&example.id, &test_path)?;

        Ok(Self {
            id: example.id.clone(),
            title: example.title.clone(),
            description: example.description.clone(),
            category: example.category.clone(),
            contract_file: project::file_name(&contract_path),
            contract_text,
            test_file: project::file_name(&test_path),
            test_text,
            output: workspace.docs_dir().join(page_file(&example.id)),
        })
    }

    pub fn index_entry(&self) -> IndexEntry {
        IndexEntry::new(&self.title, page_file(&self.id))
    }

    pub fn render(&self) -> String {
        let contract_code = fenced(&self.contract_file, &self.contract_text);
        let test_code = fenced(&self.test_file, &self.test_text);
        let category = if self.category.is_empty() {
            "Uncategorized"
        } else {
            self.category.as_str()
        };

        // Code last so placeholder-looking text inside sources is left alone.
        template::render(
            templates::DOC_PAGE,
            &[
                (TemplateVars::TITLE, self.title.as_str()),
                (TemplateVars::CATEGORY, category),
                (TemplateVars::CONTRACT_FILE, self.contract_file.as_str()),
                (TemplateVars::TEST_FILE, self.test_file.as_str()),
                (TemplateVars::DESCRIPTION, self.description.as_str()),
                (TemplateVars::TEST_CODE, test_code.as_str()),
                (TemplateVars::CONTRACT_CODE, contract_code.as_str()),
            ],
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOutput {
    pub example_id: String,
    pub page: String,
    pub index_updated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOutput {
    pub pages: Vec<PageOutput>,
    pub summary: BatchResult,
    pub index: String,
}

impl DocsOutput {
    pub fn all_succeeded(&self) -> bool {
        !self.summary.has_failures()
    }
}

/// `<id>.md`
pub fn page_file(id: &str) -> String {
    format!("{}.md", id)
}

pub fn generate(
    workspace: &Workspace,
    registry: &Registry,
    target: &DocsTarget,
) -> Result<DocsOutput> {
    match target {
        DocsTarget::Example(id) => generate_one(workspace, registry, id),
        DocsTarget::All => generate_all(workspace, registry),
    }
}

/// Write one page and append it to the index.
///
/// An unknown id or missing source fails before anything is written.
pub fn generate_one(workspace: &Workspace, registry: &Registry, id: &str) -> Result<DocsOutput> {
    let example = registry.resolve_example(id)?;
    let entry = DocEntry::load(workspace, example)?;

    write_page(&entry)?;
    let index_path = workspace.index_file();
    let index_updated = index::append(&index_path, &entry.index_entry())?;

    let mut summary = BatchResult::new();
    summary.record_ok(&entry.id);

    Ok(DocsOutput {
        pages: vec![PageOutput {
            example_id: entry.id.clone(),
            page: display(&entry.output),
            index_updated,
        }],
        summary,
        index: display(&index_path),
    })
}

/// Write every registered page, then rebuild the index from the successes.
///
/// A page whose sources cannot be read (missing, unreadable, not UTF-8) is
/// recorded as failed and the run continues. If writing a page fails the run
/// stops, but the index still lists the pages written so far.
pub fn generate_all(workspace: &Workspace, registry: &Registry) -> Result<DocsOutput> {
    let mut summary = BatchResult::new();
    let mut pages = Vec::new();
    let mut entries = Vec::new();
    let index_path = workspace.index_file();

    for example in registry.examples() {
        let entry = match DocEntry::load(workspace, example) {
            Ok(entry) => entry,
            Err(err) => {
                crate::log_warning!("generate-docs", "{}: {}", example.id, err.message);
                summary.record_failed(&example.id, err.message);
                continue;
            }
        };

        if let Err(err) = write_page(&entry) {
            rewrite_index(workspace, &index_path, &entries)?;
            return Err(err);
        }
        crate::log_status!("generate-docs", "Wrote {}", entry.output.display());

        summary.record_ok(&entry.id);
        entries.push(entry.index_entry());
        pages.push(PageOutput {
            example_id: entry.id.clone(),
            page: display(&entry.output),
            index_updated: true,
        });
    }

    rewrite_index(workspace, &index_path, &entries)?;

    Ok(DocsOutput {
        pages,
        summary,
        index: display(&index_path),
    })
}

fn rewrite_index(workspace: &Workspace, index_path: &Path, entries: &[IndexEntry]) -> Result<()> {
    io::ensure_dir(&workspace.docs_dir())?;
    index::rewrite(index_path, entries)
}

fn write_page(entry: &DocEntry) -> Result<()> {
    if let Some(parent) = entry.output.parent() {
        io::ensure_dir(parent)?;
    }
    io::write_file(&entry.output, &entry.render(), "write docs page")
}

fn read_source(id: &str, path: &Path) -> Result<String> {
    io::read_file(path, "read example source").map_err(|err| {
        if err.code == crate::ErrorCode::SourceMissing {
            Error::source_missing(Some(id.to_string()), path.display().to_string())
        } else {
            err
        }
    })
}

fn fenced(file: &str, code: &str) -> String {
    let lang = match Path::new(file).extension().and_then(|e| e.to_str()) {
        Some("sol") => "solidity",
        Some("ts") => "typescript",
        Some("js") => "javascript",
        Some("json") => "json",
        _ => "",
    };
    format!("```{}\n{}\n```", lang, code.trim_end_matches('\n'))
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> DocEntry {
        DocEntry {
            id: "fhe-counter".to_string(),
            title: "FHE Counter".to_string(),
            description: "Counts privately.".to_string(),
            category: "Basic".to_string(),
            contract_file: "FHECounter.sol".to_string(),
            contract_text: "contract FHECounter {}\n".to_string(),
            test_file: "FHECounter.ts".to_string(),
            test_text: "describe(\"FHECounter\", () => {});\n".to_string(),
            output: PathBuf::from("docs/fhe-counter.md"),
        }
    }

    #[test]
    fn page_has_title_tabs_and_fenced_code() {
        let page = entry().render();

        assert!(page.starts_with("# FHE Counter\n\nCounts privately.\n"));
        assert!(page.contains("**Category:** Basic"));
        assert!(page.contains("{% tab title=\"FHECounter.sol\" %}"));
        assert!(page.contains("```solidity\ncontract FHECounter {}\n```"));
        assert!(page.contains("```typescript\ndescribe(\"FHECounter\", () => {});\n```"));
        assert!(page.contains("{% endtabs %}"));
    }

    #[test]
    fn placeholder_text_in_sources_survives() {
        let mut e = entry();
        e.contract_text = "// {{title}}".to_string();
        assert!(e.render().contains("// {{title}}"));
    }

    #[test]
    fn index_entry_points_at_page_file() {
        assert_eq!(
            entry().index_entry(),
            IndexEntry::new("FHE Counter", "fhe-counter.md")
        );
    }

    #[test]
    fn unknown_extension_gets_plain_fence() {
        assert_eq!(fenced("notes.txt", "hi\n\n"), "```\nhi\n```");
    }
}
