//! Single-example project generation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::paths::Workspace;
use crate::project;
use crate::registry::{ExampleDescriptor, Registry};
use crate::templates;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleOutput {
    pub example_id: String,
    pub destination: String,
    pub contract: String,
    pub test: String,
    /// Top-level entries of the generated project.
    pub created: Vec<String>,
    pub files_copied: usize,
}

/// Generate a standalone project for one registered example.
///
/// Nothing is written unless the id resolves, `dest` does not exist, and the
/// template plus both source files are present.
pub fn generate(
    workspace: &Workspace,
    registry: &Registry,
    example_id: &str,
    dest: &Path,
) -> Result<ExampleOutput> {
    let example = registry.resolve_example(example_id)?;
    project::ensure_destination_free(dest)?;
    project::ensure_template(workspace)?;
    let (contract_src, test_src) = locate_sources(workspace, example)?;

    crate::log_status!("create-example", "Generating '{}'", example.id);
    let stats = project::materialize_template(workspace, dest)?;

    let contract = project::install_contract(&contract_src, dest)?;
    let test = project::install_test(&test_src, dest)?;

    let contract_name = example.contract_name();
    project::write_deploy_script(
        workspace,
        dest,
        &example.id,
        std::slice::from_ref(&contract_name),
    )?;
    project::update_package_json(
        dest,
        &format!("{}-{}", workspace.defaults().output.example_prefix, example.id),
        &example.description,
    )?;

    let readme = render_readme(example, &contract, &test);
    io::write_file(&dest.join("README.md"), &readme, "write README.md")?;

    crate::log_status!("create-example", "Created {}", dest.display());

    Ok(ExampleOutput {
        example_id: example.id.clone(),
        destination: dest.display().to_string(),
        contract: relative_display(dest, &contract),
        test: relative_display(dest, &test),
        created: project::top_level_entries(dest)?,
        files_copied: stats.files,
    })
}

fn locate_sources(workspace: &Workspace, example: &ExampleDescriptor) -> Result<(PathBuf, PathBuf)> {
    let contract = workspace.resolve(&example.contract);
    if !contract.is_file() {
        return Err(Error::source_missing(
            Some(example.id.clone()),
            contract.display().to_string(),
        ));
    }

    let test = workspace.resolve(&example.test);
    if !test.is_file() {
        return Err(Error::source_missing(
            Some(example.id.clone()),
            test.display().to_string(),
        ));
    }

    Ok((contract, test))
}

fn render_readme(example: &ExampleDescriptor, contract: &Path, test: &Path) -> String {
    let contract_file = project::file_name(contract);
    let test_file = project::file_name(test);
    let contract_name = example.contract_name();
    let category = if example.category.is_empty() {
        "Uncategorized"
    } else {
        example.category.as_str()
    };

    template::render(
        templates::EXAMPLE_README,
        &[
            (TemplateVars::TITLE, example.title.as_str()),
            (TemplateVars::CATEGORY, category),
            (TemplateVars::EXAMPLE_ID, example.id.as_str()),
            (TemplateVars::CONTRACT_FILE, contract_file.as_str()),
            (TemplateVars::TEST_FILE, test_file.as_str()),
            (TemplateVars::CONTRACT_NAME, contract_name.as_str()),
            (TemplateVars::DESCRIPTION, example.description.as_str()),
        ],
    )
}

fn relative_display(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
