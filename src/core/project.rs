//! Project skeleton steps shared by the example and category generators.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::copier::{CopyStats, PathCopier};
use crate::error::{Error, Result};
use crate::paths::Workspace;
use crate::templates;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

/// Fail with `generate.destination_exists` if anything is already at `dest`.
pub fn ensure_destination_free(dest: &Path) -> Result<()> {
    if dest.exists() {
        return Err(Error::destination_exists(dest.display().to_string()));
    }
    Ok(())
}

/// Fail with `generate.source_missing` unless the base template directory exists.
pub fn ensure_template(workspace: &Workspace) -> Result<PathBuf> {
    let dir = workspace.template_dir();
    if !dir.is_dir() {
        return Err(Error::source_missing(None, dir.display().to_string())
            .with_hint("Set defaults.template.dir in scaffold.json or pass --root"));
    }
    Ok(dir)
}

/// Copy the base template into `dest` and strip its placeholder files.
pub fn materialize_template(workspace: &Workspace, dest: &Path) -> Result<CopyStats> {
    let template_dir = ensure_template(workspace)?;
    let template = &workspace.defaults().template;

    crate::log_status!(
        "scaffold",
        "Copying {} -> {}",
        template_dir.display(),
        dest.display()
    );
    let stats = PathCopier::new(template.excluded_dirs.iter().cloned()).copy(&template_dir, dest)?;

    for placeholder in &template.placeholders {
        if io::remove_file_if_exists(&dest.join(placeholder))? {
            crate::log_status!("scaffold", "Removed placeholder {}", placeholder);
        }
    }

    Ok(stats)
}

/// File name component of a path, as a String.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Hardhat project directories for contracts and tests. Fixed regardless of
/// where the repository keeps its example sources.
pub const PROJECT_CONTRACTS_DIR: &str = "contracts";
pub const PROJECT_TESTS_DIR: &str = "test";

/// Copy a contract into `<dest>/contracts/` under its own file name.
pub fn install_contract(source: &Path, dest: &Path) -> Result<PathBuf> {
    install_into(source, &dest.join(PROJECT_CONTRACTS_DIR))
}

/// Copy a test into `<dest>/test/` under its own file name.
pub fn install_test(source: &Path, dest: &Path) -> Result<PathBuf> {
    install_into(source, &dest.join(PROJECT_TESTS_DIR))
}

fn install_into(source: &Path, dir: &Path) -> Result<PathBuf> {
    let target = dir.join(file_name(source));
    io::copy_file(source, &target)?;
    Ok(target)
}

/// Regenerate the template's deploy script so it deploys `contracts`.
///
/// Skipped when the template has no deploy script. Returns whether a script
/// was written.
pub fn write_deploy_script(
    workspace: &Workspace,
    dest: &Path,
    deploy_id: &str,
    contracts: &[String],
) -> Result<bool> {
    let script = dest.join(&workspace.defaults().template.deploy_script);
    if !script.is_file() {
        return Ok(false);
    }

    let deployments: String = contracts
        .iter()
        .map(|name| {
            template::render(
                templates::DEPLOY_ENTRY,
                &[(TemplateVars::CONTRACT_NAME, name.as_str())],
            )
        })
        .collect();

    let content = template::render(
        templates::DEPLOY_SCRIPT,
        &[
            (TemplateVars::DEPLOYMENTS, deployments.as_str()),
            (TemplateVars::EXAMPLE_ID, deploy_id),
        ],
    );
    io::write_file(&script, &content, "write deploy script")?;
    Ok(true)
}

/// Rewrite the `name` (and `description`, when present) of `package.json`.
///
/// Edits the text in place so key order and formatting survive. Returns
/// whether the file existed.
pub fn update_package_json(dest: &Path, name: &str, description: &str) -> Result<bool> {
    let path = dest.join("package.json");
    if !path.is_file() {
        return Ok(false);
    }

    let content = io::read_file(&path, "read package.json")?;
    let updated = replace_json_string_field(&content, "name", name)?;
    let updated = replace_json_string_field(&updated, "description", description)?;
    io::write_file(&path, &updated, "write package.json")?;
    Ok(true)
}

/// Replace the first top-level `"field": "..."` member. Nested objects such
/// as `"author": {"name": ...}` are left untouched.
fn replace_json_string_field(content: &str, field: &str, value: &str) -> Result<String> {
    let pattern = format!(r#""{}"\s*:\s*"(?:[^"\\]|\\.)*""#, regex::escape(field));
    let re = Regex::new(&pattern).map_err(|e| Error::internal_unexpected(e.to_string()))?;

    let top_level = top_level_keys(content);
    let Some(found) = re.find_iter(content).find(|m| top_level[m.start()]) else {
        return Ok(content.to_string());
    };

    let encoded = serde_json::to_string(value)
        .map_err(|e| Error::internal_json(e.to_string(), Some("encode package field".into())))?;

    Ok(format!(
        r#"{}"{}": {}{}"#,
        &content[..found.start()],
        field,
        encoded,
        &content[found.end()..]
    ))
}

/// For each byte offset, whether a string opening there sits directly inside
/// the outermost object.
fn top_level_keys(content: &str) -> Vec<bool> {
    let mut flags = vec![false; content.len()];
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in content.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                flags[i] = depth == 1;
                in_string = true;
            }
            '{' | '[' => depth += 1,
            '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    flags
}

/// Sorted names of the entries directly under `dest`.
pub fn top_level_entries(dest: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dest).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("list {}", dest.display())))
    })?;

    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}
