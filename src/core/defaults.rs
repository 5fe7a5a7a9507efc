use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the optional per-repository configuration.
pub const CONFIG_FILE: &str = "scaffold.json";

/// Root configuration structure for scaffold.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via scaffold.json.
///
/// Every path is relative to the repository root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_template")]
    pub template: TemplateConfig,

    #[serde(default = "default_sources")]
    pub sources: SourcesConfig,

    #[serde(default = "default_output")]
    pub output: OutputConfig,

    #[serde(default = "default_docs")]
    pub docs: DocsConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: default_template(),
            sources: default_sources(),
            output: default_output(),
            docs: default_docs(),
        }
    }
}

/// Base project template every generated project starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_template_dir")]
    pub dir: String,

    /// Placeholder files removed from the copied template (template-relative).
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,

    /// Deploy script regenerated for the included contracts (template-relative).
    #[serde(default = "default_deploy_script")]
    pub deploy_script: String,

    /// Directory names never copied out of the template.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
}

/// Where the repository keeps example contracts and tests.
///
/// Generated projects always use the Hardhat layout (`contracts/`, `test/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_contracts_dir")]
    pub contracts_dir: String,

    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_root")]
    pub root: String,

    #[serde(default = "default_example_prefix")]
    pub example_prefix: String,

    #[serde(default = "default_category_prefix")]
    pub category_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    pub dir: String,

    /// Navigation index file inside the docs directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_template() -> TemplateConfig {
    TemplateConfig {
        dir: default_template_dir(),
        placeholders: default_placeholders(),
        deploy_script: default_deploy_script(),
        excluded_dirs: default_excluded_dirs(),
    }
}

fn default_template_dir() -> String {
    "fhevm-hardhat-template".to_string()
}

fn default_placeholders() -> Vec<String> {
    vec![
        "contracts/FHECounter.sol".to_string(),
        "test/FHECounter.ts".to_string(),
    ]
}

fn default_deploy_script() -> String {
    "deploy/deploy.ts".to_string()
}

fn default_excluded_dirs() -> Vec<String> {
    [
        "node_modules",
        "artifacts",
        "cache",
        "coverage",
        "types",
        "typechain-types",
        "dist",
        "fhevmTemp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_sources() -> SourcesConfig {
    SourcesConfig {
        contracts_dir: default_contracts_dir(),
        tests_dir: default_tests_dir(),
    }
}

fn default_contracts_dir() -> String {
    "contracts".to_string()
}

fn default_tests_dir() -> String {
    "test".to_string()
}

fn default_output() -> OutputConfig {
    OutputConfig {
        root: default_output_root(),
        example_prefix: default_example_prefix(),
        category_prefix: default_category_prefix(),
    }
}

fn default_output_root() -> String {
    "output".to_string()
}

fn default_example_prefix() -> String {
    "fhevm-example".to_string()
}

fn default_category_prefix() -> String {
    "fhevm-examples".to_string()
}

fn default_docs() -> DocsConfig {
    DocsConfig {
        dir: default_docs_dir(),
        index_file: default_index_file(),
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_index_file() -> String {
    "SUMMARY.md".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load scaffold.json from the repository root.
///
/// A missing file yields built-in defaults. Unlike a missing file, a file that
/// exists but fails to parse is an error: silently ignoring it would generate
/// into the wrong directories.
pub fn load_config(root: &Path) -> crate::Result<ScaffoldConfig> {
    let path = root.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ScaffoldConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
