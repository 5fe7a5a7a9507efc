use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use fhe_scaffold::category::{self, CategoryOutput};
use fhe_scaffold::{CategoryDescriptor, Registry};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct CreateCategoryArgs {
    /// Category id (omit to list available categories)
    pub category: Option<String>,

    /// Output directory (default: ./output/fhevm-examples-<id>)
    pub output_dir: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum CreateCategoryOutput {
    #[serde(rename = "create-category")]
    Created(CategoryOutput),

    #[serde(rename = "create-category.list")]
    Available { categories: Vec<CategoryDescriptor> },
}

pub fn run(
    args: CreateCategoryArgs,
    global: &GlobalArgs,
    registry: &Registry,
) -> CmdResult<CreateCategoryOutput> {
    let Some(category_id) = args.category else {
        return Ok((
            CreateCategoryOutput::Available {
                categories: registry.categories().to_vec(),
            },
            0,
        ));
    };
    let category_id = super::require_id(&category_id, "category")?;

    let workspace = global.workspace()?;
    let dest = args
        .output_dir
        .unwrap_or_else(|| workspace.default_category_output(category_id));

    // Skipped members are warnings, not failures.
    let output = category::generate(&workspace, registry, category_id, &dest)?;
    Ok((CreateCategoryOutput::Created(output), 0))
}
