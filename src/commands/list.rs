use clap::Args;
use serde::Serialize;

use fhe_scaffold::{CategoryDescriptor, ExampleDescriptor, Registry};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only list examples
    #[arg(long, conflicts_with = "categories")]
    pub examples: bool,

    /// Only list categories
    #[arg(long)]
    pub categories: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ExampleDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryDescriptor>>,
}

pub fn run(args: ListArgs, _global: &GlobalArgs, registry: &Registry) -> CmdResult<ListOutput> {
    let show_examples = !args.categories;
    let show_categories = !args.examples;

    Ok((
        ListOutput {
            examples: show_examples.then(|| registry.examples().to_vec()),
            categories: show_categories.then(|| registry.categories().to_vec()),
        },
        0,
    ))
}

/// Plain-text listing appended to `--help`.
pub fn examples_help(registry: &Registry) -> String {
    let mut out = String::from("Available examples:\n");
    for example in registry.examples() {
        out.push_str(&format!("  {:<32} {}\n", example.id, example.title));
    }
    out
}

pub fn categories_help(registry: &Registry) -> String {
    let mut out = String::from("Available categories:\n");
    for category in registry.categories() {
        out.push_str(&format!(
            "  {:<20} {} ({} examples)\n",
            category.id,
            category.title,
            category.examples.len()
        ));
    }
    out
}
