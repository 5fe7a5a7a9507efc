use clap::Args;

use fhe_scaffold::docs::{self, DocsOutput, DocsTarget};
use fhe_scaffold::Registry;

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct GenerateDocsArgs {
    /// Example id to document
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub example: Option<String>,

    /// Generate every registered example and rebuild the navigation index
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: GenerateDocsArgs, global: &GlobalArgs, registry: &Registry) -> CmdResult<DocsOutput> {
    // clap guarantees exactly one of `example` and `--all`.
    let target = match args.example {
        Some(id) => DocsTarget::Example(super::require_id(&id, "example")?.to_string()),
        None => DocsTarget::All,
    };

    let workspace = global.workspace()?;
    let output = docs::generate(&workspace, registry, &target)?;

    if output.all_succeeded() {
        Ok((output, 0))
    } else {
        fhe_scaffold::log_warning!(
            "generate-docs",
            "{} of {} pages failed",
            output.summary.failed,
            output.summary.items.len()
        );
        Ok((output, 1))
    }
}
