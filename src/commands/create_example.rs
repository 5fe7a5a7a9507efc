use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use fhe_scaffold::example::{self, ExampleOutput};
use fhe_scaffold::{ExampleDescriptor, Registry};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct CreateExampleArgs {
    /// Example id (omit to list available examples)
    pub example: Option<String>,

    /// Output directory (default: ./output/fhevm-example-<id>)
    pub output_dir: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum CreateExampleOutput {
    #[serde(rename = "create-example")]
    Created(ExampleOutput),

    #[serde(rename = "create-example.list")]
    Available { examples: Vec<ExampleDescriptor> },
}

pub fn run(
    args: CreateExampleArgs,
    global: &GlobalArgs,
    registry: &Registry,
) -> CmdResult<CreateExampleOutput> {
    let Some(example_id) = args.example else {
        return Ok((
            CreateExampleOutput::Available {
                examples: registry.examples().to_vec(),
            },
            0,
        ));
    };
    let example_id = super::require_id(&example_id, "example")?;

    let workspace = global.workspace()?;
    let dest = args
        .output_dir
        .unwrap_or_else(|| workspace.default_example_output(example_id));

    let output = example::generate(&workspace, registry, example_id, &dest)?;
    Ok((CreateExampleOutput::Created(output), 0))
}
