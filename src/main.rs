use clap::{Command, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{create_category, create_example, generate_docs, list};
use fhe_scaffold::Registry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "fhe-scaffold")]
#[command(version = VERSION)]
#[command(about = "Generate standalone projects and docs from FHE contract examples")]
struct Cli {
    /// Repository root holding the template, contracts, tests and docs
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a standalone project for one example
    CreateExample(create_example::CreateExampleArgs),
    /// Generate one project bundling every example of a category
    CreateCategory(create_category::CreateCategoryArgs),
    /// Generate documentation pages and the navigation index
    GenerateDocs(generate_docs::GenerateDocsArgs),
    /// List registered examples and categories
    List(list::ListArgs),
}

/// Clap command with the registered ids appended to the relevant `--help`.
fn build_augmented_command(registry: &Registry) -> Command {
    let examples = list::examples_help(registry);
    let categories = list::categories_help(registry);

    Cli::command()
        .mut_subcommand("create-example", |cmd| cmd.after_help(examples.clone()))
        .mut_subcommand("generate-docs", |cmd| cmd.after_help(examples))
        .mut_subcommand("create-category", |cmd| cmd.after_help(categories))
}

fn main() -> std::process::ExitCode {
    let registry = Registry::builtin();
    let matches = build_augmented_command(&registry).get_matches();

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => {
            e.exit();
        }
    };

    let global = GlobalArgs { root: cli.root };
    let (json_result, exit_code) = commands::run_json(cli.command, &global, &registry);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
