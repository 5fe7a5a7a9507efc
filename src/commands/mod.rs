use std::path::PathBuf;

use fhe_scaffold::{Registry, Workspace};

pub type CmdResult<T> = fhe_scaffold::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub root: Option<PathBuf>,
}

impl GlobalArgs {
    /// Open the workspace at `--root`, or the current directory.
    pub fn workspace(&self) -> fhe_scaffold::Result<Workspace> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(|e| {
                fhe_scaffold::Error::internal_io(e.to_string(), Some("get current dir".into()))
            })?,
        };
        Workspace::load(root)
    }
}

/// Reject ids that are blank after trimming; returns the trimmed id.
pub(crate) fn require_id<'a>(value: &'a str, field: &str) -> fhe_scaffold::Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(fhe_scaffold::Error::validation_invalid_argument(
            field,
            format!("{} cannot be empty", field),
            None,
            None,
        ));
    }
    Ok(trimmed)
}

pub mod create_category;
pub mod create_example;
pub mod generate_docs;
pub mod list;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $registry:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global, $registry))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
    registry: &Registry,
) -> (fhe_scaffold::Result<serde_json::Value>, i32) {
    crate::tty::status("fhe-scaffold is working...");

    match command {
        crate::Commands::CreateExample(args) => dispatch!(args, global, registry, create_example),
        crate::Commands::CreateCategory(args) => {
            dispatch!(args, global, registry, create_category)
        }
        crate::Commands::GenerateDocs(args) => dispatch!(args, global, registry, generate_docs),
        crate::Commands::List(args) => dispatch!(args, global, registry, list),
    }
}
