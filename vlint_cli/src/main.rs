mod cli;
mod commands;
mod errors;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use cli::{VlintCli, VlintCliCommand};

fn main() {
    let cli = VlintCli::parse();
    initialize_logging(cli.verbose);

    let workspace_path = resolve_workspace_path(cli.workspace);

    let result = match cli.command {
        VlintCliCommand::Check { ref file } => commands::check(&workspace_path, file),
        VlintCliCommand::Lsp => commands::serve(&workspace_path),
    };

    if result.is_err() {
        std::process::exit(1);
    }
}

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Workspace root: the --workspace flag if given, the current directory
/// otherwise.
fn resolve_workspace_path(workspace: Option<PathBuf>) -> PathBuf {
    workspace
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
