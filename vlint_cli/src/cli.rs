use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Defines the top-level interface for the vlint CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "vlint")]
#[command(version, about = "vlint: V compiler diagnostics in the terminal.")]
pub struct VlintCli {
    /// Path to the workspace root the compiler runs in.
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: VlintCliCommand,
}

/// Defines the available subcommands of the vlint CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum VlintCliCommand {
    /// Lint a V source file and print its diagnostics.
    Check {
        /// The file to lint, absolute or workspace-relative.
        file: PathBuf,
    },
    /// Start the language server on stdio.
    Lsp,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        VlintCli::command().debug_assert();
    }

    #[test]
    fn test_parses_check_command() {
        let cli = VlintCli::parse_from(["vlint", "check", "main.v"]);
        assert_eq!(
            cli.command,
            VlintCliCommand::Check {
                file: PathBuf::from("main.v")
            }
        );
    }

    #[test]
    fn test_parses_global_workspace_flag() {
        let cli = VlintCli::parse_from(["vlint", "check", "main.v", "--workspace", "/ws"]);
        assert_eq!(cli.workspace, Some(PathBuf::from("/ws")));
    }
}
