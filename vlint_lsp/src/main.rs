use std::path::PathBuf;

use log::info;
use vlint_lsp::VlintLspServer;

#[tokio::main]
async fn main() {
    initialize_logging();

    let workspace_path = workspace_path_from_args();
    if let Err(e) = VlintLspServer::serve_stdio(workspace_path).await {
        log::error!("Language server error: {e}");
    }
}

/// Workspace root: first argument if given, the current directory otherwise.
fn workspace_path_from_args() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn initialize_logging() {
    let is_console = atty::is(atty::Stream::Stdin) || atty::is(atty::Stream::Stdout);

    if is_console {
        let mut builder = env_logger::Builder::from_default_env();
        builder
            .filter_level(log::LevelFilter::Info)
            .format_timestamp_secs()
            .init();

        info!("V lint LSP running in console");
    } else {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(log::LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Stderr)
            .init();

        info!("V lint LSP running as language server");
    }
}
