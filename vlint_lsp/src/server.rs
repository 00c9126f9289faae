//! LSP server implementation for V lint diagnostics.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::lsp_types::*;
use tower_lsp_server::{Client, LanguageServer, LspService, Server};

use vlint_core::collection::LintOutcome;
use vlint_core::diagnostics::{Diagnostic, DiagnosticSeverity, SourceSpan};

use crate::linter::Linter;

/// The V lint language server.
pub struct VlintLspServer {
    client: Client,
    linter: Linter,
}

impl VlintLspServer {
    pub fn new(client: Client, workspace_path: PathBuf) -> Self {
        Self {
            client,
            linter: Linter::new(workspace_path),
        }
    }

    /// Start the language server on stdio.
    pub async fn serve_stdio(workspace_path: PathBuf) -> std::result::Result<(), String> {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();

        let (service, socket) =
            LspService::new(|client| VlintLspServer::new(client, workspace_path));
        Server::new(stdin, stdout, socket).serve(service).await;
        Ok(())
    }

    /// Lint a document and publish the resulting per-file diagnostics,
    /// including explicit empty lists for files cleared by this run.
    async fn lint_document(&self, uri: Uri) {
        let Some(document) = uri_to_path(&uri) else {
            log::error!("Unsupported document URI: {}", uri.as_str());
            return;
        };

        // Don't lint files that are not in the workspace.
        if !document.starts_with(self.linter.workspace_root()) {
            log::debug!("{} is outside the workspace, skipping", document.display());
            return;
        }

        let report = match self.linter.lint(&document).await {
            Ok(report) => report,
            Err(e) => {
                log::error!("Lint run failed: {e}");
                return;
            }
        };

        match report.outcome {
            LintOutcome::Clean => info!("{} is clean", document.display()),
            LintOutcome::Failed => info!("{} has problems", document.display()),
        }

        for (file, diagnostics) in report.publish {
            let Some(file_uri) = path_to_uri(&file) else {
                log::warn!("Could not build a URI for {}", file.display());
                continue;
            };
            let lsp_diagnostics: Vec<tower_lsp_server::lsp_types::Diagnostic> =
                diagnostics.iter().map(to_lsp_diagnostic).collect();

            self.client
                .publish_diagnostics(file_uri, lsp_diagnostics, None)
                .await;
        }
    }
}

impl LanguageServer for VlintLspServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        info!("V lint language server initializing");

        // Diagnostics come from compiling on-disk state, so there is
        // nothing to do on buffer changes; open and save are enough.
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(false),
                        })),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("V lint language server initialized");
        self.client
            .log_message(MessageType::INFO, "V lint language server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("V lint language server shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.lint_document(params.text_document.uri).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        self.lint_document(params.text_document.uri).await;
    }
}

/// Convert a vlint Diagnostic to an LSP Diagnostic.
fn to_lsp_diagnostic(d: &Diagnostic) -> tower_lsp_server::lsp_types::Diagnostic {
    tower_lsp_server::lsp_types::Diagnostic {
        range: span_to_range(&d.span),
        severity: Some(match d.severity {
            DiagnosticSeverity::Error => tower_lsp_server::lsp_types::DiagnosticSeverity::ERROR,
            DiagnosticSeverity::Warning => {
                tower_lsp_server::lsp_types::DiagnosticSeverity::WARNING
            }
        }),
        source: Some(d.source.to_string()),
        message: d.message.clone(),
        ..Default::default()
    }
}

/// Convert a SourceSpan to an LSP Range.
fn span_to_range(span: &SourceSpan) -> Range {
    Range {
        start: Position {
            line: span.start_line,
            character: span.start_col,
        },
        end: Position {
            line: span.end_line,
            character: span.end_col,
        },
    }
}

/// Extract a file path from a document URI.
fn uri_to_path(uri: &Uri) -> Option<PathBuf> {
    let s = uri.as_str();
    if let Some(path) = s.strip_prefix("file://") {
        Some(PathBuf::from(path))
    } else {
        None
    }
}

/// Build a file URI for a resolved absolute path.
fn path_to_uri(path: &Path) -> Option<Uri> {
    Uri::from_str(&format!("file://{}", path.display())).ok()
}
