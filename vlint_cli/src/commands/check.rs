//! Check command: lints a V file and reports the compiler's diagnostics.

use std::path::Path;

use vlint_core::collection::LintOutcome;
use vlint_lsp::{LintReport, Linter};

use crate::errors::CliError;
use crate::ui;

/// Lint a single file. Prints every diagnostic the compile run produced,
/// including ones in sibling files of the same compile unit.
pub fn check(workspace_path: &Path, file: &Path) -> Result<(), CliError> {
    let document = if file.is_absolute() {
        file.to_path_buf()
    } else {
        workspace_path.join(file)
    };

    if !document.exists() {
        ui::error(&format!("File '{}' does not exist", document.display()));
        return Err(CliError::FileError);
    }

    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        ui::error_with_details("Failed to create async runtime", &e.to_string());
        CliError::LintError
    })?;

    let linter = Linter::new(workspace_path.to_path_buf());
    let report = rt.block_on(linter.lint(&document)).map_err(|e| {
        ui::error_with_details("Lint run failed", &e.to_string());
        CliError::LintError
    })?;

    report_diagnostics(&report)
}

/// Print diagnostics and return Ok if the run was clean, Err otherwise.
fn report_diagnostics(report: &LintReport) -> Result<(), CliError> {
    let mut count = 0;
    for (_, diagnostics) in &report.publish {
        for diagnostic in diagnostics {
            ui::error(&diagnostic.to_string());
            count += 1;
        }
    }

    match report.outcome {
        LintOutcome::Clean => {
            ui::success("No problems found");
            Ok(())
        }
        LintOutcome::Failed => {
            ui::error(&format!("\nFound {} problem(s)", count));
            Err(CliError::LintError)
        }
    }
}
