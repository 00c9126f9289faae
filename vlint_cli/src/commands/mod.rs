mod check;
mod lsp;

pub use check::check;
pub use lsp::serve;
