//! Terminal output helpers.

use console::style;

pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn error(message: &str) {
    eprintln!("{}", style(message).red());
}

pub fn error_with_details(message: &str, details: &str) {
    eprintln!("{}: {}", style(message).red(), details);
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}
