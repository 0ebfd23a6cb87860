//! Display manager for the terminal menus
//!
//! All user-facing output goes through here so color can be switched off in
//! one place.

use colored::*;

/// Display manager for menu UI
pub struct DisplayManager;

impl DisplayManager {
    /// Create new display manager; `color = false` strips styling process-wide
    pub fn new(color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        DisplayManager
    }

    /// Render a numbered menu; `entries` are (choice, label) pairs
    pub fn show_menu(&self, title: &str, entries: &[(&str, &str)]) {
        println!("\n{}", format!("==== {} ====", title).bold().cyan());
        for (choice, label) in entries {
            println!("{}. {}", choice.green(), label);
        }
    }

    /// Show success message
    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display plain informational line
    pub fn show_info(&self, info: &str) {
        println!("{}", info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
    }

    /// Show a horizontal rule of `width` dashes
    pub fn show_rule(&self, width: usize) {
        println!("{}", "-".repeat(width).cyan());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!(" - {}", text);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(true)
    }
}
