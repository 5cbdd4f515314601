use console::style;
use std::fmt::Display;

/// Styled terminal output for command results
pub struct Logger {
    no_color: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            no_color: std::env::var("NO_COLOR").is_ok()
                || std::env::var("CLICOLOR").map(|v| v == "0").unwrap_or(false)
                || std::env::var("CLICOLOR_FORCE").map(|v| v == "0").unwrap_or(false),
        }
    }

    /// Logger that never emits escape codes
    pub fn plain() -> Self {
        Self { no_color: true }
    }

    fn style_bold(&self, text: impl Display) -> String {
        if self.no_color {
            text.to_string()
        } else {
            style(text.to_string()).bold().to_string()
        }
    }

    pub fn header(&self, text: &str) {
        println!("\n{}\n", self.style_bold(text));
    }

    pub fn section(&self, text: &str) {
        println!("\n{}", self.style_bold(text));
    }

    pub fn info(&self, label: &str, value: impl Display) {
        println!("{}: {}", self.style_bold(label), value);
    }

    pub fn item(&self, value: impl Display) {
        println!("  - {}", value);
    }

    pub fn success(&self, text: impl Display) {
        if self.no_color {
            println!("✓ {}", text);
        } else {
            println!("{} {}", style("✓").green().bold(), text);
        }
    }

    pub fn error(&self, text: impl Display) {
        if self.no_color {
            eprintln!("ERROR: {}", text);
        } else {
            eprintln!("{} {}", style("ERROR:").red().bold(), text);
        }
    }
}
