//! Output formatting utilities for CLI

use console::style;

mod logger;

pub use logger::Logger;

/// Format an optional value, dimming the placeholder for unset fields
pub fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => style("(unset)").dim().to_string(),
    }
}

/// Format an error chain on one line
pub fn format_error(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_optional_set() {
        assert_eq!(format_optional(Some(false)), "false");
        assert_eq!(format_optional(Some("img")), "img");
    }

    #[test]
    fn test_format_optional_unset() {
        assert!(format_optional::<bool>(None).contains("(unset)"));
    }

    #[test]
    fn test_format_error_chain() {
        let err = anyhow::anyhow!("inner").context("outer");
        assert_eq!(format_error(&err), "outer: inner");
    }
}
