//! Shared test utilities for the agsdump workspace.
//!
//! This crate provides common testing infrastructure including:
//! - ArcGIS service and layer descriptor fixtures
//! - An in-memory `DescriptorSource`
//! - Assertion macros for SLD structures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, MemorySource};
//! ```

pub mod fixtures;
pub mod source;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use source::MemorySource;

/// Assert the CSS parameters of a `Fill`, `Stroke` or `Font`, in order.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_css;
///
/// assert_css!(fill, "fill" => "#ff0000", "fill-opacity" => "1");
/// ```
#[macro_export]
macro_rules! assert_css {
    ($holder:expr, $($name:expr => $value:expr),+ $(,)?) => {{
        let actual: Vec<(&str, &str)> = $holder
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        let expected: Vec<(&str, &str)> = vec![$(($name, $value)),+];
        assert_eq!(actual, expected, "CSS parameters differ");
    }};
}

/// Assert the titles of a rule list, in order.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_rule_titles;
///
/// assert_rule_titles!(doc.rules(), ["low", "mid", "high"]);
/// ```
#[macro_export]
macro_rules! assert_rule_titles {
    ($rules:expr, [$($title:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $rules.iter().map(|rule| rule.title.as_str()).collect();
        let expected: Vec<&str> = vec![$($title),*];
        assert_eq!(actual, expected, "rule titles differ");
    }};
}
