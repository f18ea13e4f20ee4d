//! Output formatting and printing

pub mod formatters;
pub mod report;

pub use formatters::{format_json, JsonFormatterOptions};
pub use report::Reporter;
