//! CLI argument parsing and usage text

pub mod args;
pub mod help;

pub use args::{Args, LogFormat, SecretString, Shell};
pub use help::{help_text, print_help};
