//! Configuration file support

mod config;

pub use config::{timeout_duration, Config};
