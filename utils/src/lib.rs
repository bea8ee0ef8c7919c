//! Shared utilities for the disperse workspace.

pub mod display;
pub mod logging;
pub mod time;

pub use display::{shorten, shorten_hex};
pub use logging::{init_logging, LogFormat};
pub use time::{format_age, format_duration};
