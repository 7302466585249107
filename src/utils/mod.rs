//! Utility modules for terminal output

mod styling;

pub use styling::*;
