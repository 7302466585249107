//! Pinetree: Audio Format Batch Converter Library
//!
//! Loads the supported format lists, lets the user pick an input and output
//! format, and converts matching files in a directory tree with ffmpeg.

pub mod cli;
pub mod config;
pub mod convert;
pub mod utils;
