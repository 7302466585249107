//! CLI module - argument parsing and the interactive format picker

mod args;
pub mod picker;
mod terminal;

pub use args::Cli;
pub use picker::{run_picker, CANCELLED_EXIT_CODE, PickResult, PickerAction, PickerState};
pub use terminal::TerminalSession;
