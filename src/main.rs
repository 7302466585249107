//! Pinetree: Audio Format Batch Converter
//!
//! Pick an input and output format from arrow-key menus, then convert every
//! matching file under the starting directory with ffmpeg.

mod cli;
mod config;
mod convert;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, PickResult, TerminalSession, CANCELLED_EXIT_CODE};
use config::{ConfigStore, FormatConfig};
use convert::{run_plan, BatchConverter, Ffmpeg, InputSelection};
use utils::{print_completion, print_plan};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let root = cli
        .start_directory()
        .context("Failed to determine the current directory")?;
    if !root.is_dir() {
        anyhow::bail!("Starting directory '{}' is not a directory", root.display());
    }

    let store = ConfigStore::default_location()?;
    let formats = store
        .load()
        .with_context(|| format!("Failed to load configuration from {}", store.path().display()))?;

    // Terminal is restored when the session drops, before any conversion output
    let picked = {
        let mut session = TerminalSession::start()?;
        pick_formats(&mut session, &formats)?
    };

    let Some((input_choice, output_ext)) = picked else {
        println!("Cancelled by user.");
        std::process::exit(CANCELLED_EXIT_CODE);
    };

    print_plan(&input_choice, &output_ext, &root);

    let selection = InputSelection::from_choice(&input_choice);
    let mut converter = BatchConverter::new(Ffmpeg::default());
    let report = run_plan(&mut converter, &formats, &selection, &output_ext, &root)?;

    print_completion(&report);

    Ok(())
}

/// Run the input and output picker screens, `None` if either was cancelled
fn pick_formats(
    session: &mut TerminalSession,
    formats: &FormatConfig,
) -> Result<Option<(String, String)>> {
    let PickResult::Selected(input_choice) =
        session.pick(&formats.input_options(), "input file type")?
    else {
        return Ok(None);
    };
    let PickResult::Selected(output_ext) = session.pick(&formats.output_types, "output file type")?
    else {
        return Ok(None);
    };
    Ok(Some((input_choice, output_ext)))
}
