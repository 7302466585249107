//! Terminal styling for conversion status lines

use std::io::{self, Write};
use std::path::Path;

use console::{style, Emoji};

use crate::convert::ConversionReport;

// Emoji icons with fallbacks for terminals that don't support them
pub static MUSIC: Emoji<'_, '_> = Emoji("🎵 ", "");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");

/// Lines of ffmpeg stderr shown when a conversion fails
const STDERR_TAIL_LINES: usize = 5;

/// Print the plan header before any conversion starts
pub fn print_plan(input_choice: &str, output_ext: &str, root: &Path) {
    println!();
    println!(
        " {} {} {} {}",
        style("◆").cyan().bold(),
        style(format!(".{}", input_choice)).yellow(),
        style("→").dim(),
        style(format!(".{}", output_ext)).yellow()
    );
    println!("   {}Directory: {}", MUSIC, style(root.display()).dim());
    println!();
}

pub fn converting_line(input: &Path, output: &Path) -> String {
    format!("Converting {} to {}", input.display(), output.display())
}

pub fn skipping_line(input: &Path) -> String {
    format!("Skipping {}, output file already exists.", input.display())
}

pub fn write_converting(out: &mut impl Write, input: &Path, output: &Path) -> io::Result<()> {
    writeln!(out, "{}", style(converting_line(input, output)).cyan())
}

pub fn write_skipping(out: &mut impl Write, input: &Path) -> io::Result<()> {
    writeln!(out, "{}", style(skipping_line(input)).dim())
}

/// Write a failed conversion with the tail of the tool's stderr
pub fn write_failure(
    out: &mut impl Write,
    input: &Path,
    status: Option<i32>,
    stderr: &str,
) -> io::Result<()> {
    let status = match status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };
    writeln!(
        out,
        "    {} {}",
        style("✗").red().bold(),
        style(format!("Failed to convert {} ({})", input.display(), status)).red()
    )?;
    for line in stderr_tail(stderr, STDERR_TAIL_LINES) {
        writeln!(out, "      {}", style(line).dim())?;
    }
    Ok(())
}

/// Print the final tally
pub fn print_completion(report: &ConversionReport) {
    println!();
    if report.matched() == 0 {
        println!("    {} No matching files found", style("ℹ").cyan());
    }
    println!(
        "    {}{} converted, {} skipped, {} failed",
        ROCKET,
        style(report.converted).green().bold(),
        style(report.skipped).yellow(),
        if report.failed > 0 {
            style(report.failed).red().bold()
        } else {
            style(report.failed).dim()
        }
    );
    println!();
}

fn stderr_tail(stderr: &str, max_lines: usize) -> Vec<&str> {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    lines[lines.len().saturating_sub(max_lines)..].to_vec()
}
