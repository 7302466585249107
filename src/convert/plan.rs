//! Expansion of the picked input type into batch runs

use std::io::Write;
use std::path::Path;

use super::{BatchConverter, ConversionReport, ConvertError, Transcoder};
use crate::config::{FormatConfig, WILDCARD};

/// What the user picked on the input screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    Single(String),
    /// The wildcard option: run once per configured input type
    AllConfigured,
}

impl InputSelection {
    pub fn from_choice(choice: &str) -> Self {
        if choice == WILDCARD {
            InputSelection::AllConfigured
        } else {
            InputSelection::Single(choice.to_string())
        }
    }
}

/// Input extensions to run, in order
pub fn plan_input_types(config: &FormatConfig, selection: &InputSelection) -> Vec<String> {
    match selection {
        InputSelection::AllConfigured => config.input_types.clone(),
        InputSelection::Single(ext) => vec![ext.clone()],
    }
}

/// Run the batch converter once per planned input type and merge the results
pub fn run_plan<T: Transcoder, W: Write>(
    converter: &mut BatchConverter<T, W>,
    config: &FormatConfig,
    selection: &InputSelection,
    output_ext: &str,
    root: &Path,
) -> Result<ConversionReport, ConvertError> {
    let input_types = plan_input_types(config, selection);
    log::info!(
        "Planned {} batch run(s) to .{} under {}",
        input_types.len(),
        output_ext,
        root.display()
    );

    let mut report = ConversionReport::default();
    for input_ext in &input_types {
        report += converter.convert(input_ext, output_ext, root)?;
    }
    Ok(report)
}
