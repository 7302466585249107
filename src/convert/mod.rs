//! Batch conversion - directory walk, task derivation and the external transcoder

pub mod batch;
pub mod ffmpeg;
pub mod plan;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::WILDCARD;

pub use batch::{BatchConverter, ConversionReport};
pub use ffmpeg::Ffmpeg;
pub use plan::{plan_input_types, run_plan, InputSelection};

/// Errors that stop a batch run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write status output: {0}")]
    Output(#[from] std::io::Error),
}

/// Audio codec argument passed to the transcoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodec {
    /// Re-encode with LAME, used for mp3 targets
    LibMp3Lame,
    /// Stream copy into the new container.
    ///
    /// Used for every non-mp3 target, which only works when the source
    /// stream is already valid in the target container.
    Copy,
}

impl AudioCodec {
    pub fn for_extension(output_ext: &str) -> Self {
        if output_ext == "mp3" {
            AudioCodec::LibMp3Lame
        } else {
            AudioCodec::Copy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCodec::LibMp3Lame => "libmp3lame",
            AudioCodec::Copy => "copy",
        }
    }
}

/// One source-to-target conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub input: PathBuf,
    pub output: PathBuf,
    pub codec: AudioCodec,
}

impl ConversionTask {
    pub fn new(input: &Path, output_ext: &str) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output_path_for(input, output_ext),
            codec: AudioCodec::for_extension(output_ext),
        }
    }
}

/// Outcome of a single transcoder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeOutcome {
    Success,
    Failed {
        /// Exit code, `None` when the process was killed by a signal
        status: Option<i32>,
        stderr: String,
    },
}

/// Runs one conversion task to completion
pub trait Transcoder {
    /// Convert `task.input` into `task.output`.
    ///
    /// A tool that ran but failed is reported through [`TranscodeOutcome::Failed`];
    /// `Err` is reserved for a tool that could not be started at all.
    fn transcode(&mut self, task: &ConversionTask) -> Result<TranscodeOutcome, ConvertError>;
}

/// Whether `file_name` is selected by `input_ext`.
///
/// `*` matches everything; otherwise the name must end in the literal `.{input_ext}`.
pub fn matches_extension(file_name: &str, input_ext: &str) -> bool {
    input_ext == WILDCARD || file_name.ends_with(&format!(".{}", input_ext))
}

/// Same directory and base name as `input`, with `output_ext` as the extension.
///
/// The stem is kept as raw OS bytes so non-UTF-8 names map one-to-one.
pub fn output_path_for(input: &Path, output_ext: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let mut name = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".");
    name.push(output_ext);
    parent.join(name)
}
