//! ffmpeg-backed [`Transcoder`]

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{ConversionTask, ConvertError, TranscodeOutcome, Transcoder};

const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Runs `ffmpeg -i <input> -codec:a <codec> -map_metadata 0 <output>`
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Ffmpeg {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Argument list for one task, metadata copied from the first input
    pub fn args(task: &ConversionTask) -> Vec<OsString> {
        vec![
            "-i".into(),
            task.input.clone().into_os_string(),
            "-codec:a".into(),
            task.codec.as_str().into(),
            "-map_metadata".into(),
            "0".into(),
            task.output.clone().into_os_string(),
        ]
    }

    fn command(&self, task: &ConversionTask) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(Self::args(task))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Transcoder for Ffmpeg {
    fn transcode(&mut self, task: &ConversionTask) -> Result<TranscodeOutcome, ConvertError> {
        let mut command = self.command(task);
        log::debug!("Running {:?}", command);

        let output = command.output().map_err(|source| ConvertError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        if output.status.success() {
            Ok(TranscodeOutcome::Success)
        } else {
            Ok(TranscodeOutcome::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
