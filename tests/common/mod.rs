//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pinetree::convert::{ConversionTask, ConvertError, TranscodeOutcome, Transcoder};
use tempfile::TempDir;

/// Transcoder fake that records every task it is handed.
///
/// When `write_output` is set it creates the target file, like a successful
/// ffmpeg run would.
#[derive(Debug, Default)]
pub struct RecordingTranscoder {
    pub tasks: Vec<ConversionTask>,
    pub write_output: bool,
    pub fail_with: Option<(Option<i32>, String)>,
}

impl RecordingTranscoder {
    pub fn writing() -> Self {
        Self {
            write_output: true,
            ..Default::default()
        }
    }

    pub fn failing(status: Option<i32>, stderr: &str) -> Self {
        Self {
            fail_with: Some((status, stderr.to_string())),
            ..Default::default()
        }
    }

    /// Input paths seen so far, relative to `root`
    pub fn relative_inputs(&self, root: &Path) -> Vec<PathBuf> {
        let mut inputs: Vec<PathBuf> = self
            .tasks
            .iter()
            .map(|t| t.input.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        inputs.sort();
        inputs
    }
}

impl Transcoder for RecordingTranscoder {
    fn transcode(&mut self, task: &ConversionTask) -> Result<TranscodeOutcome, ConvertError> {
        self.tasks.push(task.clone());
        if let Some((status, stderr)) = &self.fail_with {
            return Ok(TranscodeOutcome::Failed {
                status: *status,
                stderr: stderr.clone(),
            });
        }
        if self.write_output {
            fs::write(&task.output, b"converted").unwrap();
        }
        Ok(TranscodeOutcome::Success)
    }
}

/// Transcoder fake whose tool can never be started
pub struct MissingTranscoder;

impl Transcoder for MissingTranscoder {
    fn transcode(&mut self, _task: &ConversionTask) -> Result<TranscodeOutcome, ConvertError> {
        Err(ConvertError::Spawn {
            program: "ffmpeg".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    }
}

/// Create a temp directory holding empty files at the given relative paths
pub fn create_music_tree(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        let path = temp_dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"audio").unwrap();
    }
    temp_dir
}
