//! Recursive batch conversion over a directory tree

use std::io::{self, Stdout, Write};
use std::ops::AddAssign;
use std::path::Path;

use walkdir::WalkDir;

use super::{matches_extension, ConversionTask, ConvertError, TranscodeOutcome, Transcoder};
use crate::utils::{write_converting, write_failure, write_skipping};

/// Tally of what a batch run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ConversionReport {
    /// Files that matched the input extension
    pub fn matched(&self) -> usize {
        self.converted + self.skipped + self.failed
    }
}

impl AddAssign for ConversionReport {
    fn add_assign(&mut self, other: Self) {
        self.converted += other.converted;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Walks a tree and hands each matching file to a [`Transcoder`].
///
/// Per-file status lines go to `out`, stdout unless built with [`BatchConverter::with_output`].
pub struct BatchConverter<T, W = Stdout> {
    transcoder: T,
    out: W,
}

impl<T: Transcoder> BatchConverter<T> {
    pub fn new(transcoder: T) -> Self {
        Self::with_output(transcoder, io::stdout())
    }
}

impl<T: Transcoder, W: Write> BatchConverter<T, W> {
    pub fn with_output(transcoder: T, out: W) -> Self {
        Self { transcoder, out }
    }

    pub fn transcoder(&self) -> &T {
        &self.transcoder
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Convert every `*.{input_ext}` file under `root` to `output_ext`.
    ///
    /// Files whose target already exists are skipped and never overwritten.
    /// A failed conversion is reported and the walk continues; only a
    /// transcoder that cannot be started aborts the batch.
    pub fn convert(
        &mut self,
        input_ext: &str,
        output_ext: &str,
        root: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let mut report = ConversionReport::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            // Symlinked directories are not followed, but are not files either
            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !matches_extension(&file_name, input_ext) {
                continue;
            }
            log::debug!("Matched {}", entry.path().display());

            let task = ConversionTask::new(entry.path(), output_ext);
            if task.output.exists() {
                write_skipping(&mut self.out, &task.input)?;
                report.skipped += 1;
                continue;
            }

            write_converting(&mut self.out, &task.input, &task.output)?;
            match self.transcoder.transcode(&task)? {
                TranscodeOutcome::Success => report.converted += 1,
                TranscodeOutcome::Failed { status, stderr } => {
                    log::warn!(
                        "Conversion of {} exited with status {:?}",
                        task.input.display(),
                        status
                    );
                    write_failure(&mut self.out, &task.input, status, &stderr)?;
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}
