//! Persisted list of supported input and output formats
//!
//! The configuration lives at `~/.config/pinetree/audio_converter.conf` and
//! holds a single `[SUPPORTED_FILETYPES]` section with two comma-joined
//! extension lists. The file is created with defaults on first load.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, WriteOption};
use thiserror::Error;

/// Token appended to the input options meaning "every configured input type"
pub const WILDCARD: &str = "*";

/// Input extensions written to a freshly created configuration file
pub const DEFAULT_INPUT_TYPES: &[&str] = &["flac", "wav", "aac", "ogg", "mp4", "m4a"];

/// Output extensions written to a freshly created configuration file
pub const DEFAULT_OUTPUT_TYPES: &[&str] = &["mp3", "wav", "ogg"];

const CONFIG_DIR: &str = ".config/pinetree";
const CONFIG_FILE: &str = "audio_converter.conf";

const SECTION: &str = "SUPPORTED_FILETYPES";
const INPUT_KEY: &str = "input_types";
const OUTPUT_KEY: &str = "output_types";

/// Errors raised while locating, creating or reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDirectory,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Supported extensions, in configured order, without leading dots.
///
/// Entries are not trimmed or de-duplicated: whatever sits between the
/// commas in the file ends up in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub input_types: Vec<String>,
    pub output_types: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            input_types: DEFAULT_INPUT_TYPES.iter().map(|s| s.to_string()).collect(),
            output_types: DEFAULT_OUTPUT_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FormatConfig {
    /// Options shown by the input picker: configured types plus the wildcard.
    pub fn input_options(&self) -> Vec<String> {
        let mut options = self.input_types.clone();
        options.push(WILDCARD.to_string());
        options
    }
}

/// Handle to the configuration file on disk
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<home>/.config/pinetree/audio_converter.conf`
    pub fn under_home(home: &Path) -> Self {
        Self::new(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Store under the current user's home directory
    pub fn default_location() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::under_home(&home))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default configuration if no file exists yet.
    ///
    /// Returns `true` when the file was created by this call.
    pub fn ensure_default(&self) -> Result<bool, ConfigError> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some(SECTION))
            .set(INPUT_KEY, DEFAULT_INPUT_TYPES.join(","))
            .set(OUTPUT_KEY, DEFAULT_OUTPUT_TYPES.join(","));
        ini.write_to_file_opt(&self.path, write_option())
            .map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;

        log::info!("Created default configuration at {}", self.path.display());
        Ok(true)
    }

    /// Read both extension lists, creating the file first if needed
    pub fn load(&self) -> Result<FormatConfig, ConfigError> {
        self.ensure_default()?;

        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        let ini = Ini::load_from_str_opt(&contents, parse_option()).map_err(|e| {
            ConfigError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        let section = ini.section(Some(SECTION)).ok_or_else(|| ConfigError::Parse {
            path: self.path.clone(),
            message: format!("missing section [{}]", SECTION),
        })?;
        let field = |key: &str| {
            section.get(key).ok_or_else(|| ConfigError::Parse {
                path: self.path.clone(),
                message: format!("missing key `{}` in section [{}]", key, SECTION),
            })
        };

        Ok(FormatConfig {
            input_types: split_list(field(INPUT_KEY)?),
            output_types: split_list(field(OUTPUT_KEY)?),
        })
    }
}

/// `key = value`, the layout configparser writes
fn write_option() -> WriteOption {
    WriteOption {
        kv_separator: " = ",
        ..Default::default()
    }
}

/// Values are taken verbatim: no quote stripping, no backslash escapes
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}
