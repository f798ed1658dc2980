//! Error types for the atlas pipeline.
//!
//! Every failure is fatal for a run: errors propagate to `main`, which prints
//! them and exits non-zero.

use std::fmt;
use std::io;
use std::path::PathBuf;

use fontatlas_core::LayoutError;

/// Job configuration could not be built or is out of range.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Serialize(toml::ser::Error),
    MissingArgument(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::Serialize(e) => write!(f, "cannot serialize config: {e}"),
            Self::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            Self::Invalid(why) => write!(f, "invalid job: {why}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(e) => Some(e),
            Self::MissingArgument(_) | Self::Invalid(_) => None,
        }
    }
}

/// The font file could not be loaded.
#[derive(Debug)]
pub enum FontError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, reason: String },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read font {}: {source}", path.display())
            }
            Self::Parse { path, reason } => {
                write!(f, "cannot parse font {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}

/// An output artifact could not be written.
#[derive(Debug)]
pub enum OutputError {
    Write { path: PathBuf, source: io::Error },
    Encode { path: PathBuf, source: image::ImageError },
    Metadata(serde_json::Error),
    BufferSize { width: u32, height: u32, len: usize },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { path, source } => write!(f, "cannot write {}: {source}", path.display()),
            Self::Encode { path, source } => {
                write!(f, "cannot encode PNG {}: {source}", path.display())
            }
            Self::Metadata(e) => write!(f, "cannot serialize metadata: {e}"),
            Self::BufferSize { width, height, len } => {
                write!(f, "pixel buffer of {len} bytes does not match {width}x{height} RGBA")
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
            Self::Metadata(e) => Some(e),
            Self::BufferSize { .. } => None,
        }
    }
}

/// Any failure of a run.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Font(FontError),
    Layout(LayoutError),
    Output(OutputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Font(e) => write!(f, "{e}"),
            Self::Layout(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Font(e) => Some(e),
            Self::Layout(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<FontError> for Error {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}
