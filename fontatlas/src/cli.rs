//! Command-line interface.
//!
//! The classic invocation is fully positional:
//!
//! ```text
//! fontatlas <fontSize> <bitmapWidth> <fontPath> <bitmapOutputPath>
//!           <configOutputPath> <colorR> <colorG> <colorB> <colorA>
//! ```
//!
//! Alternatively a job can come from a TOML file (`--config`), and
//! `--print-config` dumps a default job to start from.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use fontatlas_core::Color;

use crate::config::Job;
use crate::error::ConfigError;

const POSITIONAL: [&str; 9] = [
    "font_size",
    "bitmap_width",
    "font_path",
    "bitmap_path",
    "metadata_path",
    "color_r",
    "color_g",
    "color_b",
    "color_a",
];

#[derive(Debug, Parser)]
#[command(name = "fontatlas", version, about = "Bake a font into a PNG glyph atlas with JSON metadata")]
pub struct Cli {
    /// Font size in points (rendered at 96 DPI).
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub font_size: Option<u32>,
    /// Atlas width in pixels.
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub bitmap_width: Option<u32>,
    /// TrueType/OpenType font file.
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub font_path: Option<PathBuf>,
    /// Where to write the atlas PNG.
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub bitmap_path: Option<PathBuf>,
    /// Where to write the JSON metadata.
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub metadata_path: Option<PathBuf>,
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub color_r: Option<u8>,
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub color_g: Option<u8>,
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub color_b: Option<u8>,
    #[arg(required_unless_present_any = ["config", "print_config"])]
    pub color_a: Option<u8>,

    /// Read the job from a TOML file instead of positional arguments.
    #[arg(long, value_name = "FILE", conflicts_with_all = POSITIONAL)]
    pub config: Option<PathBuf>,

    /// Print a default job as TOML and exit.
    #[arg(long, conflicts_with_all = POSITIONAL, conflicts_with = "config")]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    PrintConfig,
    Load(PathBuf),
    Run(Job),
}

impl Cli {
    pub fn mode(self) -> Result<Mode, ConfigError> {
        if self.print_config {
            return Ok(Mode::PrintConfig);
        }
        if let Some(path) = self.config {
            return Ok(Mode::Load(path));
        }

        let job = Job {
            font_size: required(self.font_size, "fontSize")?,
            bitmap_width: required(self.bitmap_width, "bitmapWidth")?,
            font_path: required(self.font_path, "fontPath")?,
            bitmap_path: required(self.bitmap_path, "bitmapOutputPath")?,
            metadata_path: required(self.metadata_path, "configOutputPath")?,
            color: Color::new(
                required(self.color_r, "colorR")?,
                required(self.color_g, "colorG")?,
                required(self.color_b, "colorB")?,
                required(self.color_a, "colorA")?,
            ),
            ..Job::default()
        };
        Ok(Mode::Run(job))
    }
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::MissingArgument(name))
}

/// Default `env_logger` filter for a `-v` count.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
