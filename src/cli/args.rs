//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Strip a near-black background from a raster image
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Input raster image (PNG, JPEG or WebP)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output PNG path (default: `<input stem>_transparent.png` next to the input)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the output path, deriving the default from the input name.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let mut name = self
                    .input
                    .file_stem()
                    .unwrap_or_else(|| OsStr::new("image"))
                    .to_os_string();
                name.push("_transparent.png");
                self.input.with_file_name(name)
            }
        }
    }
}
