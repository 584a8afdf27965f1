//! nobg - strip near-black backgrounds from raster images.

mod background;
mod cli;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    run(&cli)
}

/// Run the removal pass and print the confirmation line.
fn run(cli: &Cli) -> Result<()> {
    let output = cli.output_path();
    let stats = background::remove_black_background(&cli.input, &output)?;

    debug!("nobg"; "{}x{} pixels, cleared {} background pixel{}",
        stats.width, stats.height, stats.cleared,
        if stats.cleared == 1 { "" } else { "s" });
    log!("nobg"; "saved transparent image to {}", output.display());

    Ok(())
}
