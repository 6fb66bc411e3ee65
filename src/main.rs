//! mipatlas CLI - packs a texture and its mip chain into one atlas image.
//!
//! Prints the used atlas height to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mipatlas::{AtlasLayout, BuildConfig, MipAtlasBuilder};

/// Exit status for a missing, nonexistent or non-file input.
const EXIT_INVALID_INPUT: u8 = 255;

/// mipatlas - build a mip atlas from a texture
#[derive(Parser)]
#[command(name = "mipatlas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source image
    input: Option<PathBuf>,

    /// Output image (defaults to `<stem>_mip.<ext>` next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the level layout without writing anything
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match BuildConfig::from_arg(cli.input) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };
    let config = match cli.output {
        Some(output) => config.with_output(output),
        None => config,
    };

    let builder = MipAtlasBuilder::new(config);
    let result = if cli.dry_run {
        cmd_plan(&builder)
    } else {
        cmd_build(&builder)
    };

    match result {
        Err(e) if e.is_invalid_input() => {
            log::error!("{e}");
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
        Err(e) => Err(e).context("Failed to build mip atlas"),
        Ok(()) => Ok(ExitCode::SUCCESS),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_build(builder: &MipAtlasBuilder) -> mipatlas::Result<()> {
    let report = builder.build()?;
    println!("{}", report.used_height());
    Ok(())
}

fn cmd_plan(builder: &MipAtlasBuilder) -> mipatlas::Result<()> {
    let layout = builder.plan()?;
    print_layout(&layout);
    println!("{}", layout.used_height());
    Ok(())
}

fn print_layout(layout: &AtlasLayout) {
    println!(
        "# {} levels, canvas {}x{}",
        layout.mip_levels(),
        layout.canvas_width(),
        layout.canvas_height()
    );
    for level in layout.levels() {
        println!(
            "{:>2} {:>6} {:>6} {:>6} {:>6}",
            level.index, level.width, level.height, level.x, level.y
        );
    }
}
