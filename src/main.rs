use clap::Parser;
use env_logger::Env;
use log::info;

mod cli;
mod error;
mod geo;
mod grid;
mod io;
mod normalize;
mod tiler;

use cli::Args;
use error::Result;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("=== Raster Tile Generator ===");

    // Validate tile size
    if args.tile_size == 0 {
        return Err(error::TilerError::InvalidTileSize(args.tile_size));
    }

    info!("Input raster: {}", args.input.display());
    info!("Output folder: {}", args.output_dir.display());
    info!("Tile size: {}x{} pixels", args.tile_size, args.tile_size);

    let summary = tiler::tile_raster(&args.input, &args.output_dir, args.tile_size)?;

    info!(
        "Completed processing: {} tiles written, {} skipped",
        summary.written, summary.skipped
    );
    Ok(())
}
