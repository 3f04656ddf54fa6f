use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raster-tiler")]
#[command(about = "Slice a georeferenced raster into normalized fixed-size GeoTIFF tiles")]
#[command(version)]
pub struct Args {
    /// Input raster path (any GDAL-readable format)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output folder for the generated tiles
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Tile edge length in pixels
    #[arg(short, long, value_name = "PIXELS", default_value_t = 1024)]
    pub tile_size: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
