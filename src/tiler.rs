use crate::error::{Result, TilerError};
use crate::geo;
use crate::grid::TileGrid;
use crate::io;
use crate::normalize;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Counts reported after a tiling run.
#[derive(Debug, Default, Clone, Copy)]
pub struct TileSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Slice the input raster into tiles and write one GeoTIFF per tile.
///
/// Tiles already present in the output folder are skipped without being
/// read, so re-running over the same folder is idempotent.
pub fn tile_raster(input: &Path, output_dir: &Path, tile_size: usize) -> Result<TileSummary> {
    if tile_size == 0 {
        return Err(TilerError::InvalidTileSize(tile_size));
    }

    let (dataset, metadata) = io::open_input_raster(input)?;

    info!("Raster size: {}x{}", metadata.width, metadata.height);

    if metadata.geo_transform[2] != 0.0 || metadata.geo_transform[4] != 0.0 {
        warn!(
            "Rotated geotransform (gt[2]={:.6}, gt[4]={:.6}); tile origins assume north-up",
            metadata.geo_transform[2], metadata.geo_transform[4]
        );
    }

    fs::create_dir_all(output_dir)?;

    let grid = TileGrid::new(metadata.width, metadata.height, tile_size);
    if grid.total_tiles == 0 {
        warn!(
            "Raster {}x{} is smaller than one {}x{} tile, nothing to write",
            metadata.width, metadata.height, tile_size, tile_size
        );
        return Ok(TileSummary::default());
    }

    info!(
        "Tiling {}x{} grid ({} tiles of {}x{} pixels)",
        grid.num_cols, grid.num_rows, grid.total_tiles, tile_size, tile_size
    );

    let mut summary = TileSummary::default();

    for (idx, window) in grid.iter() {
        let tile_transform =
            geo::window_geo_transform(&metadata.geo_transform, window.x_off, window.y_off);

        let lon = geo::wrap_longitude(tile_transform[0]);
        let lat = geo::wrap_latitude(tile_transform[3]);

        let output_path = output_dir.join(geo::tile_file_name(lon, lat));

        if output_path.exists() {
            info!("Skipping {}, already exists", output_path.display());
            summary.skipped += 1;
            continue;
        }

        let data = io::read_window(&dataset, &window)?;
        let rescaled = normalize::rescale_to_u16(&data);
        io::write_tile(&output_path, &rescaled, &tile_transform, &metadata.projection)?;

        debug!(
            "Tile {}/{} written: {}",
            idx + 1,
            grid.total_tiles,
            output_path.display()
        );
        summary.written += 1;
    }

    Ok(summary)
}
