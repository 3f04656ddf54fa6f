use crate::error::{Result, TilerError};
use crate::grid::TileWindow;
use gdal::raster::{Buffer, RasterBand};
use gdal::{Dataset, DriverManager};
use log::{debug, info};
use ndarray::Array2;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RasterMetadata {
    pub width: usize,
    pub height: usize,
    pub geo_transform: [f64; 6],
    pub projection: String,
}

/// Open the input raster and capture the metadata every tile needs
pub fn open_input_raster(path: &Path) -> Result<(Dataset, RasterMetadata)> {
    info!("Opening input raster: {}", path.display());
    let dataset = Dataset::open(path)?;

    let rasterband: RasterBand = dataset.rasterband(1)?;

    let width = rasterband.x_size();
    let height = rasterband.y_size();

    if width == 0 || height == 0 {
        return Err(TilerError::InvalidDimensions(width, height));
    }

    let geo_transform = dataset.geo_transform()?;

    debug!("Raster dimensions: {}x{}", width, height);
    debug!(
        "Geotransform: origin=({:.6}, {:.6}), pixel_size=({:.6}, {:.6})",
        geo_transform[0], geo_transform[3], geo_transform[1], geo_transform[5]
    );

    let metadata = RasterMetadata {
        width,
        height,
        geo_transform,
        projection: dataset.projection(),
    };

    Ok((dataset, metadata))
}

/// Read one tile window from band 1 at native resolution
pub fn read_window(dataset: &Dataset, window: &TileWindow) -> Result<Array2<f32>> {
    let rasterband = dataset.rasterband(1)?;

    debug!(
        "Reading window: offset=({},{}), size={}x{}",
        window.x_off, window.y_off, window.size, window.size
    );

    let buffer = rasterband.read_as::<f32>(
        (window.x_off as isize, window.y_off as isize),
        (window.size, window.size),
        (window.size, window.size),
        None,
    )?;

    let data_vec: Vec<f32> = buffer.into_iter().collect();
    let data = Array2::from_shape_vec((window.size, window.size), data_vec)?;

    Ok(data)
}

/// Write a single-band u16 GeoTIFF tile with its own geotransform
pub fn write_tile(
    path: &Path,
    data: &Array2<u16>,
    tile_transform: &[f64; 6],
    projection: &str,
) -> Result<()> {
    let (height, width) = data.dim();

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut dataset = driver.create_with_band_type::<u16, _>(path, width, height, 1)?;

    dataset.set_geo_transform(tile_transform)?;
    dataset.set_projection(projection)?;

    let mut rasterband = dataset.rasterband(1)?;

    // GDAL expects data in row-major order (which is how Array2 stores it)
    let tile_slice = data.as_slice().expect("Array must be contiguous");
    let mut buffer = Buffer::new((width, height), tile_slice.to_vec());

    rasterband.write((0, 0), (width, height), &mut buffer)?;

    debug!("Wrote tile {} ({}x{})", path.display(), width, height);

    Ok(())
}
