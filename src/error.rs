use thiserror::Error;

#[derive(Error, Debug)]
pub enum TilerError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Invalid tile size: {0} (must be positive)")]
    InvalidTileSize(usize),

    #[error("Input raster has invalid dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),
}

pub type Result<T> = std::result::Result<T, TilerError>;
