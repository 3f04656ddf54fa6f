use log::debug;

pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Wrap a coordinate into [minimum, maximum).
///
/// `rem_euclid` keeps the remainder non-negative, so values below the
/// minimum wrap up into range and a value exactly at the maximum wraps
/// to the minimum.
pub fn wrap_to_range(value: f64, minimum: f64, maximum: f64) -> f64 {
    let range = maximum - minimum;
    (value - minimum).rem_euclid(range) + minimum
}

pub fn wrap_longitude(value: f64) -> f64 {
    wrap_to_range(value, MIN_LONGITUDE, MAX_LONGITUDE)
}

pub fn wrap_latitude(value: f64) -> f64 {
    wrap_to_range(value, MIN_LATITUDE, MAX_LATITUDE)
}

/// Convert pixel (x,y) to georeferenced coordinates using the geotransform
pub fn pixel_to_geo(gt: &[f64; 6], px: f64, py: f64) -> (f64, f64) {
    let x = gt[0] + px * gt[1] + py * gt[2];
    let y = gt[3] + px * gt[4] + py * gt[5];
    (x, y)
}

/// Geotransform of a window whose top-left pixel sits at (x_off, y_off)
/// in the source raster. Pixel-size and rotation terms carry through
/// unchanged; only the origin moves.
pub fn window_geo_transform(gt: &[f64; 6], x_off: usize, y_off: usize) -> [f64; 6] {
    let (origin_x, origin_y) = pixel_to_geo(gt, x_off as f64, y_off as f64);
    debug!(
        "Window origin at pixel ({}, {}) → geo ({:.6}, {:.6})",
        x_off, y_off, origin_x, origin_y
    );
    [origin_x, gt[1], gt[2], origin_y, gt[4], gt[5]]
}

/// Output filename for a tile, encoding its wrapped origin to six
/// decimal places.
pub fn tile_file_name(lon: f64, lat: f64) -> String {
    format!("long_{:.6}_lat_{:.6}.tif", lon, lat)
}
