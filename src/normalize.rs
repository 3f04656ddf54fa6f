use log::debug;
use ndarray::Array2;

const U16_FULL_SCALE: f32 = 65535.0;

/// Linearly rescale a window of raw samples to span the full unsigned
/// 16-bit range: the window minimum maps to 0, the maximum to 65535.
///
/// The stretch is per-window, so every tile uses its own dynamic range.
/// A flat window (max == min) rescales to all zeros.
pub fn rescale_to_u16(data: &Array2<f32>) -> Array2<u16> {
    let min_val = data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_val = data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

    let range = if (max_val - min_val).abs() > f32::EPSILON {
        max_val - min_val
    } else {
        1.0
    };

    debug!("Window value range: {:.3} to {:.3}", min_val, max_val);

    data.mapv(|v| ((v - min_val) / range * U16_FULL_SCALE) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_rescale_fills_full_range() {
        let data = arr2(&[[0.0_f32, 1.0], [2.0, 4.0]]);
        let scaled = rescale_to_u16(&data);

        assert_eq!(scaled[[0, 0]], 0);
        assert_eq!(scaled[[0, 1]], 16383); // 1/4 of full scale, truncated
        assert_eq!(scaled[[1, 0]], 32767);
        assert_eq!(scaled[[1, 1]], 65535);
    }

    #[test]
    fn test_rescale_negative_values() {
        let data = arr2(&[[-2.0_f32, 0.0], [2.0, -2.0]]);
        let scaled = rescale_to_u16(&data);

        assert_eq!(scaled[[0, 0]], 0);
        assert_eq!(scaled[[0, 1]], 32767);
        assert_eq!(scaled[[1, 0]], 65535);
        assert_eq!(scaled[[1, 1]], 0);
    }

    #[test]
    fn test_rescale_flat_window_is_zeros() {
        let data = arr2(&[[7.5_f32, 7.5], [7.5, 7.5]]);
        let scaled = rescale_to_u16(&data);

        assert!(scaled.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_rescale_is_offset_invariant() {
        // Shifting every sample by a constant leaves the output unchanged
        let data = arr2(&[[100.0_f32, 150.0], [200.0, 300.0]]);
        let shifted = data.mapv(|v| v + 5000.0);

        assert_eq!(rescale_to_u16(&data), rescale_to_u16(&shifted));
    }
}
