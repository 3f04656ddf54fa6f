use log::debug;

/// Pixel-space window of a single tile in the source raster.
#[derive(Debug, Clone, Copy)]
pub struct TileWindow {
    pub row: usize,
    pub col: usize,
    pub x_off: usize,
    pub y_off: usize,
    pub size: usize,
}

pub struct TileGrid {
    tile_size: usize,
    pub num_cols: usize,
    pub num_rows: usize,
    pub total_tiles: usize,
}

impl TileGrid {
    pub fn new(raster_width: usize, raster_height: usize, tile_size: usize) -> Self {
        // Truncating division: a trailing partial row or column is not tiled
        let num_cols = raster_width / tile_size;
        let num_rows = raster_height / tile_size;
        let total_tiles = num_cols * num_rows;

        debug!(
            "TileGrid: {}x{} raster, tile_size={} → {}x{} tiles ({} total)",
            raster_width, raster_height, tile_size, num_cols, num_rows, total_tiles
        );

        Self {
            tile_size,
            num_cols,
            num_rows,
            total_tiles,
        }
    }

    pub fn iter(&self) -> TileIterator<'_> {
        TileIterator::new(self)
    }

    /// Window for a linear tile index, in row-major order.
    pub fn window(&self, tile_idx: usize) -> TileWindow {
        let row = tile_idx / self.num_cols;
        let col = tile_idx % self.num_cols;

        TileWindow {
            row,
            col,
            x_off: col * self.tile_size,
            y_off: row * self.tile_size,
            size: self.tile_size,
        }
    }
}

pub struct TileIterator<'a> {
    grid: &'a TileGrid,
    current_idx: usize,
}

impl<'a> TileIterator<'a> {
    fn new(grid: &'a TileGrid) -> Self {
        Self {
            grid,
            current_idx: 0,
        }
    }
}

impl<'a> Iterator for TileIterator<'a> {
    type Item = (usize, TileWindow);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_idx < self.grid.total_tiles {
            let window = self.grid.window(self.current_idx);
            let idx = self.current_idx;
            self.current_idx += 1;
            Some((idx, window))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_evenly_divisible() {
        // 4096x2048 raster with 1024 tiles
        let grid = TileGrid::new(4096, 2048, 1024);
        assert_eq!(grid.num_cols, 4);
        assert_eq!(grid.num_rows, 2);
        assert_eq!(grid.total_tiles, 8);
    }

    #[test]
    fn test_grid_truncates_partial_edges() {
        // Trailing 452x52 strip is dropped
        let grid = TileGrid::new(2500, 2100, 1024);
        assert_eq!(grid.num_cols, 2);
        assert_eq!(grid.num_rows, 2);
        assert_eq!(grid.total_tiles, 4);
    }

    #[test]
    fn test_grid_smaller_than_tile() {
        let grid = TileGrid::new(512, 4096, 1024);
        assert_eq!(grid.num_cols, 0);
        assert_eq!(grid.total_tiles, 0);
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_window_offsets() {
        let grid = TileGrid::new(4096, 2048, 1024);
        let window = grid.window(5); // Second row, second column

        assert_eq!(window.row, 1);
        assert_eq!(window.col, 1);
        assert_eq!(window.x_off, 1024);
        assert_eq!(window.y_off, 1024);
        assert_eq!(window.size, 1024);
    }

    #[test]
    fn test_iterator_row_major_order() {
        let grid = TileGrid::new(3072, 2048, 1024);
        let windows: Vec<_> = grid.iter().map(|(_, w)| (w.row, w.col)).collect();

        assert_eq!(
            windows,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_iterator_indexes_all_tiles() {
        let grid = TileGrid::new(4096, 2048, 1024);
        let tiles: Vec<_> = grid.iter().collect();

        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[0].0, 0);
        assert_eq!(tiles[7].0, 7);
    }
}
