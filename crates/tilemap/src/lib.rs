//! Tilemap construction: a rectangular grid of string codes becomes a grid
//! of positioned tiles referencing pre-loaded textures.
//!
//! # Invariants
//! - Built once, never mutated afterwards.
//! - The output is always rectangular: `rows() == input.len()` and every row
//!   has `input[0].len()` columns, regardless of ragged input.

use glam::Vec2;
use pyrite_assets::{AssetStore, TextureHandle};

/// Edge length of one tile in world units.
pub const TILE_SIZE: f32 = 16.0;

/// One cell of a tilemap.
///
/// The image is absent when the source code was unrecognized or its texture
/// never loaded. Handles stay valid as long as the store they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub position: Vec2,
    pub image: Option<TextureHandle>,
}

/// Rectangular grid of tiles.
#[derive(Debug, Clone)]
pub struct Tilemap {
    tiles: Vec<Vec<Tile>>,
}

impl Tilemap {
    /// Build a tilemap from a grid of string codes.
    ///
    /// Cell `(row, col)` lands at `(col * TILE_SIZE, row * TILE_SIZE)`.
    /// Codes map through a fixed table: `"1"` looks up the `"bot"` texture,
    /// `"2"` looks up `"rock"`, anything else gets no image. Total over any
    /// input: unrecognized codes are not an error.
    ///
    /// The output width is the first row's length. Shorter input rows are
    /// padded with imageless tiles and longer rows truncated, so the result
    /// is rectangular even for ragged input.
    pub fn from_grid<S: AsRef<str>>(grid: &[Vec<S>], assets: &AssetStore) -> Self {
        let cols = grid.first().map_or(0, |row| row.len());
        let mut tiles = Vec::with_capacity(grid.len());

        for (y, row) in grid.iter().enumerate() {
            let mut out = Vec::with_capacity(cols);
            for x in 0..cols {
                let image = row.get(x).and_then(|code| match code.as_ref() {
                    "1" => assets.image("bot"),
                    "2" => assets.image("rock"),
                    _ => None,
                });
                out.push(Tile {
                    position: Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE),
                    image,
                });
            }
            tiles.push(out);
        }

        Self { tiles }
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, |row| row.len())
    }

    /// Fetch a tile by row and column.
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row).and_then(|r| r.get(col))
    }

    /// Iterate all tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_stock_textures() -> AssetStore {
        let mut store = AssetStore::new();
        store.register("bot", 1, 1, vec![0; 4]);
        store.register("rock", 1, 1, vec![0; 4]);
        store
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn two_by_two_positions_and_images() {
        let store = store_with_stock_textures();
        let bot = store.image("bot");
        let rock = store.image("rock");

        let map = Tilemap::from_grid(&grid(&[&["1", "2"], &["0", "1"]]), &store);

        assert_eq!((map.rows(), map.cols()), (2, 2));
        let t = map.tile(0, 0).unwrap();
        assert_eq!((t.position, t.image), (Vec2::new(0.0, 0.0), bot));
        let t = map.tile(0, 1).unwrap();
        assert_eq!((t.position, t.image), (Vec2::new(16.0, 0.0), rock));
        let t = map.tile(1, 0).unwrap();
        assert_eq!((t.position, t.image), (Vec2::new(0.0, 16.0), None));
        let t = map.tile(1, 1).unwrap();
        assert_eq!((t.position, t.image), (Vec2::new(16.0, 16.0), bot));
    }

    #[test]
    fn unrecognized_codes_get_no_image_without_error() {
        let store = store_with_stock_textures();
        let map = Tilemap::from_grid(&grid(&[&["x", "", "99"]]), &store);
        assert!(map.iter().all(|t| t.image.is_none()));
    }

    #[test]
    fn known_code_with_missing_texture_is_absent() {
        // "1" is a recognized code but nothing named "bot" ever loaded.
        let store = AssetStore::new();
        let map = Tilemap::from_grid(&grid(&[&["1"]]), &store);
        assert_eq!(map.tile(0, 0).unwrap().image, None);
    }

    #[test]
    fn ragged_rows_pad_and_truncate_to_first_row_width() {
        let store = store_with_stock_textures();
        let map = Tilemap::from_grid(&grid(&[&["1", "2"], &["1"], &["2", "2", "1"]]), &store);

        assert_eq!((map.rows(), map.cols()), (3, 2));
        // Short row padded with an imageless tile at the right position.
        let padded = map.tile(1, 1).unwrap();
        assert_eq!(padded.position, Vec2::new(16.0, 16.0));
        assert_eq!(padded.image, None);
        // Long row truncated.
        assert!(map.tile(2, 2).is_none());
        assert_eq!(map.tile(2, 1).unwrap().image, store.image("rock"));
    }

    #[test]
    fn empty_grid_builds_empty_map() {
        let store = AssetStore::new();
        let map = Tilemap::from_grid(&Vec::<Vec<String>>::new(), &store);
        assert_eq!((map.rows(), map.cols()), (0, 0));
        assert_eq!(map.iter().count(), 0);
    }
}
