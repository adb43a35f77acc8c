use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Water,
    Stone,
    Sand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridWorldError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
}

/// Tile matrix in row-major order, indexed by (x, y) cell coordinates.
/// `rotation_count` tracks how many 90-degree clockwise world rotations
/// have been applied, modulo 4.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
    rotation_count: u8,
}

impl GridWorld {
    pub fn new(width: u32, height: u32, tiles: Vec<TileKind>) -> Result<Self, GridWorldError> {
        if width == 0 || height == 0 {
            return Err(GridWorldError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        let actual = tiles.len();
        if expected != actual {
            return Err(GridWorldError::TileCountMismatch { expected, actual });
        }
        Ok(Self {
            width,
            height,
            tiles,
            rotation_count: 0,
        })
    }

    pub fn from_fn(
        width: u32,
        height: u32,
        mut tile: impl FnMut(u32, u32) -> TileKind,
    ) -> Result<Self, GridWorldError> {
        if width == 0 || height == 0 {
            return Err(GridWorldError::EmptyDimensions { width, height });
        }
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(tile(x, y));
            }
        }
        Self::new(width, height, tiles)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rotation_count(&self) -> u8 {
        self.rotation_count
    }

    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn tile_at(&self, x: u32, y: u32) -> Option<TileKind> {
        self.index_of(x, y)
            .and_then(|index| self.tiles.get(index).copied())
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Rotates the tile matrix 90 degrees clockwise: cell (x, y) moves to
    /// (y, w - 1 - x) and the dimensions swap.
    pub fn rotate_90_cw(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut rotated = self.tiles.clone();
        for y in 0..h {
            for x in 0..w {
                let new_x = y;
                let new_y = w - 1 - x;
                rotated[new_y * h + new_x] = self.tiles[y * w + x];
            }
        }
        self.tiles = rotated;
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotation_count = (self.rotation_count + 1) % 4;
    }
}
