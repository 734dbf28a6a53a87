mod step;
mod tests;

pub use step::floor_mod;

use crate::LifeError;

/// Double-buffered Game of Life board with edges stitched together.
///
/// Cell `(x, y)` lives at index `y * width + x` of both buffers. Only
/// `cells_curr` is observable; `cells_next` is scratch space for [`Grid::step`].
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Allocates a blank (all dead) `width x height` board.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let size = width
            .checked_mul(height)
            .filter(|&size| size != 0)
            .ok_or(LifeError::InvalidDimensions { width, height })?;
        log::debug!("allocating {}x{} grid", width, height);
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
        })
    }

    /// Creates a board with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height)?;
        grid.randomize(seed, fill_rate);
        Ok(grid)
    }

    /// Reallocates both buffers at the new size, discarding the previous state.
    pub fn reinitialize(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&alive| alive).count()
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        let i = self.index(x, y)?;
        Ok(self.cells_curr[i])
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        let i = self.index(x, y)?;
        self.cells_curr[i] = alive;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        let i = self.index(x, y)?;
        self.cells_curr[i] = !self.cells_curr[i];
        Ok(self.cells_curr[i])
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
    }

    /// Fills the board with cells alive with probability `fill_rate`.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    /// The only place where coordinates are turned into buffer indices.
    fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(LifeError::OutOfBounds {
                x: i64::try_from(x).unwrap_or(i64::MAX),
                y: i64::try_from(y).unwrap_or(i64::MAX),
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells_curr.chunks_exact(self.width) {
            for &alive in row {
                write!(f, "{}", if alive { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
