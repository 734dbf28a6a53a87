use super::Grid;
use crate::LifeError;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Modulo that always lands in `[0, b)`, also for negative `a`.
pub fn floor_mod(a: isize, b: usize) -> usize {
    a.rem_euclid(b as isize) as usize
}

impl Grid {
    /// Number of live cells among the 8 toroidal neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        self.index(x, y)?;
        Ok(self.count_neibs(x, y))
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = floor_mod(x as isize + dx, self.width);
                let ny = floor_mod(y as isize + dy, self.height);
                self.cells_curr[nx + ny * self.width]
            })
            .count()
    }

    /// Advances the board by one generation.
    ///
    /// Every cell is computed from `cells_curr` into `cells_next`, then the
    /// buffers trade places, so all cells move from the same snapshot.
    pub fn step(&mut self) {
        self.cells_next.copy_from_slice(&self.cells_curr);
        for y in 0..self.height {
            for x in 0..self.width {
                let i = x + y * self.width;
                let neibs = self.count_neibs(x, y);
                let alive = self.cells_curr[i];
                if alive && !(neibs == 2 || neibs == 3) {
                    self.cells_next[i] = false;
                } else if !alive && neibs == 3 {
                    self.cells_next[i] = true;
                }
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }

    /// Advances the board by `n` generations.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}
