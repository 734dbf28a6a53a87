use crate::{Grid, LifeError, Pattern};

/// Host-facing handle: `initialize`, `set_cell`, `get_cell`, `tick`, `reset`.
///
/// Holds no grid until [`Session::initialize`] is called; every other call
/// fails with [`LifeError::NotInitialized`] before that. Coordinates are
/// signed, as they come from pointer input, and negative ones are reported
/// as [`LifeError::OutOfBounds`].
#[derive(Default)]
pub struct Session {
    grid: Option<Grid>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a blank board, replacing any previous one.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        log::info!("initializing {}x{} board", width, height);
        self.grid = Some(Grid::new(width, height)?);
        self.generation = 0;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Result<&Grid, LifeError> {
        self.grid.as_ref().ok_or(LifeError::NotInitialized)
    }

    fn grid_mut(&mut self) -> Result<&mut Grid, LifeError> {
        self.grid.as_mut().ok_or(LifeError::NotInitialized)
    }

    /// Generations computed since the last `initialize`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) -> Result<(), LifeError> {
        let grid = self.grid_mut()?;
        let (x, y) = to_grid_coords(grid, x, y)?;
        grid.set_cell(x, y, alive)
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<bool, LifeError> {
        let grid = self.grid()?;
        let (x, y) = to_grid_coords(grid, x, y)?;
        grid.get_cell(x, y)
    }

    /// Advances the board by one generation.
    pub fn tick(&mut self) -> Result<(), LifeError> {
        let grid = self.grid_mut()?;
        grid.step();
        let population = grid.population();
        self.generation += 1;
        log::debug!(
            "generation {}: {} live cells remaining",
            self.generation,
            population
        );
        Ok(())
    }

    /// Refills the whole board with random cells.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), LifeError> {
        let grid = self.grid_mut()?;
        grid.randomize(seed, fill_rate);
        log::debug!("{} live cells after randomizing", grid.population());
        self.generation = 0;
        Ok(())
    }

    /// Seeds the board with the pattern numbered `pattern` (see [`Pattern::from_index`]).
    pub fn reset(&mut self, pattern: usize) -> Result<(), LifeError> {
        let grid = self.grid_mut()?;
        grid.reset(Pattern::from_index(pattern))?;
        log::debug!("{} live cells after reset", grid.population());
        self.generation = 0;
        Ok(())
    }
}

fn to_grid_coords(grid: &Grid, x: i32, y: i32) -> Result<(usize, usize), LifeError> {
    match (usize::try_from(x), usize::try_from(y)) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err(LifeError::OutOfBounds {
            x: x.into(),
            y: y.into(),
            width: grid.width(),
            height: grid.height(),
        }),
    }
}
