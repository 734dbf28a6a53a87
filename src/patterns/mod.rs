mod parse_rle;

pub use parse_rle::parse_rle;

use crate::{Grid, LifeError};

/// Rectangular block of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCells {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl PatternCells {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[x + y * self.width]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Built-in seed patterns selectable by number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// All cells dead.
    Empty,
    Glider,
    GosperGliderGun,
    /// Small methuselah that scatters into several still lifes.
    Scatter,
    /// Cup-shaped mass that explodes into oscillators.
    Cup,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Empty,
        Pattern::Glider,
        Pattern::GosperGliderGun,
        Pattern::Scatter,
        Pattern::Cup,
    ];

    /// `1..=4` pick a pattern, anything else means an empty board.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Pattern::Glider,
            2 => Pattern::GosperGliderGun,
            3 => Pattern::Scatter,
            4 => Pattern::Cup,
            _ => Pattern::Empty,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Pattern::Empty => 0,
            Pattern::Glider => 1,
            Pattern::GosperGliderGun => 2,
            Pattern::Scatter => 3,
            Pattern::Cup => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Empty => "Empty",
            Pattern::Glider => "Glider",
            Pattern::GosperGliderGun => "Gosper glider gun",
            Pattern::Scatter => "Scatter",
            Pattern::Cup => "Cup",
        }
    }

    fn rle(self) -> Option<&'static str> {
        match self {
            Pattern::Empty => None,
            Pattern::Glider => Some("x = 3, y = 3\nbo$2bo$3o!"),
            Pattern::GosperGliderGun => Some(
                "x = 36, y = 11\n\
                 $24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\
                 2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o$!",
            ),
            Pattern::Scatter => Some("x = 6, y = 6\no$o$2o$2bo$4b2o$4bo!"),
            Pattern::Cup => Some("x = 6, y = 10\n2b2o$2o2b2o$o4bo$o4bo$o4bo$o4bo$6o$6o$6o$6o!"),
        }
    }

    /// Cells of the pattern, `None` for [`Pattern::Empty`].
    pub fn cells(self) -> Result<Option<PatternCells>, LifeError> {
        self.rle().map(parse_rle).transpose()
    }
}

impl Grid {
    /// Writes the pattern centered on the board.
    ///
    /// Only the cells covered by the pattern are overwritten.
    pub fn apply_pattern(&mut self, pattern: &PatternCells) -> Result<(), LifeError> {
        let (width, height) = self.size();
        if pattern.width > width || pattern.height > height {
            return Err(LifeError::PatternTooLarge {
                pattern_width: pattern.width,
                pattern_height: pattern.height,
                width,
                height,
            });
        }
        let p_x = (width - pattern.width) / 2;
        let p_y = (height - pattern.height) / 2;
        for y in 0..pattern.height {
            for x in 0..pattern.width {
                self.set_cell(p_x + x, p_y + y, pattern.get(x, y))?;
            }
        }
        Ok(())
    }

    /// Seeds the board with a built-in pattern; [`Pattern::Empty`] clears it.
    pub fn reset(&mut self, pattern: Pattern) -> Result<(), LifeError> {
        log::info!("resetting board to pattern `{}`", pattern.name());
        match pattern.cells()? {
            Some(cells) => self.apply_pattern(&cells),
            None => {
                self.clear();
                Ok(())
            }
        }
    }
}
