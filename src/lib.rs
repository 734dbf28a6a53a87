mod error;
mod grid;
mod gui;
mod patterns;
mod session;

pub use error::LifeError;
pub use grid::{floor_mod, Grid};
pub use gui::{App, Config};
pub use patterns::{parse_rle, Pattern, PatternCells};
pub use session::Session;
