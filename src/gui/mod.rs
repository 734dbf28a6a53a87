mod app;
mod config;
mod draw;
mod pace;

pub use app::App;
pub use config::Config;
use pace::StepPacer;
