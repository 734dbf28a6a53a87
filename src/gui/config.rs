use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const GRID_WIDTH: usize = 40;
    pub const GRID_HEIGHT: usize = 30;
    /// Screen pixels per cell side.
    pub const SCALE: f32 = 20.;
    pub const CELL_ON: Color32 = Color32::from_rgb(0xff, 0, 0);
    pub const CELL_OFF: Color32 = Color32::BLACK;

    pub const INITIAL_PATTERN: usize = 1;
    pub const RANDOM_FILL_RATE: f64 = 0.3;
    pub const STEPS_PER_SECOND: f64 = 10.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 20.;

    pub const WINDOW_WIDTH: f32 = Self::GRID_WIDTH as f32 * Self::SCALE
        + Self::CONTROL_PANEL_WIDTH
        + 4. * Self::FRAME_MARGIN;
    pub const WINDOW_HEIGHT: f32 = Self::GRID_HEIGHT as f32 * Self::SCALE + 2. * Self::FRAME_MARGIN;
}
