use super::{Config, StepPacer};
use crate::{LifeError, Pattern, Session};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
    ViewportCommand,
};

pub struct App {
    pub(super) session: Session,       // Owns the board.
    pub(super) is_paused: bool,        // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,      // Do one step and pause.
    pub(super) max_rate: f64,          // Generations per second while running.
    pub(super) texture: TextureHandle, // Texture handle of the board.
    pub(super) pacer: StepPacer,       // Schedules automatic generations.
    pub(super) last_painted: Option<(i32, i32)>, // Cell last flipped by the current drag.
    pub(super) last_error: Option<LifeError>,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        log::info!("creating base texture");
        let texture = ctx.load_texture(
            "Game of Life board",
            ColorImage::default(),
            TextureOptions::NEAREST,
        );

        log::info!("creating board");
        let mut app = Self {
            session: Session::new(),
            is_paused: true,
            do_one_step: false,
            max_rate: Config::STEPS_PER_SECOND,
            texture,
            pacer: StepPacer::default(),
            last_painted: None,
            last_error: None,
        };
        let result = app
            .session
            .initialize(Config::GRID_WIDTH, Config::GRID_HEIGHT)
            .and_then(|()| app.session.reset(Config::INITIAL_PATTERN));
        app.report(result);
        app
    }

    /// Logs a failed board operation and keeps it for the status line.
    pub(super) fn report(&mut self, result: Result<(), LifeError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::warn!("{}", e);
                self.last_error = Some(e);
            }
        }
    }

    pub(super) fn reset_pattern(&mut self, pattern: Pattern) {
        self.is_paused = true;
        let result = self.session.reset(pattern.index());
        self.report(result);
    }

    pub(super) fn clear(&mut self) {
        self.reset_pattern(Pattern::Empty);
    }

    pub(super) fn randomize(&mut self) {
        self.is_paused = true;
        let result = self.session.randomize(None, Config::RANDOM_FILL_RATE);
        self.report(result);
    }

    /// Flips the cell under the pointer, given in pixels relative to the board's corner.
    ///
    /// A cell is flipped once per drag even if the pointer stays on it for many frames.
    pub(super) fn paint_at(&mut self, px: f32, py: f32) {
        let size = self.session.grid().map(|grid| grid.size());
        let (width, height) = match size {
            Ok(size) => size,
            Err(e) => return self.report(Err(e)),
        };
        let Some(cell) = pointer_to_cell(px, py, width, height) else {
            return;
        };
        if self.last_painted == Some(cell) {
            return;
        }
        self.last_painted = Some(cell);
        let (x, y) = cell;
        let result = self
            .session
            .get_cell(x, y)
            .and_then(|alive| self.session.set_cell(x, y, !alive));
        self.report(result);
    }

    fn update_engine(&mut self, ctx: &Context) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step {
            if let Some(wait) = self.pacer.wait_time(self.max_rate) {
                ctx.request_repaint_after(wait);
                return;
            }
        }
        let result = self.session.tick();
        self.report(result);
        self.pacer.record_step();
        self.do_one_step = false;
        ctx.request_repaint();
    }

    fn handle_input(&mut self, ctx: &Context) {
        let quit = ctx.input(|input| {
            if input.key_pressed(Key::Space) || input.key_pressed(Key::N) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) {
                self.is_paused = !self.is_paused;
                self.pacer.restart();
            }
            input.key_pressed(Key::Q)
        });
        if quit {
            log::info!("quitting");
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }
        let keys = [
            (Key::Num0, Pattern::Empty),
            (Key::C, Pattern::Empty),
            (Key::Num1, Pattern::Glider),
            (Key::Num2, Pattern::GosperGliderGun),
            (Key::Num3, Pattern::Scatter),
            (Key::Num4, Pattern::Cup),
        ];
        for (key, pattern) in keys {
            if ctx.input(|input| input.key_pressed(key)) {
                self.reset_pattern(pattern);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.handle_input(ctx);
                self.update_engine(ctx);
                self.draw(ui);
            });
    }
}

/// Maps a pointer position in pixels, relative to the board's corner, to a cell.
///
/// Positions on or past the far edge of the board map to no cell.
pub(super) fn pointer_to_cell(
    px: f32,
    py: f32,
    width: usize,
    height: usize,
) -> Option<(i32, i32)> {
    if !(px >= 0. && py >= 0.) {
        return None;
    }
    let (x, y) = ((px / Config::SCALE) as usize, (py / Config::SCALE) as usize);
    if x >= width || y >= height {
        return None;
    }
    Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}
