use super::{App, Config};
use crate::Pattern;
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, Image, RichText, Sense, Slider, Stroke, TextureOptions,
    Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
            self.pacer.restart();
        }

        if ui
            .add_enabled(self.is_paused, Self::new_button("Next generation"))
            .clicked()
        {
            self.do_one_step = true;
            ui.ctx().request_repaint();
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Generations/s: "));
            ui.add(Slider::new(&mut self.max_rate, 1.0..=60.0).logarithmic(true));
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Clear")).clicked() {
                self.clear();
            }
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.randomize();
            }
        });
    }

    fn draw_pattern_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text("Patterns:"));
        for pattern in Pattern::ALL {
            if pattern == Pattern::Empty {
                continue;
            }
            let text = format!("{}: {}", pattern.index(), pattern.name());
            if ui.add(Self::new_button(&text)).clicked() {
                self.reset_pattern(pattern);
            }
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.session.generation()
        )));
        if let Ok(grid) = self.session.grid() {
            ui.label(Self::new_text(&format!(
                "Population: {}",
                grid.population()
            )));
        }
        if !self.is_paused {
            ui.label(Self::new_text(&format!(
                "Rate: {:3} gen/s",
                self.pacer.rate().round() as u32
            )));
        }
        if let Some(e) = &self.last_error {
            ui.label(Self::new_text(&e.to_string()));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_pattern_controls(ui);
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_stats(ui);
                });
            });
        });
    }

    /// Uploads the current generation into the texture and shows it.
    fn draw_board(&mut self, ui: &mut Ui) {
        let Ok(grid) = self.session.grid() else {
            return;
        };
        let (w, h) = grid.size();
        let ci = ColorImage {
            size: [w, h],
            pixels: grid
                .cells()
                .iter()
                .map(|&alive| {
                    if alive {
                        Config::CELL_ON
                    } else {
                        Config::CELL_OFF
                    }
                })
                .collect(),
        };
        self.texture.set(ci, TextureOptions::NEAREST);

        let size = Vec2::new(w as f32, h as f32) * Config::SCALE;
        let source = SizedTexture::new(self.texture.id(), size);
        let image = Image::from_texture(source)
            .fit_to_exact_size(size)
            .sense(Sense::click_and_drag());
        let response = ui.add(image);
        if response.clicked() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = pos - response.rect.left_top();
                self.paint_at(p.x, p.y);
                ui.ctx().request_repaint();
            }
        } else {
            self.last_painted = None;
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.draw_controls(ui);
            ui.add_space(Config::FRAME_MARGIN);
            self.draw_board(ui);
        });
    }
}
