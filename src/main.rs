#![warn(clippy::all)]

use toroidal_life::{App, Config};

fn main() -> eframe::Result {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("creating window");
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Game of Life")
            .with_inner_size(vec2(Config::WINDOW_WIDTH, Config::WINDOW_HEIGHT))
            .with_min_inner_size(vec2(Config::WINDOW_WIDTH, Config::WINDOW_HEIGHT)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx)))),
    )
}
