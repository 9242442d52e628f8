//! Runline GUI
//!
//! A graphical interface for playing the run-scoring board game against the AI.

use log::info;
use runline::ui::RunlineApp;

fn main() -> Result<(), eframe::Error> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("starting runline");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Runline"),
        ..Default::default()
    };

    eframe::run_native(
        "Runline",
        options,
        Box::new(|cc| Ok(Box::new(RunlineApp::new(cc)))),
    )
}
