//! Hi-Lo desktop application using egui/eframe.
//!
//! This is the entry point for the desktop game.

use hilo_app::app::HiloApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.hilo-game.hilo";

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("application starting");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((750.0, 650.0))
            .with_min_inner_size((700.0, 600.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Number Guessing Master",
        options,
        Box::new(|cc| Ok(Box::new(HiloApp::new(cc)))),
    )?;

    log::info!("application stopped");
    Ok(())
}
