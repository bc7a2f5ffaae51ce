use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::CashCounterApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Cash Counter egui application");

    // Phone-proportioned window: the layout is a single narrow column.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([400.0, 600.0])
            .with_title("SWEET HUT Cash Counter")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "SWEET HUT Cash Counter",
        options,
        Box::new(|_cc| match CashCounterApp::new() {
            Ok(app) => {
                info!("Successfully initialized Cash Counter app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
