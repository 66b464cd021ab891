// Desktop entry point for the registration wizard
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod state_manager;
mod ui;

use registration::RegistrationConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RegistrationConfig::load();
    log::info!("Using registration backend at {}", config.api.base_url);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([560.0, 480.0])
            .with_title("Create Your Account"),
        ..Default::default()
    };

    eframe::run_native(
        "Registration",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::RegistrationApp::new(cc, &config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start desktop UI: {}", e))
}
