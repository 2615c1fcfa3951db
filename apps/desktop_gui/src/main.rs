use eframe::egui;

mod controller;
mod ui;

use ui::app::SETTINGS_STORAGE_KEY;
use ui::theme::PersistedSettings;
use ui::CitiesApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Visited Cities")
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Visited Cities",
        options,
        Box::new(|cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedSettings>(&text).ok())
            });
            Ok(Box::new(CitiesApp::new(persisted)))
        }),
    )
}
