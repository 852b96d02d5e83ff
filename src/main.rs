use clap::Parser;
use eframe::egui;

use wholesale_catalog::app::CatalogApp;
use wholesale_catalog::config::ViewerConfig;

fn main() -> eframe::Result {
    env_logger::init();
    let config = ViewerConfig::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wholesale Product Catalog",
        options,
        Box::new(move |cc| {
            // Install image loaders so product pictures can be fetched by URL.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CatalogApp::new(&cc.egui_ctx, &config)))
        }),
    )
}
