use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::color::ColorMap;
use crate::config::ViewerConfig;
use crate::data::error::LoadError;
use crate::data::loader::{CatalogLoader, ResourceLocation, spawn_load};
use crate::data::model::ProductCatalog;
use crate::i18n::Language;
use crate::state::CatalogState;
use crate::ui::{cards, panels, plot};

type PendingLoad = Receiver<Result<ProductCatalog, LoadError>>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CatalogApp {
    pub state: CatalogState,
    pub language: Language,
    /// Category badge colours, rebuilt on every completed load.
    pub color_map: ColorMap,
    pub show_chart: bool,
    /// Last requested location, used by "Reload".
    pub location: Option<ResourceLocation>,
    pending: Option<PendingLoad>,
}

impl CatalogApp {
    /// Create the app and start loading the configured catalog.
    pub fn new(ctx: &egui::Context, config: &ViewerConfig) -> Self {
        let mut app = Self {
            state: CatalogState::default(),
            language: config.language(),
            color_map: ColorMap::default(),
            show_chart: false,
            location: None,
            pending: None,
        };
        match config.location() {
            Ok(location) => app.start_load(ctx, location),
            Err(e) => {
                log::error!("Invalid catalog location {}/{}: {e}", config.root, config.source);
                app.state.status_message = Some(format!("Error: invalid catalog location: {e}"));
            }
        }
        app
    }

    /// Start a background load. Ignored while another load is in flight.
    pub fn start_load(&mut self, ctx: &egui::Context, location: ResourceLocation) {
        if self.pending.is_some() {
            log::warn!("A catalog load is already running; ignoring request for {location}");
            return;
        }
        self.state.begin_load(location.to_string());
        let repaint = ctx.clone();
        self.pending = Some(spawn_load(
            CatalogLoader::standard(),
            location.clone(),
            move || repaint.request_repaint(),
        ));
        self.location = Some(location);
    }

    /// Pick up a finished load, if any.
    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                // Loader thread died without reporting (it panicked).
                self.pending = None;
                self.state.finish_load(Ok(ProductCatalog::default()));
                self.state.status_message = Some("Error: catalog loader stopped unexpectedly".into());
                return;
            }
        };
        self.pending = None;
        self.state.finish_load(result);
        self.color_map = ColorMap::new(self.state.category_facet());
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: menu bar and header ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, self);
        });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui, self.language);
        });

        // ---- Bottom panel: price chart (optional) ----
        if self.show_chart && !self.state.is_loading() {
            egui::TopBottomPanel::bottom("price_chart")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    plot::price_plot(ui, self);
                });
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, self);
            });

        // ---- Central panel: product cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            cards::product_list(ui, self);
        });
    }
}
