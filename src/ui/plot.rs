use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::app::CatalogApp;

// ---------------------------------------------------------------------------
// Price chart (bottom panel)
// ---------------------------------------------------------------------------

/// Bar chart of the visible products' prices, coloured by category.
/// Products without a numeric price are left out.
pub fn price_plot(ui: &mut Ui, app: &CatalogApp) {
    let lang = app.language;
    let colors = &app.color_map;

    let bars: Vec<Bar> = app
        .state
        .filtered_records()
        .filter_map(|rec| rec.price_amount().map(|price| (rec, price)))
        .enumerate()
        .map(|(i, (rec, price))| {
            Bar::new(i as f64, price)
                .name(&rec.name)
                .fill(colors.color_for(&rec.category))
        })
        .collect();

    Plot::new("price_plot")
        .y_axis_label(lang.tr("Price (€)"))
        .show_x(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.7));
        });
}
