use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::app::CatalogApp;
use crate::color::ColorMap;
use crate::data::model::ProductRecord;
use crate::i18n::Language;

const IMAGE_SIZE: f32 = 120.0;

// ---------------------------------------------------------------------------
// Product list (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered products, or the loading / empty state.
pub fn product_list(ui: &mut Ui, app: &mut CatalogApp) {
    let lang = app.language;

    if app.state.is_loading() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(lang.tr("Loading product catalog..."));
        });
        return;
    }

    if app.state.visible_indices().is_empty() {
        if empty_state(ui, lang, app.state.status_message.is_some()) {
            app.state.clear_filters();
        }
        return;
    }

    let state = &app.state;
    let colors = &app.color_map;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for record in state.filtered_records() {
                product_card(ui, record, colors, lang);
                ui.add_space(6.0);
            }
        });
}

/// Returns true when "Clear All Filters" was clicked.
fn empty_state(ui: &mut Ui, lang: Language, load_failed: bool) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        if load_failed {
            ui.label(RichText::new(lang.tr("The catalog could not be loaded.")).color(Color32::RED));
        }
        ui.heading(lang.tr("No products match your search"));
        ui.label(lang.tr("Try adjusting your filters or search term"));
        ui.add_space(8.0);
        clicked = ui.button(lang.tr("Clear All Filters")).clicked();
    });
    clicked
}

fn product_card(ui: &mut Ui, record: &ProductRecord, colors: &ColorMap, lang: Language) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui: &mut Ui| {
            if record.picture_url.is_empty() {
                ui.add_sized(
                    [IMAGE_SIZE, IMAGE_SIZE],
                    egui::Label::new(RichText::new(lang.tr("No image available")).weak()),
                );
            } else {
                ui.add(
                    egui::Image::new(record.picture_url.as_str())
                        .max_width(IMAGE_SIZE)
                        .max_height(IMAGE_SIZE),
                );
            }

            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(&record.name).strong().size(16.0));

                ui.horizontal_wrapped(|ui: &mut Ui| {
                    if !record.category.is_empty() {
                        ui.label(
                            RichText::new(lang.tr(&record.category))
                                .color(Color32::BLACK)
                                .background_color(colors.color_for(&record.category)),
                        );
                    }
                    if !record.target_customer.is_empty() {
                        ui.label(
                            RichText::new(lang.tr(&record.target_customer))
                                .color(Color32::WHITE)
                                .background_color(Color32::DARK_GRAY),
                        );
                    }
                });

                if record.description.is_empty() {
                    ui.label(RichText::new(lang.tr("No description available")).italics());
                } else {
                    ui.label(record.description.as_str());
                }

                ui.separator();
                for (label, value) in [
                    ("Code", &record.code),
                    ("Size", &record.size),
                    ("Aging", &record.stagionatura),
                    ("Expires", &record.expiring_date),
                ] {
                    if !value.is_empty() {
                        ui.label(format!("{}: {value}", lang.tr(label)));
                    }
                }

                ui.label(RichText::new(format!("€{}", record.price)).strong().size(18.0));
            });
        });
    });
}
