use chrono::Datelike;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::app::CatalogApp;
use crate::data::export::export_json_file;
use crate::data::loader::ResourceLocation;
use crate::i18n::Language;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, app: &mut CatalogApp) {
    let lang = app.language;

    ui.heading(lang.tr("Filters"));
    ui.separator();

    // Edit a copy; the state recomputes only when something changed.
    let mut criteria = app.state.criteria().clone();

    ui.strong(lang.tr("Search"));
    ui.add(
        egui::TextEdit::singleline(&mut criteria.search_term)
            .hint_text(lang.tr("Search products..."))
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    ui.strong(lang.tr("Category"));
    facet_combo(
        ui,
        "category",
        &mut criteria.category,
        app.state.category_facet(),
        lang.tr("All Categories"),
        lang,
    );
    ui.add_space(8.0);

    ui.strong(lang.tr("Customer type"));
    facet_combo(
        ui,
        "target_customer",
        &mut criteria.target_customer,
        app.state.customer_facet(),
        lang.tr("All Customer Types"),
        lang,
    );
    ui.add_space(12.0);

    if ui.button(lang.tr("Clear Filters")).clicked() {
        criteria = Default::default();
    }

    if criteria != *app.state.criteria() {
        app.state.set_filter_criteria(criteria);
    }
}

/// A combo box offering "all" plus every facet value. Labels are
/// localized, the selected value stays the raw data value.
fn facet_combo(
    ui: &mut Ui,
    id: &str,
    selected: &mut String,
    facet: &[String],
    all_label: &str,
    lang: Language,
) {
    let current = if selected.is_empty() {
        all_label.to_string()
    } else {
        lang.tr(selected).to_string()
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(selected, String::new(), all_label);
            for value in facet {
                ui.selectable_value(selected, value.clone(), lang.tr(value));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu bar and the catalog header.
pub fn top_bar(ui: &mut Ui, app: &mut CatalogApp) {
    let lang = app.language;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(lang.tr("File"), |ui: &mut Ui| {
            if ui.button(lang.tr("Open CSV…")).clicked() {
                open_file_dialog(ui.ctx(), app);
                ui.close_menu();
            }
            let can_reload = app.location.is_some() && !app.state.is_loading();
            if ui
                .add_enabled(can_reload, egui::Button::new(lang.tr("Reload")))
                .clicked()
            {
                if let Some(location) = app.location.clone() {
                    app.start_load(ui.ctx(), location);
                }
                ui.close_menu();
            }
            if ui.button(lang.tr("Export visible as JSON…")).clicked() {
                export_file_dialog(app);
                ui.close_menu();
            }
        });

        ui.separator();

        for option in [Language::English, Language::Italian] {
            if ui
                .selectable_label(app.language == option, option.label())
                .clicked()
            {
                app.language = option;
            }
        }

        ui.separator();

        if ui
            .selectable_label(app.show_chart, lang.tr("Price chart"))
            .clicked()
        {
            app.show_chart = !app.show_chart;
        }

        ui.separator();

        if let Some(source) = &app.state.source_label {
            ui.label(RichText::new(source).weak());
        }

        if !app.state.is_loading() {
            ui.label(format!(
                "{} ({}/{})",
                lang.tr("Products"),
                app.state.visible_indices().len(),
                app.state.all_records().len()
            ));
        }

        if let Some(msg) = &app.state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    ui.add_space(4.0);
    ui.heading(lang.tr("Wholesale Product Catalog"));
    ui.label(lang.tr("Browse our selection of premium Italian products"));
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui, lang: Language) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(format!(
            "© {} {}",
            chrono::Local::now().year(),
            lang.tr("Wholesale Abruzzo - Premium Italian Products")
        ));
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ctx: &egui::Context, app: &mut CatalogApp) {
    let file = rfd::FileDialog::new()
        .set_title("Open product catalog")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        app.start_load(ctx, ResourceLocation::File(path));
    }
}

pub fn export_file_dialog(app: &mut CatalogApp) {
    let file = rfd::FileDialog::new()
        .set_title("Export visible products")
        .add_filter("JSON", &["json"])
        .set_file_name("products.json")
        .save_file();

    let Some(path) = file else {
        return;
    };
    let visible: Vec<_> = app.state.filtered_records().collect();
    match export_json_file(&path, &visible) {
        Ok(()) => {
            log::info!("Exported {} products to {}", visible.len(), path.display());
            app.state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export products: {e:#}");
            app.state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
