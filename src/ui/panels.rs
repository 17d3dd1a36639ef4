use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::color::MONTH_LABELS;
use crate::data::export;
use crate::state::{AppState, SUN_IMAGE_SOURCES, WINDOW_DOMAIN, YEAR_DOMAIN};

// ---------------------------------------------------------------------------
// Left side panel – image selector and chart controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Sun image selector ----
            ui.heading("Sun Imagery");
            let current = SUN_IMAGE_SOURCES[state.selected_image].label;
            egui::ComboBox::from_id_salt("image_source")
                .selected_text(current)
                .width(ui.available_width() * 0.9)
                .show_ui(ui, |ui: &mut Ui| {
                    for (idx, source) in SUN_IMAGE_SOURCES.iter().enumerate() {
                        if ui
                            .selectable_label(state.selected_image == idx, source.label)
                            .clicked()
                        {
                            state.selected_image = idx;
                        }
                    }
                });
            ui.add_space(4.0);
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add(
                    egui::Image::new(state.selected_image_url())
                        .max_width(ui.available_width() * 0.9)
                        .max_height(260.0),
                );
            });
            ui.separator();

            // ---- Activity chart controls ----
            ui.heading("Activity Chart");
            ui.label("Range of years displayed:");
            let mut smooth_changed = false;
            smooth_changed |= ui
                .add(Slider::new(&mut state.controls.year_lo, YEAR_DOMAIN).text("from"))
                .changed();
            smooth_changed |= ui
                .add(Slider::new(&mut state.controls.year_hi, YEAR_DOMAIN).text("to"))
                .changed();

            ui.label("Smoothing window (months):");
            smooth_changed |= ui
                .add(Slider::new(&mut state.controls.window, WINDOW_DOMAIN))
                .changed();

            if smooth_changed {
                state.recompute_smoothed();
            }
            ui.separator();

            // ---- Periodicity chart controls ----
            ui.heading("Periodicity Chart");
            let mut fold_changed = false;
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Cycle length (years):");
                fold_changed |= ui
                    .add(
                        egui::DragValue::new(&mut state.controls.cycle_length)
                            .speed(0.1)
                            .range(0.0..=100.0),
                    )
                    .changed();
            });

            ui.label("Range of months displayed:");
            fold_changed |= ui
                .add(month_slider(&mut state.controls.month_lo, "from"))
                .changed();
            fold_changed |= ui
                .add(month_slider(&mut state.controls.month_hi, "to"))
                .changed();

            if fold_changed {
                state.recompute_folded();
            }
        });
}

/// A 1–12 slider showing month names instead of numbers.
fn month_slider<'a>(value: &'a mut i32, text: &'a str) -> Slider<'a> {
    Slider::new(value, 1..=12)
        .text(text)
        .custom_formatter(|v, _| {
            let idx = v as usize;
            match idx {
                1..=12 => MONTH_LABELS[idx - 1].to_string(),
                _ => v.to_string(),
            }
        })
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            let has_series = !state.smoothed.is_empty();
            if ui
                .add_enabled(has_series, egui::Button::new("Export smoothed as CSV…"))
                .clicked()
            {
                export_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_series, egui::Button::new("Export smoothed as JSON…"))
                .clicked()
            {
                export_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations loaded, {} in view",
                ds.len(),
                state.smoothed.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open monthly sunspot data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations spanning {:?}",
                    dataset.len(),
                    dataset.year_span()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

fn export_dialog(state: &mut AppState, format: ExportFormat) {
    let (ext, name) = match format {
        ExportFormat::Csv => ("csv", "smoothed.csv"),
        ExportFormat::Json => ("json", "smoothed.json"),
    };
    let file = rfd::FileDialog::new()
        .set_title("Export smoothed series")
        .set_file_name(name)
        .add_filter(ext.to_uppercase(), &[ext])
        .save_file();

    if let Some(path) = file {
        let result = match format {
            ExportFormat::Csv => export::write_csv(&path, &state.smoothed),
            ExportFormat::Json => export::write_json(&path, &state.smoothed),
        };
        match result {
            Ok(()) => {
                log::info!("Exported {} points to {}", state.smoothed.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Export error: {e:#}"));
            }
        }
    }
}
