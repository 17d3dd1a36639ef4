use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::MonthColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – the two linked charts
// ---------------------------------------------------------------------------

/// Render both charts stacked in the central panel.
pub fn charts(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open the monthly sunspot file to begin  (File → Open…)");
        });
        return;
    }

    let half = (ui.available_height() - 40.0) / 2.0;

    ui.heading("Mean Sunspot Activity Over a Range of Years");
    activity_plot(ui, state, half);

    ui.heading(format!(
        "Sunspot Variability Over a Period of {} Years",
        state.controls.cycle_length
    ));
    phase_plot(ui, state, half);
}

/// Line chart: monthly mean plus its trailing moving average.
fn activity_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let raw: PlotPoints = state
        .smoothed
        .iter()
        .map(|p| [p.yr_fraction, p.monthly_mean])
        .collect();

    // The first window-1 points carry no average and are simply not drawn.
    let smoothed: PlotPoints = state
        .smoothed
        .iter()
        .filter_map(|p| p.rolling_mean.map(|mean| [p.yr_fraction, mean]))
        .collect();

    Plot::new("sunspot_activity")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Mean Number of Sunspots")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(raw)
                    .name("monthly mean")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.0),
            );
            plot_ui.line(
                Line::new(smoothed)
                    .name("smoothing average")
                    .color(Color32::from_rgb(235, 110, 40))
                    .width(2.0),
            );
        });
}

/// Scatter chart: the series folded onto one cycle, coloured by month.
fn phase_plot(ui: &mut Ui, state: &AppState, height: f32) {
    // One point series per month so the legend shows month names.
    let mut by_month: Vec<Vec<[f64; 2]>> = vec![Vec::new(); 12];
    for p in &state.folded {
        if (1..=12).contains(&p.month) {
            by_month[(p.month - 1) as usize].push([p.phase, p.monthly_mean]);
        }
    }

    Plot::new("sunspot_phase")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Years into cycle")
        .y_axis_label("Mean Number of Sunspots")
        .show(ui, |plot_ui| {
            for (idx, points) in by_month.into_iter().enumerate() {
                if points.is_empty() {
                    continue;
                }
                let month = idx as i32 + 1;
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(MonthColors::label_for(month))
                        .color(state.month_colors.color_for(month))
                        .radius(1.5),
                );
            }
        });
}
