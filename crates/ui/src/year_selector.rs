//! Year selector strip: one circle per election year, colored by the
//! party that won it, joined by a dashed line. Clicking a circle requests
//! that year's dataset; the strip also carries the loading spinner and any
//! load error.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use election::{LoadPhase, LoadStatus, YearIndex, YearSelected};

use crate::drawing;

/// Fixed panel height for the selector strip.
const PANEL_HEIGHT: f32 = 100.0;
/// Horizontal distance between year circles.
const SPACING: f32 = 50.0;
/// Left inset before the first circle.
const INSET: f32 = 30.0;
/// Circle radius.
const RADIUS: f32 = 9.0;

/// X coordinate of the i-th year circle inside the strip.
fn circle_x(index: usize) -> f32 {
    INSET + index as f32 * SPACING
}

pub fn year_selector_panel(
    mut contexts: EguiContexts,
    index: Res<YearIndex>,
    status: Res<LoadStatus>,
    phase: Res<State<LoadPhase>>,
    mut selections: EventWriter<YearSelected>,
) {
    let ctx = contexts.ctx_mut();
    egui::TopBottomPanel::top("year_selector_panel")
        .exact_height(PANEL_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Election Years");
                if *phase.get() == LoadPhase::Loading {
                    ui.spinner();
                    if let Some(year) = status.selected {
                        ui.small(format!("loading {year}…"));
                    }
                }
                if let Some(error) = &status.error {
                    ui.colored_label(egui::Color32::from_rgb(230, 80, 80), error);
                }
            });

            if index.0.is_empty() {
                ui.small("No year index loaded.");
                return;
            }

            egui::ScrollArea::horizontal().show(ui, |ui| {
                let strip_width = circle_x(index.0.len()) + INSET;
                let (strip, _) = ui.allocate_exact_size(
                    egui::vec2(strip_width.max(ui.available_width()), 60.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(strip);
                let cy = strip.min.y + 24.0;

                // Dashed line joining consecutive circles.
                for i in 1..index.0.len() {
                    let from = egui::pos2(strip.min.x + circle_x(i - 1) + RADIUS + 3.0, cy);
                    let to = egui::pos2(strip.min.x + circle_x(i) - RADIUS - 3.0, cy);
                    painter.extend(egui::Shape::dashed_line(
                        &[from, to],
                        egui::Stroke::new(1.0, egui::Color32::GRAY),
                        4.0,
                        4.0,
                    ));
                }

                for (i, entry) in index.0.iter().enumerate() {
                    let center = egui::pos2(strip.min.x + circle_x(i), cy);
                    let hit = egui::Rect::from_center_size(
                        center,
                        egui::vec2(RADIUS * 2.0 + 6.0, RADIUS * 2.0 + 6.0),
                    );
                    let response =
                        ui.interact(hit, ui.id().with(("year_circle", i)), egui::Sense::click());

                    painter.circle_filled(center, RADIUS, drawing::party_color(entry.winner));
                    if status.selected == Some(entry.year) {
                        painter.circle_stroke(
                            center,
                            RADIUS + 2.0,
                            egui::Stroke::new(2.0, egui::Color32::WHITE),
                        );
                    } else if response.hovered() {
                        painter.circle_stroke(
                            center,
                            RADIUS + 2.0,
                            egui::Stroke::new(1.0, egui::Color32::LIGHT_GRAY),
                        );
                    }

                    painter.text(
                        center + egui::vec2(0.0, RADIUS + 14.0),
                        egui::Align2::CENTER_CENTER,
                        format!("{}", entry.year),
                        egui::FontId::proportional(11.0),
                        egui::Color32::LIGHT_GRAY,
                    );

                    if response.clicked() {
                        selections.send(YearSelected(entry.year));
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use election::Party;

    #[test]
    fn test_circles_are_evenly_spaced() {
        assert_eq!(circle_x(0), INSET);
        for i in 1..10 {
            assert_eq!(circle_x(i) - circle_x(i - 1), SPACING);
        }
    }

    #[test]
    fn test_party_hue_distinguishes_winners() {
        // Adjacent years with different winners must not share a circle color.
        assert_ne!(
            drawing::party_color(Party::Democrat),
            drawing::party_color(Party::Republican)
        );
        assert_ne!(
            drawing::party_color(Party::Republican),
            drawing::party_color(Party::Independent)
        );
    }
}
