//! Electoral-vote bar panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use election::{LoadedElection, MarginScale};

use super::types::ElectoralVoteModel;
use crate::drawing;

/// Fixed panel height.
const PANEL_HEIGHT: f32 = 150.0;
/// Thickness of the bar itself.
const BAR_THICKNESS: f32 = 26.0;

/// Rebuild the view model whenever a new year lands.
pub fn rebuild_model(
    loaded: Res<LoadedElection>,
    scale: Res<MarginScale>,
    mut model: ResMut<ElectoralVoteModel>,
) {
    if !loaded.is_changed() {
        return;
    }
    let Some(data) = &loaded.0 else {
        return;
    };
    *model = ElectoralVoteModel::build(data.year, &data.states, &scale);
}

pub fn electoral_vote_panel(mut contexts: EguiContexts, model: Res<ElectoralVoteModel>) {
    let ctx = contexts.ctx_mut();
    egui::TopBottomPanel::top("electoral_vote_panel")
        .exact_height(PANEL_HEIGHT)
        .show(ctx, |ui| {
            match model.year {
                Some(year) => ui.strong(format!("Electoral Votes — {year}")),
                None => ui.strong("Electoral Votes"),
            };
            if model.segments.is_empty() {
                ui.small("Pick an election year to see the electoral-vote split.");
                return;
            }

            ui.add_space(18.0);

            let width = ui.available_width();
            let (bar, response) = ui.allocate_exact_size(
                egui::vec2(width, BAR_THICKNESS),
                egui::Sense::hover(),
            );
            // Labels above the bar need to paint outside the allocated rect.
            let painter = ui.painter().clone();

            for segment in &model.segments {
                drawing::fill_segment(
                    &painter,
                    bar,
                    segment.start,
                    segment.width,
                    drawing::color32(segment.fill),
                );
            }

            // One EV total per party group, anchored at the group start.
            for total in &model.totals {
                painter.text(
                    egui::pos2(bar.min.x + total.anchor * bar.width(), bar.min.y - 10.0),
                    egui::Align2::LEFT_CENTER,
                    format!("{}", total.electoral_votes),
                    egui::FontId::proportional(12.0),
                    drawing::party_color(total.party),
                );
            }

            drawing::center_marker(
                &painter,
                bar,
                &format!("Electoral Vote ({} needed to win)", model.majority),
            );

            if response.hovered() {
                if let Some(pos) = response.hover_pos() {
                    let fraction = (pos.x - bar.min.x) / bar.width();
                    if let Some(segment) = model.segment_at(fraction) {
                        drawing::hover_tooltip(ui.ctx(), "electoral_vote_tooltip", |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} ({})",
                                    segment.state, segment.abbr
                                ))
                                .strong()
                                .size(12.0)
                                .color(egui::Color32::WHITE),
                            );
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} — {} electoral votes",
                                    segment.winner.label(),
                                    segment.electoral_votes
                                ))
                                .size(11.0)
                                .color(drawing::party_color(segment.winner)),
                            );
                        });
                    }
                }
            }
        });
}
