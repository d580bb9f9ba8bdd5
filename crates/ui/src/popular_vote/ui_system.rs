//! Popular-vote bar panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use election::{LoadedElection, Party};

use super::types::PopularVoteModel;
use crate::drawing;

const PANEL_HEIGHT: f32 = 200.0;
const BAR_THICKNESS: f32 = 30.0;

pub fn rebuild_model(loaded: Res<LoadedElection>, mut model: ResMut<PopularVoteModel>) {
    if !loaded.is_changed() {
        return;
    }
    let Some(data) = &loaded.0 else {
        return;
    };
    *model = PopularVoteModel::build(data.year, &data.totals);
}

pub fn popular_vote_panel(mut contexts: EguiContexts, model: Res<PopularVoteModel>) {
    let ctx = contexts.ctx_mut();
    egui::TopBottomPanel::top("popular_vote_panel")
        .exact_height(PANEL_HEIGHT)
        .show(ctx, |ui| {
            match model.year {
                Some(year) => ui.strong(format!("Popular Vote — {year}")),
                None => ui.strong("Popular Vote"),
            };
            if model.segments.is_empty() {
                ui.small("National vote shares appear here once a year is loaded.");
                return;
            }

            // Room for the nominee and percentage rows painted above the bar.
            ui.add_space(40.0);

            let width = ui.available_width();
            let (bar, response) = ui.allocate_exact_size(
                egui::vec2(width, BAR_THICKNESS),
                egui::Sense::hover(),
            );
            let painter = ui.painter().clone();

            for segment in &model.segments {
                drawing::fill_segment(
                    &painter,
                    bar,
                    segment.start,
                    segment.width,
                    drawing::party_color(segment.party),
                );
            }

            for label in &model.labels {
                let x = bar.min.x + label.anchor * bar.width();
                painter.text(
                    egui::pos2(x, bar.min.y - 30.0),
                    egui::Align2::LEFT_CENTER,
                    &label.nominee,
                    egui::FontId::proportional(12.0),
                    drawing::party_color(label.party),
                );
                painter.text(
                    egui::pos2(x, bar.min.y - 14.0),
                    egui::Align2::LEFT_CENTER,
                    &label.percent_text,
                    egui::FontId::proportional(12.0),
                    drawing::party_color(label.party),
                );
            }

            drawing::center_marker(&painter, bar, "Popular Vote: 50%");

            if response.hovered() {
                drawing::hover_tooltip(ui.ctx(), "popular_vote_tooltip", |ui| {
                    for party in [Party::Democrat, Party::Republican, Party::Independent] {
                        let total = model.totals.total(party);
                        if total.votes == 0 && total.nominee.is_empty() {
                            continue;
                        }
                        drawing::nominee_line(
                            ui,
                            party,
                            &total.nominee,
                            total.votes,
                            model.totals.percent(party),
                        );
                    }
                });
            }
        });
}
