//! State tile map panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use election::{LoadStatus, LoadedElection, MarginScale, Party, TileGrid};

use super::types::TileChartModel;
use crate::drawing;

/// Width-to-height ratio of one tile; tiles are wider than tall.
const TILE_ASPECT: f32 = 1.3;

pub fn rebuild_model(
    loaded: Res<LoadedElection>,
    grid: Res<TileGrid>,
    scale: Res<MarginScale>,
    mut model: ResMut<TileChartModel>,
    mut status: ResMut<LoadStatus>,
) {
    if !loaded.is_changed() {
        return;
    }
    let Some(data) = &loaded.0 else {
        return;
    };
    match TileChartModel::build(data.year, &data.states, &grid, &scale) {
        Ok(built) => *model = built,
        Err(e) => {
            // Keep the previous tiles on screen; surface the lookup failure.
            warn!("tile map not updated for {}: {e}", data.year);
            status.error = Some(e.to_string());
        }
    }
}

pub fn tile_chart_panel(
    mut contexts: EguiContexts,
    model: Res<TileChartModel>,
    scale: Res<MarginScale>,
) {
    let ctx = contexts.ctx_mut();
    egui::CentralPanel::default().show(ctx, |ui| {
        match model.year {
            Some(year) => ui.strong(format!("State Results — {year}")),
            None => ui.strong("State Results"),
        };
        drawing::scale_legend(ui, &scale);
        ui.add_space(4.0);

        if model.tiles.is_empty() || model.cols == 0 || model.rows == 0 {
            ui.small("The state tile map appears here once a year is loaded.");
            return;
        }

        // Fit the grid to the remaining panel space, keeping the tile aspect.
        let avail = ui.available_size();
        let tile_w = (avail.x / model.cols as f32)
            .min(avail.y * TILE_ASPECT / model.rows as f32);
        let tile_h = tile_w / TILE_ASPECT;

        let (area, response) = ui.allocate_exact_size(
            egui::vec2(
                tile_w * model.cols as f32,
                tile_h * model.rows as f32,
            ),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(area);

        for tile in &model.tiles {
            let rect = egui::Rect::from_min_size(
                egui::pos2(
                    area.min.x + tile.col as f32 * tile_w,
                    area.min.y + tile.row as f32 * tile_h,
                ),
                egui::vec2(tile_w - 1.0, tile_h - 1.0),
            );
            painter.rect_filled(rect, 2.0, drawing::color32(tile.fill));
            painter.text(
                rect.center() - egui::vec2(0.0, 6.0),
                egui::Align2::CENTER_CENTER,
                &tile.result.abbr,
                egui::FontId::proportional(11.0),
                egui::Color32::BLACK,
            );
            painter.text(
                rect.center() + egui::vec2(0.0, 7.0),
                egui::Align2::CENTER_CENTER,
                format!("{}", tile.result.electoral_votes),
                egui::FontId::proportional(10.0),
                egui::Color32::BLACK,
            );
        }

        if response.hovered() {
            if let Some(pos) = response.hover_pos() {
                let col = ((pos.x - area.min.x) / tile_w).floor() as i32;
                let row = ((pos.y - area.min.y) / tile_h).floor() as i32;
                if col >= 0 && row >= 0 {
                    if let Some(tile) = model.tile_at(col as u8, row as u8) {
                        show_tile_tooltip(ui.ctx(), tile);
                    }
                }
            }
        }
    });
}

fn show_tile_tooltip(ctx: &egui::Context, tile: &super::types::Tile) {
    let result = &tile.result;
    let winner = result.winner();
    drawing::hover_tooltip(ctx, "tile_chart_tooltip", |ui| {
        ui.label(
            egui::RichText::new(&result.state)
                .strong()
                .size(13.0)
                .color(drawing::party_color(winner)),
        );
        ui.label(
            egui::RichText::new(format!("Electoral Votes: {}", result.electoral_votes))
                .size(11.0)
                .color(egui::Color32::WHITE),
        );
        ui.separator();
        for party in [Party::Democrat, Party::Republican, Party::Independent] {
            let candidacy = result.candidacy(party);
            if candidacy.is_absent() {
                continue;
            }
            drawing::nominee_line(ui, party, &candidacy.nominee, candidacy.votes, candidacy.percent);
        }
    });
}
