//! Shared drawing helpers for the chart panels: stacked-bar segments, the
//! 50% center marker, the quantile-scale legend strip, and the hover
//! tooltip frame.

use bevy_egui::egui;
use election::{MarginScale, Party, Rgb};

/// Pixel offset from the cursor to a hover tooltip.
const TOOLTIP_OFFSET: f32 = 16.0;

pub(crate) fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Flat party hue used for labels, year circles, and independent fills.
pub(crate) fn party_color(party: Party) -> egui::Color32 {
    match party {
        Party::Democrat => egui::Color32::from_rgb(0x00, 0x66, 0xCC),
        Party::Republican => egui::Color32::from_rgb(0xCC, 0x00, 0x00),
        Party::Independent => egui::Color32::from_rgb(0x00, 0x80, 0x00),
    }
}

/// Fill one stacked-bar segment given its fractional start and width.
pub(crate) fn fill_segment(
    painter: &egui::Painter,
    bar: egui::Rect,
    start: f32,
    width: f32,
    color: egui::Color32,
) {
    let rect = egui::Rect::from_min_size(
        egui::pos2(bar.min.x + start * bar.width(), bar.min.y),
        egui::vec2(width * bar.width(), bar.height()),
    );
    painter.rect_filled(rect, 0.0, color);
}

/// Thin vertical marker at the 50% point of a bar, with a note above it.
pub(crate) fn center_marker(
    painter: &egui::Painter,
    bar: egui::Rect,
    note: &str,
) {
    let x = bar.min.x + bar.width() / 2.0;
    painter.line_segment(
        [
            egui::pos2(x, bar.min.y - 4.0),
            egui::pos2(x, bar.max.y + 4.0),
        ],
        egui::Stroke::new(1.5, egui::Color32::WHITE),
    );
    painter.text(
        egui::pos2(x, bar.min.y - 12.0),
        egui::Align2::CENTER_CENTER,
        note,
        egui::FontId::proportional(11.0),
        egui::Color32::LIGHT_GRAY,
    );
}

/// Horizontal 12-cell legend for the shared margin scale, with threshold
/// values marked at the bin boundaries.
pub(crate) fn scale_legend(ui: &mut egui::Ui, scale: &MarginScale) {
    let colors = scale.colors();
    if colors.is_empty() {
        return;
    }

    let width = ui.available_width();
    let cell_w = width / colors.len() as f32 - 2.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 28.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    for (i, color) in colors.iter().enumerate() {
        let x = rect.min.x + i as f32 * (cell_w + 2.0);
        painter.rect_filled(
            egui::Rect::from_min_size(egui::pos2(x, rect.min.y), egui::vec2(cell_w, 12.0)),
            0.0,
            color32(*color),
        );
    }

    // Threshold labels sit at the boundaries between cells.
    for (i, threshold) in scale.thresholds().iter().enumerate() {
        let x = rect.min.x + (i + 1) as f32 * (cell_w + 2.0) - 1.0;
        painter.text(
            egui::pos2(x, rect.min.y + 20.0),
            egui::Align2::CENTER_CENTER,
            format!("{threshold:.0}"),
            egui::FontId::proportional(9.0),
            egui::Color32::GRAY,
        );
    }
}

/// One nominee line of a hover tooltip: "name: votes (pct%)" in the
/// party's hue. Absent candidacies are skipped by the callers.
pub(crate) fn nominee_line(
    ui: &mut egui::Ui,
    party: Party,
    nominee: &str,
    votes: u64,
    percent: f64,
) {
    let name = if nominee.is_empty() {
        party.label()
    } else {
        nominee
    };
    ui.label(
        egui::RichText::new(format!("{name}: {votes} ({percent:.1}%)"))
            .size(11.0)
            .color(party_color(party)),
    );
}

/// Show a tooltip near the pointer, in the popup frame style shared by all
/// chart hovers.
pub(crate) fn hover_tooltip(
    ctx: &egui::Context,
    id: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let Some(pointer) = ctx.pointer_hover_pos() else {
        return;
    };
    let pos = pointer + egui::vec2(TOOLTIP_OFFSET, TOOLTIP_OFFSET);

    egui::Area::new(egui::Id::new(id))
        .fixed_pos(pos)
        .interactable(false)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_premultiplied(24, 24, 28, 230))
                .show(ui, |ui| {
                    ui.set_max_width(240.0);
                    add_contents(ui);
                });
        });
}
