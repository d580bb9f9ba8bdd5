use bevy_egui::{egui, EguiContexts};

/// Dark theme for the dashboard panels.
pub fn apply_dashboard_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(28, 30, 38);
    let inactive = egui::Color32::from_rgb(46, 50, 60);
    let hover = egui::Color32::from_rgb(66, 74, 92);
    let active = egui::Color32::from_rgb(96, 148, 210);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(22, 24, 30);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(36, 38, 46);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    ctx.set_style(style);
}
