use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod drawing;
pub mod electoral_vote;
pub mod popular_vote;
pub mod theme;
pub mod tile_chart;
pub mod year_selector;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<electoral_vote::ElectoralVoteModel>()
            .init_resource::<popular_vote::PopularVoteModel>()
            .init_resource::<tile_chart::TileChartModel>()
            .add_systems(Startup, theme::apply_dashboard_theme)
            .add_systems(
                Update,
                (
                    electoral_vote::rebuild_model,
                    popular_vote::rebuild_model,
                    tile_chart::rebuild_model,
                    // Panels shrink the remaining space in call order, so the
                    // vertical layout depends on this chain staying intact.
                    year_selector::year_selector_panel,
                    electoral_vote::electoral_vote_panel,
                    popular_vote::popular_vote_panel,
                    tile_chart::tile_chart_panel,
                )
                    .chain(),
            );
    }
}
