//! State tile map: one tile per state at its slot in the squished-US grid,
//! filled from the shared winning-margin scale, with a hover tooltip giving
//! the full per-party result and a quantile legend underneath.

mod types;
#[cfg(test)]
mod tests;
mod ui_system;

pub use types::TileChartModel;
pub use ui_system::{rebuild_model, tile_chart_panel};
