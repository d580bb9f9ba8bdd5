//! Election domain crate: records, classification, layout math, the shared
//! color scale, and the year-loading state machine. No rendering here; the
//! `ui` crate draws from the resources this crate owns.

use bevy::prelude::*;

pub mod color_scale;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod loader;
pub mod party;
pub mod records;
pub mod segments;
pub mod tile_grid;

pub use color_scale::{MarginScale, Rgb, INDEPENDENT_FILL};
pub use dataset::{ElectionDataset, LoadedElection, NationalTotals, YearEntry};
pub use error::DataError;
pub use loader::{DataPaths, LoadPhase, LoadStatus, YearIndex, YearSelected};
pub use party::{partition, Party, PartyGroups};
pub use records::{Candidacy, StateResult};
pub use tile_grid::TileGrid;

pub struct ElectionPlugin;

impl Plugin for ElectionPlugin {
    fn build(&self, app: &mut App) {
        let grid = match TileGrid::standard() {
            Ok(grid) => grid,
            Err(e) => {
                error!("tile layout table is invalid: {e}");
                TileGrid::default()
            }
        };

        app.insert_resource(MarginScale::shared())
            .insert_resource(grid)
            .init_resource::<DataPaths>()
            .init_resource::<LoadedElection>()
            .init_resource::<YearIndex>()
            .init_resource::<LoadStatus>()
            .init_resource::<loader::ActiveLoad>()
            .init_resource::<loader::LoadGeneration>()
            .init_state::<LoadPhase>()
            .add_event::<YearSelected>()
            .add_systems(Startup, loader::load_year_index)
            .add_systems(
                Update,
                (loader::begin_year_load, loader::poll_year_load).chain(),
            );
    }
}
