//! View model for the state tile map.

use bevy::prelude::*;

use election::{DataError, MarginScale, Rgb, StateResult, TileGrid, INDEPENDENT_FILL};

/// One state tile: its grid slot, fill, and the full result for the
/// tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub col: u8,
    pub row: u8,
    pub fill: Rgb,
    pub result: StateResult,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TileChartModel {
    pub year: Option<u16>,
    pub tiles: Vec<Tile>,
    pub cols: u8,
    pub rows: u8,
}

impl TileChartModel {
    /// Build the tile set for a year. A state missing from the layout table
    /// fails the whole build so the previous render stays up, per the
    /// fail-before-drawing error policy.
    pub fn build(
        year: u16,
        states: &[StateResult],
        grid: &TileGrid,
        scale: &MarginScale,
    ) -> Result<Self, DataError> {
        let mut tiles = Vec::with_capacity(states.len());
        for record in states {
            let (col, row) = grid
                .slot(&record.abbr)
                .ok_or_else(|| DataError::MissingGridSlot {
                    abbr: record.abbr.clone(),
                })?;
            tiles.push(Tile {
                col,
                row,
                fill: record
                    .signed_margin()
                    .map(|m| scale.color_for(m))
                    .unwrap_or(INDEPENDENT_FILL),
                result: record.clone(),
            });
        }
        Ok(Self {
            year: Some(year),
            tiles,
            cols: grid.cols(),
            rows: grid.rows(),
        })
    }

    /// Tile occupying the given grid slot, for hover lookup.
    pub fn tile_at(&self, col: u8, row: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.col == col && t.row == row)
    }
}
