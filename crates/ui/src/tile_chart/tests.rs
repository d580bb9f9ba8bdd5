//! Unit tests for the tile map model.

use election::{Candidacy, DataError, MarginScale, StateResult, TileGrid, INDEPENDENT_FILL};

use super::types::TileChartModel;

fn state(abbr: &str, ev: u16, r: f64, d: f64, i: f64) -> StateResult {
    StateResult {
        state: format!("State {abbr}"),
        abbr: abbr.to_string(),
        electoral_votes: ev,
        republican: Candidacy {
            nominee: "R Candidate".to_string(),
            votes: (r * 1000.0) as u64,
            percent: r,
        },
        democrat: Candidacy {
            nominee: "D Candidate".to_string(),
            votes: (d * 1000.0) as u64,
            percent: d,
        },
        independent: Candidacy {
            votes: (i * 1000.0) as u64,
            percent: i,
            ..Default::default()
        },
    }
}

#[test]
fn test_tiles_land_on_their_grid_slots() {
    let grid = TileGrid::standard().unwrap();
    let states = vec![state("AK", 3, 52.0, 41.0, 0.0), state("ME", 4, 45.0, 48.0, 0.0)];
    let model = TileChartModel::build(2016, &states, &grid, &MarginScale::shared()).unwrap();

    assert_eq!(model.cols, 12);
    assert_eq!(model.rows, 8);
    let alaska = model.tile_at(0, 0).unwrap();
    assert_eq!(alaska.result.abbr, "AK");
    let maine = model.tile_at(11, 0).unwrap();
    assert_eq!(maine.result.abbr, "ME");
}

#[test]
fn test_fill_is_signed_margin_color() {
    let grid = TileGrid::standard().unwrap();
    let scale = MarginScale::shared();
    let states = vec![state("AK", 3, 52.0, 41.0, 0.0), state("ME", 4, 45.0, 48.0, 0.0)];
    let model = TileChartModel::build(2016, &states, &grid, &scale).unwrap();

    // Republican Alaska: positive margin. Democrat Maine: negated margin.
    assert_eq!(model.tile_at(0, 0).unwrap().fill, scale.color_for(52.0));
    assert_eq!(model.tile_at(11, 0).unwrap().fill, scale.color_for(-48.0));
}

#[test]
fn test_independent_winner_is_green() {
    let grid = TileGrid::standard().unwrap();
    let states = vec![state("VT", 3, 20.0, 30.0, 50.0)];
    let model = TileChartModel::build(1992, &states, &grid, &MarginScale::shared()).unwrap();
    assert_eq!(model.tiles[0].fill, INDEPENDENT_FILL);
}

#[test]
fn test_unknown_abbreviation_fails_the_build() {
    let grid = TileGrid::standard().unwrap();
    let states = vec![state("ZZ", 3, 52.0, 41.0, 0.0)];
    let err = TileChartModel::build(2016, &states, &grid, &MarginScale::shared()).unwrap_err();
    assert!(matches!(err, DataError::MissingGridSlot { ref abbr } if abbr == "ZZ"));
}

#[test]
fn test_empty_slot_has_no_tile() {
    let grid = TileGrid::standard().unwrap();
    let states = vec![state("AK", 3, 52.0, 41.0, 0.0)];
    let model = TileChartModel::build(2016, &states, &grid, &MarginScale::shared()).unwrap();
    assert!(model.tile_at(5, 5).is_none());
}
