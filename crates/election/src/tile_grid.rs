//! Static state-tile layout for the grid map.
//!
//! Maps each state abbreviation to a (column, row) slot in the familiar
//! squished-US tile arrangement (Alaska top-left, Maine top-right, Hawaii
//! and Florida at the bottom). The table is an external asset as far as the
//! charts are concerned and is validated at construction: duplicate
//! abbreviations are a load-time error, not a silent overwrite.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::error::DataError;

/// `(abbreviation, column, row)` for all 50 states plus DC.
pub const US_TILE_TABLE: [(&str, u8, u8); 51] = [
    ("AL", 7, 6),
    ("AK", 0, 0),
    ("AZ", 2, 5),
    ("AR", 5, 5),
    ("CA", 1, 4),
    ("CO", 3, 4),
    ("CT", 10, 3),
    ("DE", 9, 5),
    ("FL", 9, 7),
    ("GA", 8, 6),
    ("HI", 1, 7),
    ("ID", 2, 2),
    ("IL", 6, 2),
    ("IN", 6, 3),
    ("IA", 5, 3),
    ("KS", 4, 5),
    ("KY", 6, 4),
    ("LA", 5, 6),
    ("ME", 11, 0),
    ("MD", 8, 3),
    ("MA", 11, 2),
    ("MI", 8, 2),
    ("MN", 5, 2),
    ("MS", 6, 6),
    ("MO", 5, 4),
    ("MT", 3, 2),
    ("NE", 4, 4),
    ("NV", 2, 3),
    ("NH", 11, 1),
    ("NJ", 9, 4),
    ("NM", 3, 5),
    ("NY", 9, 2),
    ("NC", 7, 5),
    ("ND", 4, 2),
    ("OH", 7, 3),
    ("OK", 4, 6),
    ("OR", 1, 3),
    ("PA", 9, 3),
    ("RI", 10, 2),
    ("SC", 8, 5),
    ("SD", 4, 3),
    ("TN", 6, 5),
    ("TX", 4, 7),
    ("UT", 2, 4),
    ("VT", 10, 1),
    ("VA", 8, 4),
    ("WA", 1, 2),
    ("WV", 7, 4),
    ("WI", 7, 2),
    ("WY", 3, 3),
    ("DC", 10, 4),
];

/// Validated abbreviation → (column, row) lookup.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileGrid {
    slots: HashMap<String, (u8, u8)>,
    cols: u8,
    rows: u8,
}

impl TileGrid {
    /// Build a grid from a layout table, rejecting duplicate keys.
    pub fn from_table(table: &[(&str, u8, u8)]) -> Result<Self, DataError> {
        let mut slots = HashMap::with_capacity(table.len());
        let mut cols = 0;
        let mut rows = 0;
        for (abbr, col, row) in table {
            if slots.insert(abbr.to_string(), (*col, *row)).is_some() {
                return Err(DataError::DuplicateGridKey {
                    abbr: abbr.to_string(),
                });
            }
            cols = cols.max(col + 1);
            rows = rows.max(row + 1);
        }
        Ok(Self { slots, cols, rows })
    }

    /// The standard US layout.
    pub fn standard() -> Result<Self, DataError> {
        Self::from_table(&US_TILE_TABLE)
    }

    pub fn slot(&self, abbr: &str) -> Option<(u8, u8)> {
        self.slots.get(abbr).copied()
    }

    /// Number of columns spanned by the layout.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of rows spanned by the layout.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grid_is_valid() {
        let grid = TileGrid::standard().unwrap();
        assert_eq!(grid.slot("AK"), Some((0, 0)));
        assert_eq!(grid.slot("ME"), Some((11, 0)));
        assert_eq!(grid.slot("DC"), Some((10, 4)));
        assert_eq!(grid.slot("PR"), None);
        assert_eq!(grid.cols(), 12);
        assert_eq!(grid.rows(), 8);
    }

    #[test]
    fn test_standard_grid_covers_51_entries() {
        let grid = TileGrid::standard().unwrap();
        assert_eq!(grid.slots.len(), 51);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let table = [("ME", 0, 11), ("ME", 11, 0)];
        let err = TileGrid::from_table(&table).unwrap_err();
        assert!(matches!(err, DataError::DuplicateGridKey { ref abbr } if abbr == "ME"));
    }

    #[test]
    fn test_no_two_states_share_a_slot() {
        let grid = TileGrid::standard().unwrap();
        let mut seen = std::collections::HashSet::new();
        for slot in grid.slots.values() {
            assert!(seen.insert(*slot), "slot {slot:?} used twice");
        }
    }
}
