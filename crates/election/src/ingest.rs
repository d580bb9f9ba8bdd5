//! CSV ingestion for election-year files and the year index.
//!
//! Rows are deserialized as raw strings and validated into typed records:
//! a non-numeric cell aborts the load with an error naming the state and
//! column rather than coercing to zero, since a silent zero would corrupt
//! classification and layout. Blank vote/percentage cells are the absent
//! candidacy (years without an independent line are common).

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dataset::{ElectionDataset, YearEntry};
use crate::error::DataError;
use crate::party::Party;
use crate::records::{Candidacy, StateResult};

/// One raw row of `election-results-<year>.csv`, all fields as written.
#[derive(Debug, Deserialize)]
struct RawResultRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Abbreviation")]
    abbreviation: String,
    #[serde(rename = "Total_EV")]
    total_ev: String,
    #[serde(rename = "D_Nominee")]
    d_nominee: String,
    #[serde(rename = "D_Votes")]
    d_votes: String,
    #[serde(rename = "D_Percentage")]
    d_percentage: String,
    #[serde(rename = "R_Nominee")]
    r_nominee: String,
    #[serde(rename = "R_Votes")]
    r_votes: String,
    #[serde(rename = "R_Percentage")]
    r_percentage: String,
    #[serde(rename = "I_Nominee")]
    i_nominee: String,
    #[serde(rename = "I_Votes")]
    i_votes: String,
    #[serde(rename = "I_Percentage")]
    i_percentage: String,
}

/// One raw row of `yearwise-winner.csv`.
#[derive(Debug, Deserialize)]
struct RawYearRow {
    #[serde(rename = "YEAR")]
    year: String,
    #[serde(rename = "PARTY")]
    party: String,
}

fn parse_count(state: &str, field: &'static str, raw: &str) -> Result<u64, DataError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| DataError::BadField {
        state: state.to_string(),
        field,
        value: raw.to_string(),
    })
}

fn parse_percent(state: &str, field: &'static str, raw: &str) -> Result<f64, DataError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| DataError::BadField {
        state: state.to_string(),
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(DataError::BadField {
            state: state.to_string(),
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

impl RawResultRow {
    fn validate(self) -> Result<StateResult, DataError> {
        let state = self.state.trim().to_string();
        // Total_EV is required: a state without electoral votes is malformed.
        let electoral_votes: u16 =
            self.total_ev
                .trim()
                .parse()
                .map_err(|_| DataError::BadField {
                    state: state.clone(),
                    field: "Total_EV",
                    value: self.total_ev.clone(),
                })?;

        Ok(StateResult {
            abbr: self.abbreviation.trim().to_string(),
            electoral_votes,
            democrat: Candidacy {
                nominee: self.d_nominee.trim().to_string(),
                votes: parse_count(&state, "D_Votes", &self.d_votes)?,
                percent: parse_percent(&state, "D_Percentage", &self.d_percentage)?,
            },
            republican: Candidacy {
                nominee: self.r_nominee.trim().to_string(),
                votes: parse_count(&state, "R_Votes", &self.r_votes)?,
                percent: parse_percent(&state, "R_Percentage", &self.r_percentage)?,
            },
            independent: Candidacy {
                nominee: self.i_nominee.trim().to_string(),
                votes: parse_count(&state, "I_Votes", &self.i_votes)?,
                percent: parse_percent(&state, "I_Percentage", &self.i_percentage)?,
            },
            state,
        })
    }
}

/// Parse an election-year file from any reader.
pub fn parse_results(reader: impl Read) -> Result<Vec<StateResult>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut states = Vec::new();
    for row in csv_reader.deserialize() {
        let raw: RawResultRow = row?;
        states.push(raw.validate()?);
    }
    Ok(states)
}

/// Parse the year index from any reader.
pub fn parse_year_index(reader: impl Read) -> Result<Vec<YearEntry>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut years = Vec::new();
    for row in csv_reader.deserialize() {
        let raw: RawYearRow = row?;
        let year: u16 = raw.year.trim().parse().map_err(|_| DataError::BadYear {
            value: raw.year.clone(),
        })?;
        let winner = Party::from_code(&raw.party).ok_or_else(|| DataError::BadParty {
            value: raw.party.clone(),
        })?;
        years.push(YearEntry { year, winner });
    }
    Ok(years)
}

/// File name holding one year's results, `election-results-<year>.csv`.
pub fn results_file_name(year: u16) -> String {
    format!("election-results-{year}.csv")
}

/// Path of the year index file inside the data directory.
pub fn year_index_path(dir: &Path) -> PathBuf {
    dir.join("yearwise-winner.csv")
}

/// Load one election year from the data directory.
pub fn load_year(dir: &Path, year: u16) -> Result<ElectionDataset, DataError> {
    let path = dir.join(results_file_name(year));
    let states = parse_results(File::open(path)?)?;
    Ok(ElectionDataset::new(year, states))
}

/// Load the year index from the data directory.
pub fn load_year_index(dir: &Path) -> Result<Vec<YearEntry>, DataError> {
    parse_year_index(File::open(year_index_path(dir))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "State,Abbreviation,Total_EV,D_Nominee,D_Votes,D_Percentage,R_Nominee,R_Votes,R_Percentage,I_Nominee,I_Votes,I_Percentage\n";

    fn csv_with(rows: &str) -> String {
        format!("{HEADER}{rows}")
    }

    #[test]
    fn test_parse_results_happy_path() {
        let input = csv_with(
            "Utah,UT,6,Barack Obama,251813,24.75,Mitt Romney,740600,72.79,,,\n\
             Vermont,VT,3,Barack Obama,199239,67.06,Mitt Romney,92698,31.2,,,\n",
        );
        let states = parse_results(input.as_bytes()).unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].abbr, "UT");
        assert_eq!(states[0].electoral_votes, 6);
        assert_eq!(states[0].republican.votes, 740600);
        assert!((states[0].republican.percent - 72.79).abs() < 1e-12);
        assert!(states[0].independent.is_absent());
        assert_eq!(states[1].winner(), Party::Democrat);
    }

    #[test]
    fn test_non_numeric_votes_fail_fast() {
        let input = csv_with("Utah,UT,6,A,xyz,24.75,B,740600,72.79,,,\n");
        let err = parse_results(input.as_bytes()).unwrap_err();
        match err {
            DataError::BadField { state, field, value } => {
                assert_eq!(state, "Utah");
                assert_eq!(field, "D_Votes");
                assert_eq!(value, "xyz");
            }
            other => panic!("expected BadField, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_total_ev_fails() {
        let input = csv_with("Utah,UT,,A,100,50.0,B,100,50.0,,,\n");
        let err = parse_results(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::BadField { field: "Total_EV", .. }));
    }

    #[test]
    fn test_negative_percentage_fails() {
        let input = csv_with("Utah,UT,6,A,100,-5.0,B,100,50.0,,,\n");
        let err = parse_results(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::BadField { field: "D_Percentage", .. }));
    }

    #[test]
    fn test_blank_cells_are_absent_candidacy() {
        let input = csv_with("Utah,UT,6,A,100,60.0,B,50,40.0, , , \n");
        let states = parse_results(input.as_bytes()).unwrap();
        assert!(states[0].independent.is_absent());
    }

    #[test]
    fn test_parse_year_index() {
        let input = "YEAR,PARTY\n2012,D\n2016,R\n";
        let years = parse_year_index(input.as_bytes()).unwrap();
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 2012);
        assert_eq!(years[0].winner, Party::Democrat);
        assert_eq!(years[1].winner, Party::Republican);
    }

    #[test]
    fn test_year_index_rejects_unknown_party() {
        let input = "YEAR,PARTY\n2012,Q\n";
        let err = parse_year_index(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::BadParty { .. }));
    }

    #[test]
    fn test_load_year_round_trip_through_disk() {
        let dir = std::path::PathBuf::from("/tmp/electoboard_ingest_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(results_file_name(2016)),
            csv_with("Ohio,OH,18,Hillary Clinton,2394164,43.56,Donald Trump,2841005,51.69,,,\n"),
        )
        .unwrap();

        let dataset = load_year(&dir, 2016).unwrap();
        assert_eq!(dataset.year, 2016);
        assert_eq!(dataset.states.len(), 1);
        assert_eq!(dataset.states[0].winner(), Party::Republican);

        let missing = load_year(&dir, 2020);
        assert!(matches!(missing, Err(DataError::Io(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
