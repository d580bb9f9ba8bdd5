//! A loaded election year and its derived national totals.

use bevy::prelude::*;

use crate::party::Party;
use crate::records::StateResult;

/// One entry of the year index: an election year and the party that won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEntry {
    pub year: u16,
    pub winner: Party,
}

/// National popular-vote totals summed over every state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyTotal {
    pub nominee: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NationalTotals {
    pub democrat: PartyTotal,
    pub republican: PartyTotal,
    pub independent: PartyTotal,
}

impl NationalTotals {
    /// Sum votes per party; the nominee is taken from the first record that
    /// names one (a presidential nominee is the same in every state row).
    pub fn from_states(states: &[StateResult]) -> Self {
        let mut totals = NationalTotals::default();
        for state in states {
            for party in Party::ALL {
                let candidacy = state.candidacy(party);
                let total = totals.total_mut(party);
                total.votes += candidacy.votes;
                if total.nominee.is_empty() && !candidacy.nominee.is_empty() {
                    total.nominee = candidacy.nominee.clone();
                }
            }
        }
        totals
    }

    fn total_mut(&mut self, party: Party) -> &mut PartyTotal {
        match party {
            Party::Democrat => &mut self.democrat,
            Party::Republican => &mut self.republican,
            Party::Independent => &mut self.independent,
        }
    }

    pub fn total(&self, party: Party) -> &PartyTotal {
        match party {
            Party::Democrat => &self.democrat,
            Party::Republican => &self.republican,
            Party::Independent => &self.independent,
        }
    }

    /// Votes cast nationwide across all three parties.
    pub fn grand_total(&self) -> u64 {
        self.democrat.votes + self.republican.votes + self.independent.votes
    }

    /// A party's share of the national vote, in percent.
    pub fn percent(&self, party: Party) -> f64 {
        let grand = self.grand_total();
        if grand == 0 {
            return 0.0;
        }
        self.total(party).votes as f64 * 100.0 / grand as f64
    }
}

/// One fully parsed election year.
#[derive(Debug, Clone)]
pub struct ElectionDataset {
    pub year: u16,
    pub states: Vec<StateResult>,
    pub totals: NationalTotals,
}

impl ElectionDataset {
    pub fn new(year: u16, states: Vec<StateResult>) -> Self {
        let totals = NationalTotals::from_states(&states);
        Self {
            year,
            states,
            totals,
        }
    }
}

/// The currently rendered election year, if any. Replaced wholesale when a
/// load completes; views rebuild their models from change detection on this
/// resource.
#[derive(Resource, Default)]
pub struct LoadedElection(pub Option<ElectionDataset>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_support::state;

    #[test]
    fn test_national_totals_sum_votes() {
        let states = vec![
            state("A", 10, 55.0, 45.0, 0.0),
            state("B", 20, 30.0, 70.0, 0.0),
        ];
        let totals = NationalTotals::from_states(&states);
        assert_eq!(totals.republican.votes, 55_000 + 30_000);
        assert_eq!(totals.democrat.votes, 45_000 + 70_000);
        assert_eq!(totals.independent.votes, 0);
        assert_eq!(totals.grand_total(), 200_000);
    }

    #[test]
    fn test_percent_of_grand_total() {
        let states = vec![state("A", 10, 60.0, 40.0, 0.0)];
        let totals = NationalTotals::from_states(&states);
        assert!((totals.percent(Party::Republican) - 60.0).abs() < 1e-9);
        assert!((totals.percent(Party::Democrat) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_with_no_votes_is_zero() {
        let totals = NationalTotals::default();
        assert_eq!(totals.percent(Party::Democrat), 0.0);
    }

    #[test]
    fn test_nominee_from_first_record_naming_one() {
        let states = vec![
            state("A", 10, 55.0, 45.0, 0.0),
            state("B", 20, 30.0, 65.0, 5.0),
        ];
        let totals = NationalTotals::from_states(&states);
        assert_eq!(totals.republican.nominee, "R of A");
        // A's independent cell is blank; B supplies the nominee.
        assert_eq!(totals.independent.nominee, "I of B");
    }

    #[test]
    fn test_dataset_precomputes_totals() {
        let dataset = ElectionDataset::new(2016, vec![state("A", 10, 55.0, 45.0, 0.0)]);
        assert_eq!(dataset.totals.grand_total(), 100_000);
    }
}
