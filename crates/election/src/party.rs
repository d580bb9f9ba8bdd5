//! Party identity and winner classification.
//!
//! A state's winner is the party with the highest vote percentage. Exact
//! ties break alphabetically by party code (D < I < R), which is the
//! declaration order of the enum, so the derived `Ord` is the tie-break.

use crate::records::StateResult;

/// One of the three parties tracked per state result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Party {
    Democrat,
    Independent,
    Republican,
}

impl Party {
    /// One-letter code used in the data files.
    pub fn code(self) -> &'static str {
        match self {
            Party::Democrat => "D",
            Party::Independent => "I",
            Party::Republican => "R",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Party::Democrat => "Democrat",
            Party::Independent => "Independent",
            Party::Republican => "Republican",
        }
    }

    /// Parse a one-letter party code.
    pub fn from_code(code: &str) -> Option<Party> {
        match code.trim() {
            "D" => Some(Party::Democrat),
            "I" => Some(Party::Independent),
            "R" => Some(Party::Republican),
            _ => None,
        }
    }

    /// All parties in tie-break (alphabetical code) order.
    pub const ALL: [Party; 3] = [Party::Democrat, Party::Independent, Party::Republican];

    /// Stacking order for the segmented bar charts:
    /// Independent on the left, Democrat in the middle, Republican on the right.
    pub const STACK_ORDER: [Party; 3] = [Party::Independent, Party::Democrat, Party::Republican];
}

/// The full record set partitioned by winning party.
///
/// Invariant: the three groups are disjoint and together cover every input
/// record exactly once. Each group is sorted by descending share of the
/// winning party, so the strongest performance leads its group.
#[derive(Debug, Clone, Default)]
pub struct PartyGroups {
    pub democrat: Vec<StateResult>,
    pub republican: Vec<StateResult>,
    pub independent: Vec<StateResult>,
}

impl PartyGroups {
    pub fn group(&self, party: Party) -> &[StateResult] {
        match party {
            Party::Democrat => &self.democrat,
            Party::Republican => &self.republican,
            Party::Independent => &self.independent,
        }
    }

    /// Total number of records across the three groups.
    pub fn len(&self) -> usize {
        self.democrat.len() + self.republican.len() + self.independent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records in bar-chart display order: Independent, then Democrat,
    /// then Republican, strongest performer first within each group.
    pub fn display_order(&self) -> impl Iterator<Item = &StateResult> {
        Party::STACK_ORDER
            .iter()
            .flat_map(move |p| self.group(*p).iter())
    }
}

/// Classify every record by its winning party and bucket it.
pub fn partition(states: &[StateResult]) -> PartyGroups {
    let mut groups = PartyGroups::default();
    for state in states {
        match state.winner() {
            Party::Democrat => groups.democrat.push(state.clone()),
            Party::Republican => groups.republican.push(state.clone()),
            Party::Independent => groups.independent.push(state.clone()),
        }
    }
    for party in Party::ALL {
        let group = match party {
            Party::Democrat => &mut groups.democrat,
            Party::Republican => &mut groups.republican,
            Party::Independent => &mut groups.independent,
        };
        group.sort_by(|a, b| b.share(party).total_cmp(&a.share(party)));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_support::state;

    #[test]
    fn test_code_round_trip() {
        for party in Party::ALL {
            assert_eq!(Party::from_code(party.code()), Some(party));
        }
        assert_eq!(Party::from_code("X"), None);
        assert_eq!(Party::from_code(" R "), Some(Party::Republican));
    }

    #[test]
    fn test_tie_break_is_alphabetical_by_code() {
        // Derived Ord on the enum is the documented D < I < R order.
        assert!(Party::Democrat < Party::Independent);
        assert!(Party::Independent < Party::Republican);
    }

    #[test]
    fn test_partition_is_disjoint_and_covering() {
        let states = vec![
            state("A", 10, 55.0, 45.0, 0.0),
            state("B", 20, 30.0, 70.0, 0.0),
            state("C", 5, 20.0, 30.0, 50.0),
            state("D", 8, 48.0, 47.0, 5.0),
        ];
        let groups = partition(&states);
        assert_eq!(groups.len(), states.len());
        assert_eq!(groups.republican.len(), 2);
        assert_eq!(groups.democrat.len(), 1);
        assert_eq!(groups.independent.len(), 1);

        // No abbreviation appears in two groups.
        let mut seen = std::collections::HashSet::new();
        for record in groups.display_order() {
            assert!(seen.insert(record.abbr.clone()), "{} bucketed twice", record.abbr);
        }
    }

    #[test]
    fn test_groups_sorted_strongest_first() {
        let states = vec![
            state("A", 10, 51.0, 49.0, 0.0),
            state("B", 10, 70.0, 30.0, 0.0),
            state("C", 10, 60.0, 40.0, 0.0),
        ];
        let groups = partition(&states);
        let order: Vec<&str> = groups.republican.iter().map(|s| s.abbr.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_display_order_is_independent_democrat_republican() {
        let states = vec![
            state("R1", 10, 60.0, 40.0, 0.0),
            state("D1", 10, 40.0, 60.0, 0.0),
            state("I1", 10, 20.0, 20.0, 60.0),
        ];
        let groups = partition(&states);
        let order: Vec<&str> = groups.display_order().map(|s| s.abbr.as_str()).collect();
        assert_eq!(order, vec!["I1", "D1", "R1"]);
    }

    #[test]
    fn test_exact_tie_goes_to_democrat_over_republican() {
        let states = vec![state("T", 10, 50.0, 50.0, 0.0)];
        let groups = partition(&states);
        assert_eq!(groups.democrat.len(), 1);
        assert!(groups.republican.is_empty());
    }
}
