//! View model for the electoral-vote bar.

use bevy::prelude::*;

use election::{partition, segments, MarginScale, Party, Rgb, StateResult, INDEPENDENT_FILL};

/// One state's slice of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub abbr: String,
    pub state: String,
    pub winner: Party,
    pub electoral_votes: u16,
    pub fill: Rgb,
    /// Fractions of the full bar width.
    pub start: f32,
    pub width: f32,
}

/// Aggregate electoral votes for one party, anchored at the group's first
/// segment so a single label marks the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub party: Party,
    pub electoral_votes: u32,
    pub anchor: f32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ElectoralVoteModel {
    pub year: Option<u16>,
    pub segments: Vec<BarSegment>,
    pub totals: Vec<GroupTotal>,
    pub total_ev: u32,
    /// Electoral votes needed to win (simple majority of the total).
    pub majority: u32,
}

impl ElectoralVoteModel {
    pub fn build(year: u16, states: &[StateResult], scale: &MarginScale) -> Self {
        let groups = partition(states);
        let ordered: Vec<&StateResult> = groups.display_order().collect();
        let laid = segments::stack(
            ordered
                .iter()
                .map(|s| (s.winner(), s.electoral_votes as f64)),
        );

        let bar_segments = ordered
            .iter()
            .zip(&laid)
            .map(|(record, seg)| BarSegment {
                abbr: record.abbr.clone(),
                state: record.state.clone(),
                winner: seg.key,
                electoral_votes: record.electoral_votes,
                fill: record
                    .signed_margin()
                    .map(|m| scale.color_for(m))
                    .unwrap_or(INDEPENDENT_FILL),
                start: seg.start as f32,
                width: seg.width as f32,
            })
            .collect();

        let mut totals = Vec::new();
        for party in Party::STACK_ORDER {
            let group = groups.group(party);
            if group.is_empty() {
                continue;
            }
            if let Some(anchor) = segments::first_start(&laid, &party) {
                totals.push(GroupTotal {
                    party,
                    electoral_votes: group.iter().map(|s| s.electoral_votes as u32).sum(),
                    anchor: anchor as f32,
                });
            }
        }

        let total_ev: u32 = states.iter().map(|s| s.electoral_votes as u32).sum();
        Self {
            year: Some(year),
            segments: bar_segments,
            totals,
            total_ev,
            majority: if total_ev > 0 { total_ev / 2 + 1 } else { 0 },
        }
    }

    /// Segment under the given fraction of the bar width, for hover lookup.
    pub fn segment_at(&self, fraction: f32) -> Option<&BarSegment> {
        self.segments
            .iter()
            .find(|s| fraction >= s.start && fraction < s.start + s.width)
    }
}
