//! View model for the popular-vote bar.

use bevy::prelude::*;

use election::{segments, NationalTotals, Party};

/// One party's slice of the national bar.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteSegment {
    pub party: Party,
    pub votes: u64,
    pub start: f32,
    pub width: f32,
}

/// Nominee name and vote share, anchored at the party's segment start.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLabel {
    pub party: Party,
    pub nominee: String,
    pub percent_text: String,
    pub anchor: f32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PopularVoteModel {
    pub year: Option<u16>,
    pub segments: Vec<VoteSegment>,
    pub labels: Vec<GroupLabel>,
    pub totals: NationalTotals,
}

impl PopularVoteModel {
    pub fn build(year: u16, totals: &NationalTotals) -> Self {
        let laid = segments::stack(
            Party::STACK_ORDER
                .iter()
                .map(|p| (*p, totals.total(*p).votes as f64)),
        );

        let vote_segments: Vec<VoteSegment> = laid
            .iter()
            .map(|seg| VoteSegment {
                party: seg.key,
                votes: totals.total(seg.key).votes,
                start: seg.start as f32,
                width: seg.width as f32,
            })
            .collect();

        let mut labels = Vec::new();
        for party in Party::STACK_ORDER {
            // An election with no independent votes gets no independent label.
            if totals.total(party).votes == 0 {
                continue;
            }
            if let Some(anchor) = segments::first_start(&laid, &party) {
                labels.push(GroupLabel {
                    party,
                    nominee: totals.total(party).nominee.clone(),
                    percent_text: format!("{:.2}%", totals.percent(party)),
                    anchor: anchor as f32,
                });
            }
        }

        Self {
            year: Some(year),
            segments: vote_segments,
            labels,
            totals: totals.clone(),
        }
    }
}
