//! Electoral-vote bar: every state as one slice of a single stacked bar,
//! weighted by electoral votes, ordered Independent → Democrat →
//! Republican and colored by the shared winning-margin scale. Party EV
//! totals sit above each group and a marker shows the majority point.

mod types;
mod ui_system;

pub use types::ElectoralVoteModel;
pub use ui_system::{electoral_vote_panel, rebuild_model};
