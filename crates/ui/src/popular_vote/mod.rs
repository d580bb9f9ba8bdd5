//! Popular-vote bar: national vote totals as a three-segment stacked bar
//! (Independent, Democrat, Republican) with nominee and percentage labels
//! anchored at each party's segment and a 50% marker.

mod types;
mod ui_system;

pub use types::PopularVoteModel;
pub use ui_system::{popular_vote_panel, rebuild_model};
