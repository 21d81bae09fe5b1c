//! Reconstructs the evolving kill bounty on each of a match's ten
//! participants, plus the team gold difference, from an ordered sequence of
//! timeline frames. Fetching and rendering live outside this crate; the
//! input here is already-decoded frame data and the output is plain series.

pub mod bounty;
pub mod error;
pub mod kill;
pub mod model;
pub mod riot;
pub mod timeline;

pub use bounty::{assist_tier_to_bounty, tier_to_bounty, BountyLedger, SINGLE_KILL_CAP};
pub use error::{Result, SimulationError};
pub use kill::{apply_kill, KillPayout, TierCarryPolicy};
pub use model::{Frame, KillEvent, ParticipantId, Team, PARTICIPANT_COUNT, TEAM_SIZE};
pub use riot::{frames_from_json_str, frames_from_json_value, frames_from_timeline, MatchTimeline};
pub use timeline::{simulate, BountyTimeline, StackedTeamBounties};
