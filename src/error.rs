use thiserror::Error;

use crate::model::ParticipantId;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("participant id {id} is outside the valid range 1..=10")]
    InvalidParticipant { id: u8 },
    #[error("champion kill event at {timestamp_ms}ms has no victim id")]
    MissingKillVictim { timestamp_ms: u64 },
    #[error("frame {frame_index} has no gold entry for participant {id}")]
    MissingParticipantGold { id: u8, frame_index: usize },
    #[error(
        "reported bounty {reported} on participant {victim} is unreachable from kill tier {tier} with leftover {leftover}"
    )]
    UnreachableBounty {
        victim: ParticipantId,
        reported: i64,
        tier: i32,
        leftover: i64,
    },
    #[error("malformed match timeline: {0}")]
    MalformedTimeline(#[from] serde_json::Error),
}
