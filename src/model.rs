use std::fmt;

use serde::Serialize;

use crate::error::SimulationError;

pub const PARTICIPANT_COUNT: usize = 10;
pub const TEAM_SIZE: usize = 5;

/// Identifier of one of the ten match participants. Ids 1-5 are the blue
/// side, 6-10 the red side. Construction goes through `TryFrom<u8>` so an
/// out-of-range id is rejected before it can reach the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ParticipantId(u8);

impl ParticipantId {
    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn team(self) -> Team {
        if self.0 <= TEAM_SIZE as u8 {
            Team::Blue
        } else {
            Team::Red
        }
    }

    pub fn all() -> impl Iterator<Item = ParticipantId> {
        (1..=PARTICIPANT_COUNT as u8).map(ParticipantId)
    }
}

impl TryFrom<u8> for ParticipantId {
    type Error = SimulationError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (1..=PARTICIPANT_COUNT as u8).contains(&id) {
            Ok(ParticipantId(id))
        } else {
            Err(SimulationError::InvalidParticipant { id })
        }
    }
}

impl From<ParticipantId> for u8 {
    fn from(participant: ParticipantId) -> Self {
        participant.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    pub fn participants(self) -> impl Iterator<Item = ParticipantId> {
        let ids = match self {
            Team::Blue => 1..=TEAM_SIZE as u8,
            Team::Red => (TEAM_SIZE as u8 + 1)..=PARTICIPANT_COUNT as u8,
        };
        ids.map(ParticipantId)
    }
}

/// One champion kill, already translated from whatever shape the match data
/// source delivered. `killer` is `None` for environmental deaths (towers,
/// executions), which carry no bounty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillEvent {
    pub timestamp_ms: u64,
    pub killer: Option<ParticipantId>,
    pub victim: ParticipantId,
    pub assisting: Vec<ParticipantId>,
    pub bounty: i64,
    pub shutdown_bounty: i64,
}

impl KillEvent {
    /// Total bounty gold the match data reports as paid for this kill.
    pub fn total_bounty(&self) -> i64 {
        self.bounty + self.shutdown_bounty
    }
}

/// One timestamped snapshot of match state: the kills that happened in this
/// interval, in order, plus every participant's cumulative gold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub timestamp_ms: u64,
    pub kills: Vec<KillEvent>,
    pub participant_gold: [i64; PARTICIPANT_COUNT],
}

#[cfg(test)]
mod tests {
    use super::{ParticipantId, Team, PARTICIPANT_COUNT};

    #[test]
    fn accepts_only_ids_between_one_and_ten() {
        for id in 1..=PARTICIPANT_COUNT as u8 {
            ParticipantId::try_from(id).expect("Expected in-range participant id to be accepted");
        }

        assert!(ParticipantId::try_from(0).is_err());
        assert!(ParticipantId::try_from(11).is_err());
    }

    #[test]
    fn splits_participants_into_blue_and_red_sides() {
        let blue: Vec<u8> = Team::Blue.participants().map(u8::from).collect();
        let red: Vec<u8> = Team::Red.participants().map(u8::from).collect();

        assert_eq!(blue, vec![1, 2, 3, 4, 5]);
        assert_eq!(red, vec![6, 7, 8, 9, 10]);

        for participant in Team::Blue.participants() {
            assert_eq!(participant.team(), Team::Blue);
        }
        for participant in Team::Red.participants() {
            assert_eq!(participant.team(), Team::Red);
        }
    }
}
