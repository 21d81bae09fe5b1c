use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, SimulationError};
use crate::model::{Frame, KillEvent, ParticipantId, PARTICIPANT_COUNT};

pub const CHAMPION_KILL_EVENT: &str = "CHAMPION_KILL";

const ENVIRONMENT_KILLER_ID: u8 = 0;

/// Match-v5 timeline document as the retrieval layer hands it over. Only the
/// fields the simulation reads are modeled; everything else in the document
/// is ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchTimeline {
    pub info: TimelineInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    pub frames: Vec<TimelineFrame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    pub timestamp: u64,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    pub participant_frames: BTreeMap<String, ParticipantFrame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub timestamp: u64,
    pub killer_id: Option<u8>,
    pub victim_id: Option<u8>,
    #[serde(default)]
    pub assisting_participant_ids: Vec<u8>,
    #[serde(default)]
    pub bounty: i64,
    #[serde(default)]
    pub shutdown_bounty: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    pub total_gold: i64,
}

/// Decodes a raw timeline document and translates it into simulation frames.
pub fn frames_from_json_str(raw_json: &str) -> Result<Vec<Frame>> {
    let timeline = serde_json::from_str::<MatchTimeline>(raw_json)?;
    frames_from_timeline(&timeline)
}

/// Like [`frames_from_json_str`] for an already-parsed JSON value.
pub fn frames_from_json_value(value: serde_json::Value) -> Result<Vec<Frame>> {
    let timeline = serde_json::from_value::<MatchTimeline>(value)?;
    frames_from_timeline(&timeline)
}

/// Translates a decoded timeline into the neutral frame sequence: champion
/// kill events are kept in document order, every other event type is
/// dropped, and the per-participant gold map becomes a fixed array. Frames
/// missing a participant's gold entry fail fast.
pub fn frames_from_timeline(timeline: &MatchTimeline) -> Result<Vec<Frame>> {
    timeline
        .info
        .frames
        .iter()
        .enumerate()
        .map(|(frame_index, frame)| convert_frame(frame, frame_index))
        .collect()
}

fn convert_frame(frame: &TimelineFrame, frame_index: usize) -> Result<Frame> {
    let mut participant_gold = [0_i64; PARTICIPANT_COUNT];
    for id in 1..=PARTICIPANT_COUNT as u8 {
        let entry = frame
            .participant_frames
            .get(&id.to_string())
            .ok_or(SimulationError::MissingParticipantGold { id, frame_index })?;
        participant_gold[(id - 1) as usize] = entry.total_gold;
    }

    let kills = frame
        .events
        .iter()
        .filter(|event| event.event_type == CHAMPION_KILL_EVENT)
        .map(convert_kill_event)
        .collect::<Result<Vec<KillEvent>>>()?;

    Ok(Frame {
        timestamp_ms: frame.timestamp,
        kills,
        participant_gold,
    })
}

fn convert_kill_event(event: &TimelineEvent) -> Result<KillEvent> {
    let killer = match event.killer_id {
        None | Some(ENVIRONMENT_KILLER_ID) => None,
        Some(id) => Some(ParticipantId::try_from(id)?),
    };

    let Some(victim_id) = event.victim_id else {
        return Err(SimulationError::MissingKillVictim {
            timestamp_ms: event.timestamp,
        });
    };

    let assisting = event
        .assisting_participant_ids
        .iter()
        .map(|id| ParticipantId::try_from(*id))
        .collect::<Result<Vec<ParticipantId>>>()?;

    Ok(KillEvent {
        timestamp_ms: event.timestamp,
        killer,
        victim: ParticipantId::try_from(victim_id)?,
        assisting,
        bounty: event.bounty,
        shutdown_bounty: event.shutdown_bounty,
    })
}
