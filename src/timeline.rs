use serde::Serialize;

use crate::bounty::BountyLedger;
use crate::error::Result;
use crate::kill::{apply_kill, KillPayout, TierCarryPolicy};
use crate::model::{Frame, Team, TEAM_SIZE};

/// The reconstructed series, one sample per frame. Blue-side bounty values
/// are negated so the two teams plot on opposite sides of the axis; the
/// gold difference is blue minus red.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyTimeline {
    pub gold_difference: Vec<i64>,
    pub blue_bounties: [Vec<i64>; TEAM_SIZE],
    pub red_bounties: [Vec<i64>; TEAM_SIZE],
    /// Per-kill payout log, in processing order. Informational only.
    pub payouts: Vec<KillPayout>,
}

impl BountyTimeline {
    fn with_frame_capacity(frame_count: usize) -> Self {
        Self {
            gold_difference: Vec::with_capacity(frame_count),
            blue_bounties: std::array::from_fn(|_| Vec::with_capacity(frame_count)),
            red_bounties: std::array::from_fn(|_| Vec::with_capacity(frame_count)),
            payouts: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.gold_difference.len()
    }

    /// Stacked view of the team bounty series: each slot's curve carries the
    /// sum of the slots below it, so the five curves of a team nest when
    /// plotted together. Signs follow the unstacked series.
    pub fn stacked(&self) -> StackedTeamBounties {
        StackedTeamBounties {
            blue: stack_series(&self.blue_bounties),
            red: stack_series(&self.red_bounties),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackedTeamBounties {
    pub blue: [Vec<i64>; TEAM_SIZE],
    pub red: [Vec<i64>; TEAM_SIZE],
}

fn stack_series(series: &[Vec<i64>; TEAM_SIZE]) -> [Vec<i64>; TEAM_SIZE] {
    let mut stacked = series.clone();

    for slot in 1..TEAM_SIZE {
        let (below, rest) = stacked.split_at_mut(slot);
        let previous = &below[slot - 1];
        for (value, carried) in rest[0].iter_mut().zip(previous) {
            *value += carried;
        }
    }

    stacked
}

/// Folds the frames in order into the output series. Kills inside a frame
/// are applied strictly sequentially in list order; after a frame's kills
/// are settled, one sample is appended to every series. Zero frames produce
/// empty series.
pub fn simulate(frames: &[Frame], policy: TierCarryPolicy) -> Result<BountyTimeline> {
    let mut ledger = BountyLedger::new();
    let mut timeline = BountyTimeline::with_frame_capacity(frames.len());

    for frame in frames {
        for kill in &frame.kills {
            if let Some(payout) = apply_kill(&mut ledger, kill, policy)? {
                timeline.payouts.push(payout);
            }
        }

        let blue_gold: i64 = Team::Blue
            .participants()
            .map(|participant| frame.participant_gold[participant.index()])
            .sum();
        let red_gold: i64 = Team::Red
            .participants()
            .map(|participant| frame.participant_gold[participant.index()])
            .sum();
        timeline.gold_difference.push(blue_gold - red_gold);

        for (slot, participant) in Team::Blue.participants().enumerate() {
            timeline.blue_bounties[slot].push(-ledger.available_bounty(participant));
        }
        for (slot, participant) in Team::Red.participants().enumerate() {
            timeline.red_bounties[slot].push(ledger.available_bounty(participant));
        }

        tracing::trace!(
            timestamp_ms = frame.timestamp_ms,
            gold_difference = blue_gold - red_gold,
            "Sampled frame"
        );
    }

    Ok(timeline)
}
