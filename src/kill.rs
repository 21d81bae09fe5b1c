use serde::Serialize;

use crate::bounty::{assist_tier_to_bounty, tier_to_bounty, BountyLedger, SINGLE_KILL_CAP};
use crate::error::{Result, SimulationError};
use crate::model::{KillEvent, ParticipantId};

const MAX_OFFSET_SEARCH_STEPS: i32 = 20;

/// The payout snapshot a kill event carries is delayed: kills the victim
/// scored moments before dying are already discounted from the reported
/// bounty but not yet visible in the ledger. After reconstructing how many
/// such mid-fight tiers to discount, this policy decides whether they
/// survive into the victim's next life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierCarryPolicy {
    /// Tiers earned mid-fight survive: the assist payout reads the
    /// discounted tier and a slain victim keeps the reconstructed tiers.
    #[default]
    KeepMidFightTiers,
    /// Legacy behavior: the reconstructed discount is thrown away, the
    /// assist payout reads the full pre-death tier and a slain victim on a
    /// positive tier resets to neutral.
    DiscardMidFightTiers,
}

/// Gold actually paid for one processed kill. Informational: the ledger is
/// already updated when this is returned, nothing downstream consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KillPayout {
    pub killer: ParticipantId,
    pub victim: ParticipantId,
    /// How many mid-fight kill tiers the reported bounty already discounted.
    pub tier_offset: i32,
    pub delivered_gold: i64,
    /// Per-assistant share of the assist pool, when the kill had assists.
    pub assist_share: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TierInference {
    offset: i32,
    leftover: i64,
    delivered_gold: i64,
}

/// Reconstructs the mid-fight tier discount from a single reported payout.
///
/// Walks trial offsets from the victim's last known tier downwards until the
/// capped payout no longer exceeds the reported total; the excess over the
/// single-kill cap at the accepted offset becomes the victim's new leftover.
/// When the existing leftover alone covers the reported total the payout was
/// absorbed by carried bounty and no tier was consumed, so the search is
/// skipped entirely.
///
/// Returns `None` when no offset within the search bound reproduces the
/// reported total, which means the reported bounty is inconsistent with the
/// ledger state.
fn infer_tier_offset(victim_tier: i32, leftover: i64, reported_total: i64) -> Option<TierInference> {
    if leftover >= reported_total {
        return Some(TierInference {
            offset: victim_tier,
            leftover: leftover - reported_total,
            delivered_gold: reported_total,
        });
    }

    for offset in 0..MAX_OFFSET_SEARCH_STEPS {
        let uncapped = tier_to_bounty(victim_tier - offset) + leftover;
        let delivered = uncapped.min(SINGLE_KILL_CAP);

        if delivered <= reported_total {
            return Some(TierInference {
                offset,
                leftover: uncapped - delivered,
                delivered_gold: delivered,
            });
        }
    }

    None
}

/// Applies one champion kill to the ledger: credits the killer, reconstructs
/// the victim's mid-fight tier discount from the reported payout, settles
/// leftover bounty, repays assistant death debt and re-tiers the victim.
///
/// Environmental deaths (no killer) have no bounty effect and return `None`.
pub fn apply_kill(
    ledger: &mut BountyLedger,
    event: &KillEvent,
    policy: TierCarryPolicy,
) -> Result<Option<KillPayout>> {
    let Some(killer) = event.killer else {
        return Ok(None);
    };

    // A kill forgives death debt back to neutral, it does not stack on it.
    let killer_tier = ledger.tier_of(killer);
    if killer_tier < 0 {
        ledger.set_tier(killer, 0);
    } else {
        ledger.set_tier(killer, killer_tier + 1);
    }

    let victim = event.victim;
    let victim_tier = ledger.tier_of(victim);
    let leftover = ledger.leftover_of(victim);
    let reported_total = event.total_bounty();

    let inference = infer_tier_offset(victim_tier, leftover, reported_total).ok_or(
        SimulationError::UnreachableBounty {
            victim,
            reported: reported_total,
            tier: victim_tier,
            leftover,
        },
    )?;

    ledger.set_leftover(victim, inference.leftover);

    let snapshot_offset = match policy {
        TierCarryPolicy::KeepMidFightTiers => inference.offset,
        TierCarryPolicy::DiscardMidFightTiers => 0,
    };

    let assist_share = if event.assisting.is_empty() {
        None
    } else {
        let pool = assist_tier_to_bounty(victim_tier - snapshot_offset);
        for assistant in &event.assisting {
            // Assists only repay death debt, they never raise a tier past
            // neutral.
            let assistant_tier = ledger.tier_of(*assistant);
            if assistant_tier < 0 {
                ledger.set_tier(*assistant, assistant_tier + 1);
            }
        }
        Some(pool as f64 / event.assisting.len() as f64)
    };

    if victim_tier > 0 {
        ledger.set_tier(victim, snapshot_offset);
    } else {
        ledger.set_tier(victim, victim_tier - 1);
    }

    tracing::debug!(
        timestamp_ms = event.timestamp_ms,
        killer = %killer,
        victim = %victim,
        tier_offset = inference.offset,
        delivered_gold = inference.delivered_gold,
        reported_bounty = event.bounty,
        reported_shutdown = event.shutdown_bounty,
        "Processed champion kill"
    );

    Ok(Some(KillPayout {
        killer,
        victim,
        tier_offset: inference.offset,
        delivered_gold: inference.delivered_gold,
        assist_share,
    }))
}
