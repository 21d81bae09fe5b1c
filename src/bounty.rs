use std::collections::HashMap;

use crate::model::{ParticipantId, PARTICIPANT_COUNT};

/// Gold paid for a single kill never exceeds this; the excess is carried on
/// the victim as leftover bounty.
pub const SINGLE_KILL_CAP: i64 = 1000;

const MAX_TABLE_TIER: i32 = 7;
const MIN_TABLE_TIER: i32 = -6;
const EXTRAPOLATION_STEP: i64 = 100;
const NEUTRAL_ASSIST_BOUNTY: i64 = 150;

lazy_static::lazy_static! {
    static ref BOUNTY_BY_TIER: HashMap<i32, i64> = HashMap::from([
        (7, 1000),
        (6, 900),
        (5, 800),
        (4, 700),
        (3, 600),
        (2, 450),
        (1, 300),
        (0, 300),
        (-1, 274),
        (-2, 219),
        (-3, 174),
        (-4, 140),
        (-5, 112),
        (-6, 100),
    ]);

    static ref ASSIST_BOUNTY_BY_TIER: HashMap<i32, i64> = HashMap::from([
        (-1, 137),
        (-2, 110),
        (-3, 88),
        (-4, 70),
        (-5, 56),
        (-6, 50),
    ]);
}

/// Base kill payout for a participant at the given kill tier. Tiers above 7
/// extrapolate linearly, tiers below -6 saturate at the -6 value.
pub fn tier_to_bounty(tier: i32) -> i64 {
    if tier > MAX_TABLE_TIER {
        return BOUNTY_BY_TIER[&MAX_TABLE_TIER] + EXTRAPOLATION_STEP * i64::from(tier - MAX_TABLE_TIER);
    }

    BOUNTY_BY_TIER[&tier.max(MIN_TABLE_TIER)]
}

/// Assist payout pool for a kill on a participant at the given kill tier.
/// Non-negative tiers pay a flat amount, tiers below -6 saturate.
pub fn assist_tier_to_bounty(tier: i32) -> i64 {
    if tier >= 0 {
        return NEUTRAL_ASSIST_BOUNTY;
    }

    ASSIST_BOUNTY_BY_TIER[&tier.max(MIN_TABLE_TIER)]
}

/// Mutable per-participant bounty state for one simulated match: the current
/// kill tier and any bounty carried past the single-kill cap. All policy
/// (who gets updated and when) lives in the kill processing; this is only
/// the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BountyLedger {
    kill_tiers: [i32; PARTICIPANT_COUNT],
    leftover_bounties: [i64; PARTICIPANT_COUNT],
}

impl BountyLedger {
    pub fn new() -> Self {
        Self {
            kill_tiers: [0; PARTICIPANT_COUNT],
            leftover_bounties: [0; PARTICIPANT_COUNT],
        }
    }

    pub fn tier_of(&self, participant: ParticipantId) -> i32 {
        self.kill_tiers[participant.index()]
    }

    pub fn set_tier(&mut self, participant: ParticipantId, tier: i32) {
        self.kill_tiers[participant.index()] = tier;
    }

    pub fn leftover_of(&self, participant: ParticipantId) -> i64 {
        self.leftover_bounties[participant.index()]
    }

    pub fn set_leftover(&mut self, participant: ParticipantId, leftover: i64) {
        self.leftover_bounties[participant.index()] = leftover;
    }

    /// Bounty currently sitting on this participant: the tier payout plus
    /// anything carried past the single-kill cap.
    pub fn available_bounty(&self, participant: ParticipantId) -> i64 {
        tier_to_bounty(self.tier_of(participant)) + self.leftover_of(participant)
    }
}

impl Default for BountyLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{assist_tier_to_bounty, tier_to_bounty, BountyLedger};
    use crate::model::ParticipantId;

    fn participant(id: u8) -> ParticipantId {
        ParticipantId::try_from(id).expect("Expected a valid test participant id")
    }

    #[test]
    fn bounty_table_matches_published_values() {
        let expected = [
            (7, 1000),
            (6, 900),
            (5, 800),
            (4, 700),
            (3, 600),
            (2, 450),
            (1, 300),
            (0, 300),
            (-1, 274),
            (-2, 219),
            (-3, 174),
            (-4, 140),
            (-5, 112),
            (-6, 100),
        ];

        for (tier, bounty) in expected {
            assert_eq!(tier_to_bounty(tier), bounty, "tier {tier}");
        }
    }

    #[test]
    fn bounty_extrapolates_above_table_and_saturates_below() {
        assert_eq!(tier_to_bounty(8), 1100);
        assert_eq!(tier_to_bounty(12), 1500);
        assert_eq!(tier_to_bounty(-7), 100);
        assert_eq!(tier_to_bounty(-20), 100);
    }

    #[test]
    fn bounty_is_monotonic_non_decreasing_in_tier() {
        for tier in -20..20 {
            assert!(
                tier_to_bounty(tier + 1) >= tier_to_bounty(tier),
                "bounty decreased between tiers {} and {}",
                tier,
                tier + 1
            );
        }
    }

    #[test]
    fn assist_table_matches_published_values() {
        let expected = [(-1, 137), (-2, 110), (-3, 88), (-4, 70), (-5, 56), (-6, 50)];

        for (tier, bounty) in expected {
            assert_eq!(assist_tier_to_bounty(tier), bounty, "tier {tier}");
        }
    }

    #[test]
    fn assist_bounty_is_flat_at_or_above_neutral_and_saturates_below() {
        assert_eq!(assist_tier_to_bounty(0), 150);
        assert_eq!(assist_tier_to_bounty(5), 150);
        assert_eq!(assist_tier_to_bounty(-7), 50);
        assert_eq!(assist_tier_to_bounty(-13), 50);

        for tier in -20..20 {
            assert!(
                assist_tier_to_bounty(tier + 1) >= assist_tier_to_bounty(tier),
                "assist bounty decreased between tiers {} and {}",
                tier,
                tier + 1
            );
        }
    }

    #[test]
    fn ledger_starts_every_participant_at_neutral() {
        let ledger = BountyLedger::new();

        for participant in ParticipantId::all() {
            assert_eq!(ledger.tier_of(participant), 0);
            assert_eq!(ledger.leftover_of(participant), 0);
            assert_eq!(ledger.available_bounty(participant), 300);
        }
    }

    #[test]
    fn ledger_reads_back_writes_per_participant() {
        let mut ledger = BountyLedger::new();

        ledger.set_tier(participant(3), -2);
        ledger.set_leftover(participant(3), 450);
        ledger.set_tier(participant(8), 4);

        assert_eq!(ledger.tier_of(participant(3)), -2);
        assert_eq!(ledger.leftover_of(participant(3)), 450);
        assert_eq!(ledger.available_bounty(participant(3)), 219 + 450);
        assert_eq!(ledger.tier_of(participant(8)), 4);
        assert_eq!(ledger.leftover_of(participant(8)), 0);
        assert_eq!(ledger.tier_of(participant(4)), 0, "neighbor untouched");
    }
}
