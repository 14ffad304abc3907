//! Rewarded-action cooldowns
//!
//! Timestamps are milliseconds since the Unix epoch, supplied by the caller.
//! The host persists `continue_until` so the continue cooldown survives
//! restarts; the rewarded spacing is per process.

use serde::{Deserialize, Serialize};

use crate::rewards::RewardDenied;
use crate::types::{CONTINUE_COOLDOWN_MS, REWARDED_COOLDOWN_MS};

/// What a rewarded action unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardedKind {
    Continue,
    DoubleTokens,
    Rewarded,
}

/// Earliest time another rewarded action may start
pub fn next_rewarded_allowed_at(last_request_at: u64) -> u64 {
    last_request_at.saturating_add(REWARDED_COOLDOWN_MS)
}

pub fn is_rewarded_allowed(last_request_at: u64, now: u64) -> bool {
    now >= next_rewarded_allowed_at(last_request_at)
}

/// Cooldown deadline after a continue is used at `now`
pub fn continue_cooldown_until(now: u64) -> u64 {
    now.saturating_add(CONTINUE_COOLDOWN_MS)
}

/// Cooldown bookkeeping for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewardCooldowns {
    last_rewarded_at: Option<u64>,
    continue_until: u64,
}

impl RewardCooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted continue deadline
    pub fn with_continue_until(continue_until: u64) -> Self {
        Self {
            last_rewarded_at: None,
            continue_until,
        }
    }

    pub fn continue_until(&self) -> u64 {
        self.continue_until
    }

    pub fn rewarded_available_at(&self) -> u64 {
        self.last_rewarded_at.map_or(0, next_rewarded_allowed_at)
    }

    /// Whether a rewarded action of `kind` may be requested at `now`
    pub fn check(&self, kind: RewardedKind, now: u64) -> Result<(), RewardDenied> {
        if let Some(last) = self.last_rewarded_at {
            if !is_rewarded_allowed(last, now) {
                return Err(RewardDenied::RewardedCooldown {
                    available_at: next_rewarded_allowed_at(last),
                });
            }
        }
        if kind == RewardedKind::Continue && now < self.continue_until {
            return Err(RewardDenied::Cooldown {
                available_at: self.continue_until,
            });
        }
        Ok(())
    }

    /// Record a rewarded request at `now`
    pub fn mark_rewarded(&mut self, now: u64) {
        self.last_rewarded_at = Some(now);
    }

    /// Record a used continue at `now`
    pub fn mark_continue_used(&mut self, now: u64) {
        self.continue_until = continue_cooldown_until(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewarded_blocked_before_90s() {
        let last = 1000;
        assert!(!is_rewarded_allowed(last, last + 60_000));
        assert!(is_rewarded_allowed(last, next_rewarded_allowed_at(last)));
    }

    #[test]
    fn continue_cooldown_is_ten_minutes() {
        assert_eq!(continue_cooldown_until(1000), 601_000);
    }

    #[test]
    fn fresh_cooldowns_allow_everything() {
        let c = RewardCooldowns::new();
        assert_eq!(c.check(RewardedKind::Continue, 0), Ok(()));
        assert_eq!(c.check(RewardedKind::DoubleTokens, 0), Ok(()));
        assert_eq!(c.rewarded_available_at(), 0);
    }

    #[test]
    fn rewarded_spacing_applies_to_all_kinds() {
        let mut c = RewardCooldowns::new();
        c.mark_rewarded(5_000);
        let err = c.check(RewardedKind::DoubleTokens, 10_000).unwrap_err();
        assert_eq!(err, RewardDenied::RewardedCooldown { available_at: 95_000 });
        assert_eq!(err.code(), "rewarded_cooldown");
        assert_eq!(c.check(RewardedKind::DoubleTokens, 95_000), Ok(()));
    }

    #[test]
    fn continue_cooldown_only_blocks_continue() {
        let mut c = RewardCooldowns::new();
        c.mark_continue_used(0);
        assert_eq!(
            c.check(RewardedKind::Continue, 1),
            Err(RewardDenied::Cooldown { available_at: 600_000 })
        );
        assert_eq!(c.check(RewardedKind::Rewarded, 1), Ok(()));
        assert_eq!(c.check(RewardedKind::Continue, 600_000), Ok(()));
    }

    #[test]
    fn restored_continue_deadline() {
        let c = RewardCooldowns::with_continue_until(700_000);
        assert_eq!(c.continue_until(), 700_000);
        assert_eq!(
            c.check(RewardedKind::Continue, 699_999),
            Err(RewardDenied::Cooldown { available_at: 700_000 })
        );
        assert_eq!(c.check(RewardedKind::Continue, 700_000), Ok(()));
        assert_eq!(c.check(RewardedKind::DoubleTokens, 0), Ok(()));
    }
}
