//! Run settlement: tokens, best scores, and the double-tokens reward

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cooldowns::{RewardCooldowns, RewardedKind};
use crate::core::tokens_from_score;
use crate::types::{
    GameMode, DOUBLE_TOKENS_MIN, FIRST_DAILY_TOKEN_BONUS, NEW_BEST_TOKEN_BONUS,
};

/// Why a rewarded action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RewardDenied {
    #[error("reward already used this run")]
    AlreadyUsed,
    #[error("score {score} is too low")]
    ScoreLow { score: u32 },
    #[error("only {tokens} tokens earned")]
    TokensLow { tokens: u32 },
    #[error("rewarded actions unavailable until {available_at}")]
    RewardedCooldown { available_at: u64 },
    #[error("continue unavailable until {available_at}")]
    Cooldown { available_at: u64 },
}

impl RewardDenied {
    pub fn code(self) -> &'static str {
        match self {
            RewardDenied::AlreadyUsed => "already_used",
            RewardDenied::ScoreLow { .. } => "score_low",
            RewardDenied::TokensLow { .. } => "tokens_low",
            RewardDenied::RewardedCooldown { .. } => "rewarded_cooldown",
            RewardDenied::Cooldown { .. } => "cooldown",
        }
    }
}

/// Bests recorded before the run started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriorBests {
    pub best_score: u32,
    /// Best for this run's date; `None` if the day has not been played
    pub daily_best: Option<u32>,
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRewards {
    pub score: u32,
    pub base_tokens: u32,
    pub tokens: u32,
    pub new_best: bool,
    pub first_daily: bool,
    /// Best score to persist
    pub best_score: u32,
    /// Daily best to persist; `None` for free runs
    pub daily_best: Option<u32>,
    pub doubled: bool,
}

/// Settle a finished run against the bests recorded when it started
pub fn settle_run(mode: GameMode, score: u32, prior: PriorBests) -> RunRewards {
    let base_tokens = tokens_from_score(score);
    let new_best = score > prior.best_score;
    let first_daily = mode == GameMode::Daily && prior.daily_best.is_none();

    let mut tokens = base_tokens;
    if new_best {
        tokens += NEW_BEST_TOKEN_BONUS;
    }
    if first_daily {
        tokens += FIRST_DAILY_TOKEN_BONUS;
    }

    let daily_best = match mode {
        GameMode::Daily => Some(prior.daily_best.map_or(score, |best| best.max(score))),
        GameMode::Free => None,
    };

    tracing::info!(score, tokens, new_best, first_daily, "run settled");

    RunRewards {
        score,
        base_tokens,
        tokens,
        new_best,
        first_daily,
        best_score: prior.best_score.max(score),
        daily_best,
        doubled: false,
    }
}

impl RunRewards {
    /// Whether the double-tokens reward may be offered at `now`
    pub fn double_eligibility(
        &self,
        cooldowns: &RewardCooldowns,
        now: u64,
    ) -> Result<(), RewardDenied> {
        if self.doubled {
            return Err(RewardDenied::AlreadyUsed);
        }
        if self.tokens < DOUBLE_TOKENS_MIN {
            return Err(RewardDenied::TokensLow {
                tokens: self.tokens,
            });
        }
        cooldowns.check(RewardedKind::DoubleTokens, now)
    }

    /// Grant the double-tokens reward, recording the request on `cooldowns`
    pub fn double_tokens(
        &mut self,
        cooldowns: &mut RewardCooldowns,
        now: u64,
    ) -> Result<u32, RewardDenied> {
        self.double_eligibility(cooldowns, now)?;
        cooldowns.mark_rewarded(now);
        self.tokens *= 2;
        self.doubled = true;
        Ok(self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_run_without_bonus() {
        let r = settle_run(GameMode::Free, 3200, PriorBests { best_score: 5000, daily_best: None });
        assert_eq!(r.base_tokens, 2);
        assert_eq!(r.tokens, 2);
        assert!(!r.new_best);
        assert!(!r.first_daily);
        assert_eq!(r.best_score, 5000);
        assert_eq!(r.daily_best, None);
    }

    #[test]
    fn new_best_adds_two() {
        let r = settle_run(GameMode::Free, 100, PriorBests::default());
        assert!(r.new_best);
        assert_eq!(r.tokens, 1 + 2);
        assert_eq!(r.best_score, 100);
    }

    #[test]
    fn equal_score_is_not_a_new_best() {
        let r = settle_run(GameMode::Free, 900, PriorBests { best_score: 900, daily_best: None });
        assert!(!r.new_best);
        assert_eq!(r.tokens, 1);
    }

    #[test]
    fn first_daily_adds_three() {
        let r = settle_run(GameMode::Daily, 0, PriorBests::default());
        assert!(r.first_daily);
        assert!(!r.new_best);
        assert_eq!(r.tokens, 1 + 3);
        assert_eq!(r.daily_best, Some(0));
    }

    #[test]
    fn daily_best_keeps_higher_score() {
        let r = settle_run(
            GameMode::Daily,
            400,
            PriorBests { best_score: 10_000, daily_best: Some(700) },
        );
        assert!(!r.first_daily);
        assert_eq!(r.daily_best, Some(700));
    }

    #[test]
    fn double_requires_two_tokens() {
        let r = settle_run(GameMode::Free, 0, PriorBests { best_score: 1, daily_best: None });
        let err = r.double_eligibility(&RewardCooldowns::new(), 0).unwrap_err();
        assert_eq!(err, RewardDenied::TokensLow { tokens: 1 });
        assert_eq!(err.code(), "tokens_low");
    }

    #[test]
    fn double_only_once() {
        let mut cooldowns = RewardCooldowns::new();
        let mut r = settle_run(GameMode::Daily, 1500, PriorBests::default());
        assert_eq!(r.tokens, 1 + 2 + 3);
        assert_eq!(r.double_tokens(&mut cooldowns, 1_000), Ok(12));
        assert!(r.doubled);
        assert_eq!(
            r.double_tokens(&mut cooldowns, 1_000_000),
            Err(RewardDenied::AlreadyUsed)
        );
    }

    #[test]
    fn double_respects_rewarded_spacing() {
        let mut cooldowns = RewardCooldowns::new();
        cooldowns.mark_rewarded(10_000);
        let mut r = settle_run(GameMode::Free, 4500, PriorBests::default());
        assert_eq!(
            r.double_tokens(&mut cooldowns, 20_000),
            Err(RewardDenied::RewardedCooldown { available_at: 100_000 })
        );
        assert!(!r.doubled);
    }
}
