//! Runtime configuration for the headless runner, read from the environment.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use crate::core::{create_daily_seed, free_play_seed, today_local};
use crate::engine::PriorBests;
use crate::types::GameMode;

pub const DEFAULT_MAX_MOVES: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: GameMode,
    /// Explicit seed; derived from the date or start time when absent
    pub seed: Option<String>,
    /// Daily-mode date; today when absent
    pub date: Option<NaiveDate>,
    pub max_moves: u32,
    /// Bests to settle against; the runner keeps no storage of its own
    pub prior: PriorBests,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Free,
            seed: None,
            date: None,
            max_moves: DEFAULT_MAX_MOVES,
            prior: PriorBests::default(),
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(mode) = get("LUMELINES_MODE") {
            config.mode = match GameMode::from_str(&mode) {
                Some(mode) => mode,
                None => bail!("LUMELINES_MODE must be `free` or `daily`, got `{mode}`"),
            };
        }

        config.seed = get("LUMELINES_SEED");

        if let Some(date) = get("LUMELINES_DATE") {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("LUMELINES_DATE `{date}` is not YYYY-MM-DD"))?;
            config.date = Some(parsed);
        }

        if let Some(max) = get("LUMELINES_MAX_MOVES") {
            config.max_moves = max
                .parse()
                .with_context(|| format!("LUMELINES_MAX_MOVES `{max}` is not a move count"))?;
        }

        if let Some(best) = get("LUMELINES_BEST_SCORE") {
            config.prior.best_score = best
                .parse()
                .with_context(|| format!("LUMELINES_BEST_SCORE `{best}` is not a score"))?;
        }

        if let Some(best) = get("LUMELINES_DAILY_BEST") {
            let parsed = best
                .parse()
                .with_context(|| format!("LUMELINES_DAILY_BEST `{best}` is not a score"))?;
            config.prior.daily_best = Some(parsed);
        }

        Ok(config)
    }

    /// Seed for a run starting at `started_at` (ms since the epoch)
    pub fn resolve_seed(&self, started_at: u64) -> String {
        if let Some(seed) = &self.seed {
            return seed.clone();
        }
        match self.mode {
            GameMode::Daily => create_daily_seed(&self.resolve_date()),
            GameMode::Free => free_play_seed(started_at),
        }
    }

    pub fn resolve_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(today_local)
    }
}
