//! Headless runner (default binary).
//!
//! Plays one seeded run with the greedy planner and prints the final session
//! snapshot and settled rewards as JSON on stdout. Logs go to stderr.
//!
//! Nothing is persisted between runs: prior bests come from
//! `LUMELINES_BEST_SCORE` / `LUMELINES_DAILY_BEST` and default to none, in
//! which case every run settles as a new best (and a first daily run).

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lumelines::config::RunConfig;
use lumelines::core::SeededRng;
use lumelines::engine::{
    play_greedy, settle_run, GameSession, RewardCooldowns, RunRewards, SessionSnapshot,
};

#[derive(Serialize)]
struct RunReport {
    session: SessionSnapshot,
    rewards: RunRewards,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

fn main() -> Result<()> {
    init_tracing();

    let config = RunConfig::from_env().context("invalid runner configuration")?;
    let started_at = now_ms();
    let seed = config.resolve_seed(started_at);

    let rng = SeededRng::new(&seed);
    let mut session = GameSession::new(config.mode, seed, rng, started_at);
    let mut cooldowns = RewardCooldowns::new();

    play(&mut session, &mut cooldowns, config.max_moves);

    let state = session.state();
    let rewards = settle_run(state.mode(), state.score(), config.prior);

    let report = RunReport {
        session: session.snapshot(),
        rewards,
    };
    let json = serde_json::to_string_pretty(&report).context("failed to encode run report")?;
    println!("{json}");

    Ok(())
}

fn play(session: &mut GameSession, cooldowns: &mut RewardCooldowns, max_moves: u32) {
    while session.state().moves() < max_moves {
        if session.is_exhausted() {
            match session.grant_continue(cooldowns, now_ms()) {
                Ok(()) => continue,
                Err(denied) => {
                    tracing::info!(reason = denied.code(), "continue not granted");
                    return;
                }
            }
        }
        if play_greedy(session).is_none() {
            return;
        }
    }
    tracing::warn!(max_moves, "move cap reached");
}
