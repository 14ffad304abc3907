//! Session layer for the placement puzzle.
//!
//! `lumelines-core` owns the rules; this crate strings them into a run: a tray
//! dealt from the generator, run status, the one-time continue, token
//! settlement and rewarded-action cooldowns. A greedy planner drives headless
//! runs.

pub use lumelines_core as core;
pub use lumelines_types as types;

pub mod cooldowns;
pub mod place;
pub mod rewards;
pub mod session;

pub use cooldowns::{RewardCooldowns, RewardedKind};
pub use place::{plan_move, play_greedy, PlaceError, PlannedMove};
pub use rewards::{settle_run, PriorBests, RewardDenied, RunRewards};
pub use session::{GameSession, RunStatus, SessionSnapshot, Tray};
