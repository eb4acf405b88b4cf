//! Combat - the externally driven turn state machine

mod events;
mod session;

pub use events::{
    CombatError, CombatEvent, CombatOutcome, CombatSummary, PlayerAction, TurnResult,
};
pub use session::{roll_attack_power, roll_strike_damage, CombatSession};
