//! Deterministic round logic for the FamilyTime party games.
//!
//! `party-core` defines the canonical rules of a single game round (setup,
//! private reveal, answer collection, discussion, voting, spy guess) for the
//! three variants Impostor, Word-Spy and Fragen-Mix. All state mutation flows
//! through [`engine::RoundEngine`]; the session runtime and front-ends only
//! read [`RoundState`] and submit [`RoundAction`]s.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod setup;
pub mod state;
pub mod variant;

pub use action::{
    CastVote, ConfirmReveal, ContinueToDiscussion, ResetRound, ResolveVote, RoundAction,
    RoundError, RoundTransition, StartRound, StartVote, SubmitAnswer, SubmitGuess, TimerTick,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, Resolution, RoundEngine, TransitionOutcome, TransitionPhase,
    TransitionPhaseError, evaluate_winner, reduce,
};
pub use env::{PcgRng, RngOracle, RoundEnv, compute_seed};
pub use error::ErrorSeverity;
pub use setup::{SetupRequest, assign_roles, shuffle};
pub use state::{
    ActiveCounts, DiscussionTimer, InputPrompt, LabelKind, NextStep, Phase, Player, PlayerId,
    PromptKind, RevealCard, Role, Roster, RoundState, RoundSummary, ShowdownEntry, TimerStatus,
    WordHistory, WordPair,
};
pub use variant::{GameVariant, VariantRules};
