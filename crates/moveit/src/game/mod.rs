//! The "guess the body part" game.
//!
//! A `ChallengeGame` names a body part each round and scores the player's
//! click against that landmark's position in the current frame. `play`
//! drives it from a `VideoPipeline` onto any `GameSurface`.

mod bodypart;
mod challenge;
mod click;
mod overlay;
mod session;

pub use {
    bodypart::{BODY_PARTS, BodyPart},
    challenge::{ChallengeGame, ClickOutcome, GameSummary, HIT_TOLERANCE, MAX_ROUNDS, Phase},
    click::ClickSlot,
    overlay::{GAME_OVER_LINES, WELCOME_LINES, draw_game_over, draw_round_info, draw_welcome},
    session::{FRAME_DELAY, GameSurface, play},
};
