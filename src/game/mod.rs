//! Core Othello game logic: board representation, player identity, capture
//! rules, and the session state machine that sequences human and AI turns.

mod board;
mod player;
pub mod rules;
mod session;

pub use board::{validate_dimensions, Board, Cell, Score, MAX_DIM, MIN_DIM};
pub use player::Player;
pub use rules::Move;
pub use session::{GameEvent, GameSession, Outcome, Phase, TurnReport};
