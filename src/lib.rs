//! # Othello Duel
//!
//! Othello/Reversi played by a human (Black) against a computer opponent
//! (White) on a configurable board, with a difficulty-tiered heuristic AI
//! and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, capture rules, session state machine
//! - [`ai`] — Difficulty tiers and move selection policy
//! - [`ui`] — Terminal UI: board view, input handling, AI pacing
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
