//! # Gravity Four
//!
//! Rules engine for a two-player gravity-drop connection game: tokens fall
//! to the lowest open cell of a column and the first player to line up
//! `win_length` of them (four by default) horizontally, vertically or
//! diagonally wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn-level game state
//! - [`ai`] — Agent trait, random and search agents, board heuristic
//! - [`play`] — Headless match driver and series statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
