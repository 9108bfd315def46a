//! Rules engine for four-in-a-row games: classic Connect Four, PopOut and
//! Gravity.
//!
//! A [`game::Game`] drives turns on a [`board::Board`]; where a token lands is
//! decided by the board's [`strategy::MoveStrategy`], and when play stops is
//! decided by the [`games::Variant`].
pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod games;
pub mod players;
pub mod settings;
pub mod strategy;
