//! Conquest simulation library.
//!
//! Exposes the board representation, map generation, AI move selection and
//! action resolution for use by the binaries, integration tests and benches.

pub mod analysis;
pub mod board;
pub mod config;
pub mod engine;
pub mod mapgen;
pub mod movegen;
pub mod resolve;
pub mod selfplay;
