//! Moveguess - Move-Learnset Deduction Game
//!
//! A hidden target creature is drawn from the catalog. Each guess reveals, move
//! by move, how the guessed creature's level-up moveset compares to the
//! target's, and the revealed hints accumulate into knowledge about the
//! target's own moveset.

pub mod catalog;
pub mod core;
pub mod deduce;
pub mod game;
pub mod render;
