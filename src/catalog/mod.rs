//! Creature and move reference data

pub mod creature;
pub mod edition;
pub mod registry;

pub use creature::{
    Creature, LearnSet, METHOD_EGG, METHOD_LEVEL_UP, METHOD_MACHINE, METHOD_TUTOR,
};
pub use edition::Edition;
pub use registry::{capitalize, Catalog, MoveInfo};
