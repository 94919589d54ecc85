//! SDL2 drawing adapters. Nothing in here feeds back into the simulation.

pub mod sprite;
pub mod text;
