//! Catnap game library crate.
//!
//! The simulation (`entity`, `game::state`, `game::scene`, `game::ledger`,
//! `timer`, `input`) never touches SDL2 and can be driven headless; `app`,
//! `game::Game`, `texture` and `audio::Audio` bind it to a window and a mixer.

pub mod app;
pub mod asset;
pub mod audio;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod platform;
pub mod texture;
pub mod timer;
