//! Pokedex TUI - paginated PokeAPI browser with search and favorites
//!
//! This library exposes the app's modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod config;
pub mod effect;
pub mod error;
pub mod logging;
pub mod persist;
pub mod reducer;
pub mod state;
pub mod ui;
