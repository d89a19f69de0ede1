//! Hushwave CLI library.
//!
//! This crate is the delivery side of hushwave: it picks a recipe provider,
//! enforces the duration budget, calls the engine, and persists the WAV file
//! and its proof.

pub mod commands;
pub mod config;
pub mod logging;
pub mod provider;
