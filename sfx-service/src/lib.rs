//! Game SFX Planner: turns a short game-action description into a structured
//! sound-design brief by delegating text generation to the Pollinations API.

pub mod config;
pub mod handlers;
pub mod prompt;
pub mod services;
pub mod startup;
