// src/lib.rs

pub mod api;
pub mod categorizer;
pub mod config;
pub mod language;
pub mod llm;
pub mod prompt;
pub mod state;
