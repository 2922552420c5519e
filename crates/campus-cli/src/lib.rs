//! CLI library components for the campus console.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod moves;
pub mod render;
