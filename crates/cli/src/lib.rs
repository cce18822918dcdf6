//! CLI for the Mithila prototype fonts.

pub mod cli;
pub mod commands;
