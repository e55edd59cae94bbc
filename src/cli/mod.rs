//! Command line interface for the chaff binary.

pub mod args;
pub mod commands;
pub mod output;
