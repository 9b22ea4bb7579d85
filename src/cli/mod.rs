//! Command-line interface for `cheatkit`.

pub mod args;
pub mod commands;
