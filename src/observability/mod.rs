//! Observability: structured logging for the `cheatkit` binary.

pub mod logging;
