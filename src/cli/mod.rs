//! Implementations behind the `socnet` binary.

pub mod commands;
