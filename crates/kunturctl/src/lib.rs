//! Kuntur Control - CLI client for the Kuntur case store
//!
//! Works against a local offline mirror by default (the client-side twin of
//! the kunturd file store); `--server` switches to the HTTP API of a
//! running daemon.

pub mod cli;
pub mod client;
pub mod commands;
pub mod mirror;
