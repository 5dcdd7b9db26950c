//! `sprint_board` - Sprint backlog board library
//!
//! This crate provides the functionality for the `sb` CLI tool, a
//! file-backed sprint planning board built on `board-lib`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`board`] - Workspace discovery and board-file sessions
//! - [`config`] - Configuration management (`.board/config.yaml`)
//! - [`driver`] - Effect execution against a data source
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod cli;
pub mod config;
pub mod driver;
pub mod format;
pub mod logging;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
