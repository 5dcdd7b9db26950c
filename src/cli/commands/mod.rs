//! Command implementations for the `sb` CLI.

pub mod create;
pub mod demo;
pub mod init;
pub mod move_story;
pub mod search;
pub mod sprints;
pub mod stories;
pub mod tasks;
pub mod toggle;
pub mod version;
