//! Output formatting for `sprint_board`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`SprintWithStories`] - Sprint with its (expanded) story list
//! - [`BoardView`] - Backlog plus all sprints (sprints/search)
//! - [`MoveReport`] - Result of a move command
//! - [`StoryWithTasks`] - Story with its task drill-down

mod output;
mod text;

pub use output::{BoardView, MoveReport, SprintWithStories, StoryWithTasks};
pub use text::{
    format_priority_badge, format_sprint_line, format_status_icon, format_story_line,
    format_task_line,
};
