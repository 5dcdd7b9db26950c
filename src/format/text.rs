//! Text formatting functions for `sprint_board`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓)
//! - Priority badges ([high], [med], [low])
//! - Story, sprint, and task line formatting

use board_lib::{Priority, Sprint, StoryStatus, Task, UserStory};

/// Status icon characters.
pub mod icons {
    /// Todo - not started (hollow circle).
    pub const TODO: &str = "○";
    /// In progress - active work (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Done - completed (checkmark).
    pub const DONE: &str = "✓";
    /// Expanded sprint.
    pub const EXPANDED: &str = "▾";
    /// Collapsed sprint.
    pub const COLLAPSED: &str = "▸";
}

/// Return the icon character for a story or task status.
#[must_use]
pub const fn format_status_icon(status: StoryStatus) -> &'static str {
    match status {
        StoryStatus::Todo => icons::TODO,
        StoryStatus::InProgress => icons::IN_PROGRESS,
        StoryStatus::Done => icons::DONE,
    }
}

/// Format priority as a bracketed badge.
#[must_use]
pub const fn format_priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "[high]",
        Priority::Medium => "[med]",
        Priority::Low => "[low]",
    }
}

/// Format a single-line story summary.
///
/// Format: `{icon} {id} {badge} {title} ({points} pts) @{assignee}`
#[must_use]
pub fn format_story_line(story: &UserStory) -> String {
    let mut line = format!(
        "{} {} {} {} ({} pts)",
        format_status_icon(story.status),
        story.id,
        format_priority_badge(story.priority),
        story.title,
        story.story_points,
    );
    if let Some(ref assignee) = story.assignee {
        line.push_str(&format!(" @{assignee}"));
    }
    line
}

/// Format a single-line sprint header.
///
/// Format: `{▾|▸} {id} {name} [{status}] {start} → {end}`
#[must_use]
pub fn format_sprint_line(sprint: &Sprint) -> String {
    let marker = if sprint.expanded {
        icons::EXPANDED
    } else {
        icons::COLLAPSED
    };
    format!(
        "{marker} {} {} [{}] {} to {}",
        sprint.id, sprint.name, sprint.status, sprint.start_date, sprint.end_date,
    )
}

/// Format an indented task line under a story.
#[must_use]
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!(
        "    {} {} {}",
        format_status_icon(task.status),
        task.id,
        task.title,
    );
    if !task.assignee.is_empty() {
        line.push_str(&format!(" @{}", task.assignee));
    }
    line
}
