//! Core data types for board-lib.
//!
//! Stories, sprints, and tasks use the same field set as the board JSONL
//! file so records round-trip without translation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

/// User story priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(crate::error::BoardError::InvalidPriority {
                value: other.to_string(),
            }),
        }
    }
}

/// Story / task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StoryStatus {
    #[default]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl StoryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StoryStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(crate::error::BoardError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Sprint lifecycle status.
///
/// At most one sprint should be `Active` at a time; the CRUD layer upholds
/// that, the core does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SprintStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

impl SprintStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SprintStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(crate::error::BoardError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// A user story. `sprint_id = None` means the story sits in the backlog.
///
/// `sprint_id` is mutated only by the reassignment engine; `show_tasks` is
/// view state owned by the controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserStory {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Estimate in story points.
    #[serde(default)]
    pub story_points: u32,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: StoryStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Owning sprint, or `None` for the backlog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,

    /// Whether the task drill-down is open for this story (view state).
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_tasks: bool,
}

impl UserStory {
    /// The container this story currently belongs to.
    #[must_use]
    pub fn container(&self) -> ContainerId {
        self.sprint_id
            .as_ref()
            .map_or(ContainerId::Backlog, |id| ContainerId::Sprint(id.clone()))
    }
}

/// A sprint. `expanded` is view state, mutated only by the controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprint {
    pub id: String,

    pub name: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[serde(default)]
    pub status: SprintStatus,

    /// Whether the sprint's story list is open in the view.
    #[serde(default, skip_serializing_if = "is_false")]
    pub expanded: bool,
}

/// A task under a user story (drill-down detail).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub user_story_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: StoryStatus,
    #[serde(default)]
    pub assignee: String,
}

/// A story container: the backlog or a single sprint.
///
/// `"backlog"` is the sentinel spelling used by move signals; everything
/// else is taken as a sprint id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Backlog,
    Sprint(String),
}

impl ContainerId {
    /// The `sprint_id` value stories in this container carry.
    #[must_use]
    pub fn sprint_id(&self) -> Option<&str> {
        match self {
            Self::Backlog => None,
            Self::Sprint(id) => Some(id),
        }
    }

    /// Whether the given story belongs to this container.
    #[must_use]
    pub fn holds(&self, story: &UserStory) -> bool {
        story.sprint_id.as_deref() == self.sprint_id()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backlog => write!(f, "backlog"),
            Self::Sprint(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ContainerId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("backlog") {
            Ok(Self::Backlog)
        } else {
            Ok(Self::Sprint(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse_roundtrip() {
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_serde_spelling() {
        let json = serde_json::to_string(&StoryStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: StoryStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StoryStatus::InProgress);
    }

    #[test]
    fn test_container_sentinel() {
        assert_eq!(
            "backlog".parse::<ContainerId>().unwrap(),
            ContainerId::Backlog
        );
        assert_eq!(
            "sp-abc".parse::<ContainerId>().unwrap(),
            ContainerId::Sprint("sp-abc".to_string())
        );
        assert_eq!(ContainerId::Backlog.to_string(), "backlog");
    }

    #[test]
    fn test_container_holds() {
        let mut story = UserStory {
            id: "us-1".to_string(),
            title: "t".to_string(),
            ..Default::default()
        };
        assert!(ContainerId::Backlog.holds(&story));
        story.sprint_id = Some("sp-1".to_string());
        assert!(ContainerId::Sprint("sp-1".to_string()).holds(&story));
        assert!(!ContainerId::Backlog.holds(&story));
    }

    #[test]
    fn test_story_container() {
        let story = UserStory {
            id: "us-1".to_string(),
            sprint_id: Some("sp-2".to_string()),
            ..Default::default()
        };
        assert_eq!(story.container(), ContainerId::Sprint("sp-2".to_string()));
    }
}
