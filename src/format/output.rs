//! JSON output types for `sprint_board`.

use board_lib::{Sprint, Task, UserStory};
use serde::Serialize;

/// A sprint with its story list (`sprints`, `search`).
#[derive(Debug, Serialize)]
pub struct SprintWithStories {
    #[serde(flatten)]
    pub sprint: Sprint,
    pub stories: Vec<UserStory>,
}

/// The whole board: backlog plus sprints.
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub backlog: Vec<UserStory>,
    pub sprints: Vec<SprintWithStories>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a move command.
#[derive(Debug, Serialize)]
pub struct MoveReport {
    pub story_id: String,
    pub moved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// A story with its task drill-down (`tasks`).
#[derive(Debug, Serialize)]
pub struct StoryWithTasks {
    #[serde(flatten)]
    pub story: UserStory,
    pub tasks: Vec<Task>,
}
