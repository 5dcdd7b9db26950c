//! Seed data for demos, `init --seed`, and tests.

use chrono::NaiveDate;

use crate::model::{Priority, Sprint, SprintStatus, StoryStatus, Task, UserStory};
use crate::store::ItemStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// A small, fully-populated board: three sprints, sprint and backlog
/// stories, and tasks under the first story.
#[must_use]
pub fn seed_store() -> ItemStore {
    let mut store = ItemStore::new();

    store.upsert_sprints(vec![
        Sprint {
            id: "sp-1".to_string(),
            name: "Sprint 1".to_string(),
            start_date: date(2024, 1, 15),
            end_date: date(2024, 1, 29),
            status: SprintStatus::Active,
            expanded: false,
        },
        Sprint {
            id: "sp-2".to_string(),
            name: "Sprint 2".to_string(),
            start_date: date(2024, 1, 29),
            end_date: date(2024, 2, 12),
            status: SprintStatus::Planning,
            expanded: false,
        },
        Sprint {
            id: "sp-3".to_string(),
            name: "Sprint 3".to_string(),
            start_date: date(2024, 2, 12),
            end_date: date(2024, 2, 26),
            status: SprintStatus::Planning,
            expanded: false,
        },
    ]);

    store.upsert_stories(vec![
        UserStory {
            id: "us-1".to_string(),
            title: "User authentication flow".to_string(),
            description: "Login, logout, and session handling".to_string(),
            story_points: 8,
            priority: Priority::High,
            status: StoryStatus::InProgress,
            assignee: Some("Alice Chen".to_string()),
            tags: vec!["auth".to_string(), "security".to_string()],
            sprint_id: Some("sp-1".to_string()),
            show_tasks: false,
        },
        UserStory {
            id: "us-2".to_string(),
            title: "Dashboard summary widgets".to_string(),
            description: "Burndown and velocity tiles".to_string(),
            story_points: 5,
            priority: Priority::Medium,
            status: StoryStatus::Todo,
            assignee: Some("Bob Martinez".to_string()),
            tags: vec!["dashboard".to_string()],
            sprint_id: Some("sp-1".to_string()),
            show_tasks: false,
        },
        UserStory {
            id: "us-3".to_string(),
            title: "Export board to CSV".to_string(),
            description: String::new(),
            story_points: 3,
            priority: Priority::Low,
            status: StoryStatus::Todo,
            assignee: None,
            tags: vec![],
            sprint_id: Some("sp-2".to_string()),
            show_tasks: false,
        },
        UserStory {
            id: "us-4".to_string(),
            title: "Password reset via email".to_string(),
            description: String::new(),
            story_points: 5,
            priority: Priority::High,
            status: StoryStatus::Todo,
            assignee: Some("Alice Chen".to_string()),
            tags: vec!["auth".to_string()],
            sprint_id: None,
            show_tasks: false,
        },
        UserStory {
            id: "us-5".to_string(),
            title: "Dark mode theme".to_string(),
            description: String::new(),
            story_points: 2,
            priority: Priority::Low,
            status: StoryStatus::Todo,
            assignee: None,
            tags: vec!["ui".to_string()],
            sprint_id: None,
            show_tasks: false,
        },
    ]);

    store.upsert_tasks(vec![
        Task {
            id: "t-1".to_string(),
            user_story_id: "us-1".to_string(),
            title: "Design session token format".to_string(),
            description: String::new(),
            status: StoryStatus::Done,
            assignee: "Alice Chen".to_string(),
        },
        Task {
            id: "t-2".to_string(),
            user_story_id: "us-1".to_string(),
            title: "Wire login form to API".to_string(),
            description: String::new(),
            status: StoryStatus::InProgress,
            assignee: "Alice Chen".to_string(),
        },
        Task {
            id: "t-3".to_string(),
            user_story_id: "us-1".to_string(),
            title: "Add logout endpoint".to_string(),
            description: String::new(),
            status: StoryStatus::Todo,
            assignee: String::new(),
        },
    ]);

    store
}
