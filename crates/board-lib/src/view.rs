//! View projection.
//!
//! Pure selection over the item store; owns no state and applies no sort.
//! Sprint lists show whatever the fetch-side filter merged in; the backlog
//! always shows every unassigned story, unfiltered (current behavior, see
//! DESIGN.md).

use crate::model::{ContainerId, Task, UserStory};
use crate::store::ItemStore;

/// Stories in a container, in insertion order.
#[must_use]
pub fn project<'a>(store: &'a ItemStore, container: &ContainerId) -> Vec<&'a UserStory> {
    store
        .stories()
        .filter(|story| container.holds(story))
        .collect()
}

/// Tasks under a story, in insertion order.
#[must_use]
pub fn tasks_for<'a>(store: &'a ItemStore, story_id: &str) -> Vec<&'a Task> {
    store
        .tasks()
        .filter(|task| task.user_story_id == story_id)
        .collect()
}

/// Total story points of a container's projection.
#[must_use]
pub fn container_points(store: &ItemStore, container: &ContainerId) -> u32 {
    project(store, container)
        .iter()
        .map(|s| s.story_points)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply_move;
    use crate::model::UserStory;

    fn make_story(id: &str, sprint: Option<&str>) -> UserStory {
        UserStory {
            id: id.to_string(),
            title: id.to_string(),
            sprint_id: sprint.map(ToString::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_moved_story_appears_in_exactly_one_projection() {
        let mut store = ItemStore::new();
        store.upsert_stories(vec![make_story("s1", None)]);

        apply_move(
            &mut store,
            "s1",
            &ContainerId::Sprint("sprintA".to_string()),
        );

        let in_sprint = project(&store, &ContainerId::Sprint("sprintA".to_string()));
        let in_backlog = project(&store, &ContainerId::Backlog);
        assert_eq!(in_sprint.len(), 1);
        assert_eq!(in_sprint[0].id, "s1");
        assert!(in_backlog.is_empty());
    }

    #[test]
    fn test_projection_preserves_insertion_order() {
        let mut store = ItemStore::new();
        store.upsert_stories(vec![
            make_story("us-c", Some("sp-1")),
            make_story("us-a", Some("sp-1")),
            make_story("us-b", Some("sp-1")),
        ]);

        let ids: Vec<&str> = project(&store, &ContainerId::Sprint("sp-1".to_string()))
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["us-c", "us-a", "us-b"]);
    }

    #[test]
    fn test_backlog_projection_is_unassigned_set() {
        let mut store = ItemStore::new();
        store.upsert_stories(vec![
            make_story("us-1", None),
            make_story("us-2", Some("sp-1")),
            make_story("us-3", None),
        ]);

        let ids: Vec<&str> = project(&store, &ContainerId::Backlog)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["us-1", "us-3"]);
    }

    #[test]
    fn test_tasks_for_story() {
        use crate::model::Task;
        let mut store = ItemStore::new();
        store.upsert_stories(vec![make_story("us-1", None)]);
        store.upsert_tasks(vec![
            Task {
                id: "t-1".to_string(),
                user_story_id: "us-1".to_string(),
                title: "first".to_string(),
                description: String::new(),
                status: crate::model::StoryStatus::Todo,
                assignee: String::new(),
            },
            Task {
                id: "t-2".to_string(),
                user_story_id: "us-2".to_string(),
                title: "other".to_string(),
                description: String::new(),
                status: crate::model::StoryStatus::Todo,
                assignee: String::new(),
            },
        ]);

        let tasks = tasks_for(&store, "us-1");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "t-1");
    }

    #[test]
    fn test_container_points() {
        let mut store = ItemStore::new();
        let mut a = make_story("us-1", Some("sp-1"));
        a.story_points = 5;
        let mut b = make_story("us-2", Some("sp-1"));
        b.story_points = 8;
        store.upsert_stories(vec![a, b]);

        assert_eq!(
            container_points(&store, &ContainerId::Sprint("sp-1".to_string())),
            13
        );
        assert_eq!(container_points(&store, &ContainerId::Backlog), 0);
    }
}
