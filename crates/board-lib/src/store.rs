//! In-memory item store backed by insertion-ordered maps.
//!
//! Flat, normalized mappings of story id → story, sprint id → sprint and
//! task id → task. Populated once at load, then mutated in place by move
//! operations and additive merges; never partially replaced.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{BoardError, Result};
use crate::model::{Sprint, Task, UserStory};

/// The single owned item store.
///
/// Insertion order is significant: projections list stories in the order
/// they entered the store, with no implicit sort.
#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    stories: IndexMap<String, UserStory>,
    sprints: IndexMap<String, Sprint>,
    tasks: IndexMap<String, Task>,
}

impl ItemStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Reassignment (the only writers of `sprint_id`)
    // ========================================================================

    /// Assign a story to a sprint, or back to the backlog with `None`.
    ///
    /// The destination sprint is not re-validated here; the reassignment
    /// engine derives destinations from the current sprint collection.
    ///
    /// # Errors
    ///
    /// Returns `StoryNotFound` if the story doesn't exist.
    pub fn move_to_sprint(&mut self, story_id: &str, sprint_id: Option<&str>) -> Result<()> {
        let story = self
            .stories
            .get_mut(story_id)
            .ok_or_else(|| BoardError::StoryNotFound {
                id: story_id.to_string(),
            })?;
        story.sprint_id = sprint_id.map(ToString::to_string);
        debug!(story_id, sprint_id, "story reassigned");
        Ok(())
    }

    /// Return a story to the backlog.
    ///
    /// # Errors
    ///
    /// Returns `StoryNotFound` if the story doesn't exist.
    pub fn move_to_backlog(&mut self, story_id: &str) -> Result<()> {
        self.move_to_sprint(story_id, None)
    }

    // ========================================================================
    // Additive merges (fetch results accumulating over time)
    // ========================================================================

    /// Merge a batch of fetched stories, keyed by id.
    ///
    /// Entries not present in the batch are preserved; on conflict the
    /// incoming story wins while keeping the original insertion position.
    pub fn upsert_stories(&mut self, batch: Vec<UserStory>) {
        for story in batch {
            self.stories.insert(story.id.clone(), story);
        }
    }

    /// Merge a batch of fetched sprints, keyed by id.
    ///
    /// Fetched sprint rows carry no view state, so an existing sprint's
    /// `expanded` flag survives the merge.
    pub fn upsert_sprints(&mut self, batch: Vec<Sprint>) {
        for mut sprint in batch {
            if let Some(existing) = self.sprints.get(&sprint.id) {
                sprint.expanded = existing.expanded;
            }
            self.sprints.insert(sprint.id.clone(), sprint);
        }
    }

    /// Merge a batch of fetched tasks, keyed by id.
    pub fn upsert_tasks(&mut self, batch: Vec<Task>) {
        for task in batch {
            self.tasks.insert(task.id.clone(), task);
        }
    }

    // ========================================================================
    // Creation (write-API path)
    // ========================================================================

    /// Insert a brand-new story.
    ///
    /// # Errors
    ///
    /// Returns `IdCollision` if the id already exists, or `Validation` if
    /// the title is empty.
    pub fn insert_story(&mut self, story: UserStory) -> Result<()> {
        if story.title.trim().is_empty() {
            return Err(BoardError::validation("title", "cannot be empty"));
        }
        if self.stories.contains_key(&story.id) {
            return Err(BoardError::IdCollision { id: story.id });
        }
        self.stories.insert(story.id.clone(), story);
        Ok(())
    }

    /// Insert a brand-new sprint.
    ///
    /// # Errors
    ///
    /// Returns `IdCollision` if the id already exists, or `Validation` if
    /// the name is empty.
    pub fn insert_sprint(&mut self, sprint: Sprint) -> Result<()> {
        if sprint.name.trim().is_empty() {
            return Err(BoardError::validation("name", "cannot be empty"));
        }
        if self.sprints.contains_key(&sprint.id) {
            return Err(BoardError::IdCollision { id: sprint.id });
        }
        self.sprints.insert(sprint.id.clone(), sprint);
        Ok(())
    }

    // ========================================================================
    // View-state flags
    // ========================================================================

    /// Flip the expansion flag of one sprint; every other sprint keeps its
    /// state (independent toggles, not an accordion).
    ///
    /// Returns the new flag value.
    ///
    /// # Errors
    ///
    /// Returns `SprintNotFound` if the sprint doesn't exist.
    pub fn toggle_expanded(&mut self, sprint_id: &str) -> Result<bool> {
        let sprint = self
            .sprints
            .get_mut(sprint_id)
            .ok_or_else(|| BoardError::SprintNotFound {
                id: sprint_id.to_string(),
            })?;
        sprint.expanded = !sprint.expanded;
        Ok(sprint.expanded)
    }

    /// Set the expansion flag of one sprint directly.
    ///
    /// # Errors
    ///
    /// Returns `SprintNotFound` if the sprint doesn't exist.
    pub fn set_expanded(&mut self, sprint_id: &str, expanded: bool) -> Result<()> {
        let sprint = self
            .sprints
            .get_mut(sprint_id)
            .ok_or_else(|| BoardError::SprintNotFound {
                id: sprint_id.to_string(),
            })?;
        sprint.expanded = expanded;
        Ok(())
    }

    /// Flip the task drill-down flag of one story; returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `StoryNotFound` if the story doesn't exist.
    pub fn toggle_show_tasks(&mut self, story_id: &str) -> Result<bool> {
        let story = self
            .stories
            .get_mut(story_id)
            .ok_or_else(|| BoardError::StoryNotFound {
                id: story_id.to_string(),
            })?;
        story.show_tasks = !story.show_tasks;
        Ok(story.show_tasks)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn story(&self, id: &str) -> Option<&UserStory> {
        self.stories.get(id)
    }

    #[must_use]
    pub fn sprint(&self, id: &str) -> Option<&Sprint> {
        self.sprints.get(id)
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    #[must_use]
    pub fn has_sprint(&self, id: &str) -> bool {
        self.sprints.contains_key(id)
    }

    /// All stories in insertion order.
    pub fn stories(&self) -> impl Iterator<Item = &UserStory> {
        self.stories.values()
    }

    /// All sprints in insertion order.
    pub fn sprints(&self) -> impl Iterator<Item = &Sprint> {
        self.sprints.values()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Ids of every currently expanded sprint, in insertion order.
    #[must_use]
    pub fn expanded_sprint_ids(&self) -> Vec<String> {
        self.sprints
            .values()
            .filter(|s| s.expanded)
            .map(|s| s.id.clone())
            .collect()
    }

    #[must_use]
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    #[must_use]
    pub fn sprint_count(&self) -> usize {
        self.sprints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty() && self.sprints.is_empty() && self.tasks.is_empty()
    }
}
