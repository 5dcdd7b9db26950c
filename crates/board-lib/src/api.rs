//! Data-source traits and the in-memory implementation.
//!
//! The controller never talks to a data source directly; a driver executes
//! its effects against a [`ReadApi`] and feeds the results back as actions.
//! [`MemoryApi`] backs tests and the demo, and can be switched into a
//! failing mode to exercise the error path.

use tracing::debug;

use crate::error::{BoardError, Result};
use crate::model::{Priority, Sprint, SprintStatus, StoryStatus, Task, UserStory};
use crate::query::StoryQuery;
use crate::store::ItemStore;
use crate::util;

/// Read side of the board data source.
pub trait ReadApi {
    /// All sprints, in board order.
    fn list_sprints(&self) -> Result<Vec<Sprint>>;

    /// Stories matching a query (container plus filters).
    fn list_user_stories(&self, query: &StoryQuery) -> Result<Vec<UserStory>>;

    /// Tasks belonging to one story.
    fn list_tasks(&self, story_id: &str) -> Result<Vec<Task>>;
}

/// Write side of the board data source.
pub trait WriteApi {
    fn create_sprint(&mut self, new: NewSprint) -> Result<Sprint>;

    fn create_user_story(&mut self, new: NewUserStory) -> Result<UserStory>;
}

/// Payload for creating a sprint. The id is assigned by the data source.
#[derive(Debug, Clone)]
pub struct NewSprint {
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: SprintStatus,
}

/// Payload for creating a user story.
#[derive(Debug, Clone, Default)]
pub struct NewUserStory {
    pub title: String,
    pub description: String,
    pub story_points: u32,
    pub priority: Priority,
    /// `None` places the story in the backlog.
    pub sprint_id: Option<String>,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
}

/// In-memory data source over an [`ItemStore`].
#[derive(Debug, Default)]
pub struct MemoryApi {
    store: ItemStore,
    fail_reason: Option<String>,
}

impl MemoryApi {
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            fail_reason: None,
        }
    }

    /// Make every call fail with the given reason until cleared.
    pub fn fail_with(&mut self, reason: impl Into<String>) {
        self.fail_reason = Some(reason.into());
    }

    pub fn recover(&mut self) {
        self.fail_reason = None;
    }

    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    #[must_use]
    pub fn into_store(self) -> ItemStore {
        self.store
    }

    fn check_up(&self) -> Result<()> {
        match &self.fail_reason {
            Some(reason) => Err(BoardError::fetch(reason.clone())),
            None => Ok(()),
        }
    }
}

impl ReadApi for MemoryApi {
    fn list_sprints(&self) -> Result<Vec<Sprint>> {
        self.check_up()?;
        Ok(self.store.sprints().cloned().collect())
    }

    fn list_user_stories(&self, query: &StoryQuery) -> Result<Vec<UserStory>> {
        self.check_up()?;
        let stories: Vec<UserStory> = self
            .store
            .stories()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        debug!(
            sprint_id = query.sprint_id.as_deref().unwrap_or("backlog"),
            count = stories.len(),
            "stories listed"
        );
        Ok(stories)
    }

    fn list_tasks(&self, story_id: &str) -> Result<Vec<Task>> {
        self.check_up()?;
        Ok(self
            .store
            .tasks()
            .filter(|t| t.user_story_id == story_id)
            .cloned()
            .collect())
    }
}

impl WriteApi for MemoryApi {
    fn create_sprint(&mut self, new: NewSprint) -> Result<Sprint> {
        self.check_up()?;
        let id = util::generate_id("sp", &new.name, self.store.sprint_count(), |id| {
            self.store.sprint(id).is_some()
        });
        let sprint = Sprint {
            id,
            name: new.name,
            start_date: new.start_date,
            end_date: new.end_date,
            status: new.status,
            expanded: false,
        };
        self.store.insert_sprint(sprint.clone())?;
        Ok(sprint)
    }

    fn create_user_story(&mut self, new: NewUserStory) -> Result<UserStory> {
        self.check_up()?;
        if let Some(ref sprint_id) = new.sprint_id {
            if !self.store.has_sprint(sprint_id) {
                return Err(BoardError::SprintNotFound {
                    id: sprint_id.clone(),
                });
            }
        }
        let id = util::generate_id("us", &new.title, self.store.story_count(), |id| {
            self.store.story(id).is_some()
        });
        let story = UserStory {
            id,
            title: new.title,
            description: new.description,
            story_points: new.story_points,
            priority: new.priority,
            status: StoryStatus::Todo,
            assignee: new.assignee,
            tags: new.tags,
            sprint_id: new.sprint_id,
            show_tasks: false,
        };
        self.store.insert_story(story.clone())?;
        Ok(story)
    }
}
