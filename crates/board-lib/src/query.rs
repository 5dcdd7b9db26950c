//! Filter and query types.
//!
//! `FilterState` is what the user has typed into the filter bar; it applies
//! uniformly to every expanded sprint and never to the backlog view.
//! `StoryQuery` is the per-sprint fetch payload derived from it.

use serde::{Deserialize, Serialize};

use crate::model::{Priority, UserStory};

/// Current filter-bar state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Substring match against story titles (case-insensitive).
    #[serde(default)]
    pub search_text: String,
    /// Exact priority match, or `None` for all priorities.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Substring match against the assignee, or `None` for everyone.
    #[serde(default)]
    pub assignee: Option<String>,
}

impl FilterState {
    /// Whether any filter is in effect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.priority.is_none() && self.assignee.is_none()
    }

    /// Apply a partial update, keeping fields the update does not mention.
    pub fn apply(&mut self, update: &FilterUpdate) {
        if let Some(ref text) = update.search_text {
            self.search_text.clone_from(text);
        }
        if let Some(ref priority) = update.priority {
            self.priority = *priority;
        }
        if let Some(ref assignee) = update.assignee {
            self.assignee.clone_from(assignee);
        }
    }

    /// The fetch payload for one sprint under this filter.
    #[must_use]
    pub fn query_for(&self, sprint_id: &str) -> StoryQuery {
        StoryQuery {
            sprint_id: Some(sprint_id.to_string()),
            search_text: self.search_text.clone(),
            priority: self.priority,
            assignee: self.assignee.clone(),
        }
    }
}

/// Partial filter edit. Outer `None` keeps the field; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search_text: Option<String>,
    pub priority: Option<Option<Priority>>,
    pub assignee: Option<Option<String>>,
}

impl FilterUpdate {
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search_text.is_none() && self.priority.is_none() && self.assignee.is_none()
    }
}

/// Read-API filter payload for `list_user_stories`.
///
/// `sprint_id = None` selects backlog stories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryQuery {
    pub sprint_id: Option<String>,
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
}

impl StoryQuery {
    /// Select every story in a container, unfiltered.
    #[must_use]
    pub fn container(sprint_id: Option<&str>) -> Self {
        Self {
            sprint_id: sprint_id.map(ToString::to_string),
            ..Self::default()
        }
    }

    /// Whether a story matches this query.
    ///
    /// Title search is a case-insensitive substring match; priority is an
    /// exact match; assignee is a case-insensitive substring match, and a
    /// story without an assignee never matches an assignee filter.
    #[must_use]
    pub fn matches(&self, story: &UserStory) -> bool {
        if story.sprint_id.as_deref() != self.sprint_id.as_deref() {
            return false;
        }

        if !self.search_text.is_empty()
            && !story
                .title
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
        {
            return false;
        }

        if let Some(priority) = self.priority {
            if story.priority != priority {
                return false;
            }
        }

        if let Some(ref assignee) = self.assignee {
            let matched = story
                .assignee
                .as_ref()
                .is_some_and(|a| a.to_lowercase().contains(&assignee.to_lowercase()));
            if !matched {
                return false;
            }
        }

        true
    }
}
