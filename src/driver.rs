//! Synchronous effect execution.
//!
//! One-shot CLI commands have no event loop, so effects run to quiescence
//! inline: fetches hit the data source immediately and debounce timers
//! fire at once with their own generation. Fetch errors are fed back as
//! `FetchFailed` actions rather than aborting, matching how the controller
//! expects failures to arrive.

use std::collections::VecDeque;

use board_lib::{Action, BacklogState, Effect, ReadApi, StoryQuery};
use tracing::debug;

/// Dispatch one action and drain every effect it (transitively) produces.
pub fn dispatch(state: &mut BacklogState, api: &impl ReadApi, action: Action) {
    let mut queue: VecDeque<Effect> = state.reduce(action).into();

    while let Some(effect) = queue.pop_front() {
        debug!(?effect, "executing effect");
        let follow_up = match effect {
            Effect::FetchSprints => match api.list_sprints() {
                Ok(sprints) => Action::SprintsLoaded(sprints),
                Err(e) => Action::FetchFailed {
                    reason: e.to_string(),
                },
            },
            Effect::FetchBacklog => match api.list_user_stories(&StoryQuery::container(None)) {
                Ok(stories) => Action::BacklogLoaded(stories),
                Err(e) => Action::FetchFailed {
                    reason: e.to_string(),
                },
            },
            Effect::FetchStories { sprint_id, query } => match api.list_user_stories(&query) {
                Ok(stories) => Action::StoriesLoaded { sprint_id, stories },
                Err(e) => Action::FetchFailed {
                    reason: e.to_string(),
                },
            },
            Effect::FetchTasks { story_id } => match api.list_tasks(&story_id) {
                Ok(tasks) => Action::TasksLoaded { story_id, tasks },
                Err(e) => Action::FetchFailed {
                    reason: e.to_string(),
                },
            },
            // No event loop here: the timer fires immediately.
            Effect::ScheduleSearch { generation, .. } => Action::SearchDue { generation },
        };
        queue.extend(state.reduce(follow_up));
    }
}
