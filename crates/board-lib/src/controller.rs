//! Expansion/search controller.
//!
//! A single owned aggregate (`BacklogState`) with a reducer-style mutation
//! API: UI signals come in as [`Action`] values, exhaustively matched, and
//! any follow-up work leaves as [`Effect`] values for a driver to execute.
//! Fetch completions come back in as actions, possibly out of order; merges
//! are last-write-wins per story id.
//!
//! Expansion state couples to filter state on purpose: a filter edit
//! re-runs the fetch for every currently Expanded sprint and is invisible
//! to a Collapsed sprint until it is expanded.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, warn};

use crate::engine::{self, MoveOutcome};
use crate::model::{ContainerId, Sprint, Task, UserStory};
use crate::query::{FilterState, FilterUpdate, StoryQuery};
use crate::store::ItemStore;
use crate::view;

/// Default delay between the last filter keystroke and the re-fetch.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Which kind of fetch is currently in flight (coarse, board-global).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingKind {
    Sprints,
    Stories,
    Tasks,
}

/// One dispatched UI signal or fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load (or reload) the sprint collection and the backlog.
    LoadSprints,
    /// Sprint fetch resolved.
    SprintsLoaded(Vec<Sprint>),
    /// Backlog story fetch resolved.
    BacklogLoaded(Vec<UserStory>),
    /// Flip one sprint's Collapsed ⇄ Expanded state.
    ToggleStories { sprint_id: String },
    /// Story fetch for one sprint resolved.
    StoriesLoaded {
        sprint_id: String,
        stories: Vec<UserStory>,
    },
    /// Flip one story's task drill-down.
    ToggleTasks { story_id: String },
    /// Task fetch for one story resolved.
    TasksLoaded { story_id: String, tasks: Vec<Task> },
    /// Partial filter-bar edit.
    FilterChanged(FilterUpdate),
    /// A debounce timer fired. Stale generations are ignored.
    SearchDue { generation: u64 },
    /// Drag-end signal: move a story to a container.
    MoveStory {
        story_id: String,
        target: ContainerId,
    },
    /// Any fetch rejected.
    FetchFailed { reason: String },
}

/// Follow-up work the reducer asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSprints,
    /// Fetch the backlog story list (always unfiltered).
    FetchBacklog,
    FetchStories { sprint_id: String, query: StoryQuery },
    FetchTasks { story_id: String },
    /// Arm (or re-arm) the search debounce timer. A newer generation
    /// supersedes any pending one.
    ScheduleSearch { generation: u64, delay: Duration },
}

/// Initial-expansion policy: how many sprints open by default once the
/// sprint collection first loads. Defaults to two.
#[derive(Debug, Clone, Copy)]
pub struct ExpandPolicy {
    pub expand_first: usize,
}

impl Default for ExpandPolicy {
    fn default() -> Self {
        Self { expand_first: 2 }
    }
}

/// The backlog page's single state container.
#[derive(Debug)]
pub struct BacklogState {
    pub store: ItemStore,
    pub filter: FilterState,
    pub loading: Option<LoadingKind>,
    /// Global error flag; set on any fetch failure, cleared by the next
    /// success. Prior data is always retained.
    pub error: Option<String>,
    policy: ExpandPolicy,
    debounce: Duration,
    loaded_sprints: HashSet<String>,
    loaded_tasks: HashSet<String>,
    generation: u64,
}

impl Default for BacklogState {
    fn default() -> Self {
        Self::new()
    }
}

impl BacklogState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(),
            filter: FilterState::default(),
            loading: None,
            error: None,
            policy: ExpandPolicy::default(),
            debounce: DEBOUNCE,
            loaded_sprints: HashSet::new(),
            loaded_tasks: HashSet::new(),
            generation: 0,
        }
    }

    /// Wrap an already-populated store (e.g. a board file loaded at
    /// startup). Sprints that already hold stories count as loaded.
    #[must_use]
    pub fn from_store(store: ItemStore) -> Self {
        let loaded_sprints = store
            .sprints()
            .filter(|sprint| {
                store
                    .stories()
                    .any(|s| s.sprint_id.as_deref() == Some(sprint.id.as_str()))
            })
            .map(|s| s.id.clone())
            .collect();
        let loaded_tasks = store
            .stories()
            .filter(|story| store.tasks().any(|t| t.user_story_id == story.id))
            .map(|s| s.id.clone())
            .collect();
        Self {
            store,
            loaded_sprints,
            loaded_tasks,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ExpandPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The generation a `SearchDue` must carry to be considered current.
    #[must_use]
    pub const fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Stories in a container, in insertion order.
    #[must_use]
    pub fn projection(&self, container: &ContainerId) -> Vec<&UserStory> {
        view::project(&self.store, container)
    }

    /// Move a story; the engine ignores unknown ids and no-op moves.
    pub fn move_story(&mut self, story_id: &str, target: &ContainerId) -> MoveOutcome {
        engine::apply_move(&mut self.store, story_id, target)
    }

    /// Process one action and return the effects it demands.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::LoadSprints => {
                self.loading = Some(LoadingKind::Sprints);
                self.error = None;
                vec![Effect::FetchSprints, Effect::FetchBacklog]
            }

            Action::SprintsLoaded(sprints) => {
                let first_load = self.store.sprint_count() == 0;
                self.store.upsert_sprints(sprints);
                self.loading = None;
                self.error = None;
                if first_load {
                    self.apply_expand_policy()
                } else {
                    Vec::new()
                }
            }

            Action::BacklogLoaded(stories) => {
                debug!(count = stories.len(), "backlog merged");
                self.store.upsert_stories(stories);
                self.loading = None;
                self.error = None;
                Vec::new()
            }

            Action::ToggleStories { sprint_id } => self.toggle_stories(&sprint_id),

            Action::StoriesLoaded { sprint_id, stories } => {
                debug!(sprint_id, count = stories.len(), "stories merged");
                self.store.upsert_stories(stories);
                self.loaded_sprints.insert(sprint_id);
                self.loading = None;
                self.error = None;
                Vec::new()
            }

            Action::ToggleTasks { story_id } => self.toggle_tasks(&story_id),

            Action::TasksLoaded { story_id, tasks } => {
                self.store.upsert_tasks(tasks);
                self.loaded_tasks.insert(story_id);
                self.loading = None;
                self.error = None;
                Vec::new()
            }

            Action::FilterChanged(update) => {
                if update.is_empty() {
                    return Vec::new();
                }
                self.filter.apply(&update);
                self.generation = self.generation.wrapping_add(1);
                vec![Effect::ScheduleSearch {
                    generation: self.generation,
                    delay: self.debounce,
                }]
            }

            Action::SearchDue { generation } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "stale debounce timer ignored"
                    );
                    return Vec::new();
                }
                self.search_expanded()
            }

            Action::MoveStory { story_id, target } => {
                self.move_story(&story_id, &target);
                Vec::new()
            }

            Action::FetchFailed { reason } => {
                warn!(reason, "fetch failed; keeping previously loaded data");
                self.loading = None;
                self.error = Some(reason);
                Vec::new()
            }
        }
    }

    /// Expand the first N sprints per policy and fetch their stories.
    fn apply_expand_policy(&mut self) -> Vec<Effect> {
        let ids: Vec<String> = self
            .store
            .sprints()
            .take(self.policy.expand_first)
            .map(|s| s.id.clone())
            .collect();

        let mut effects = Vec::new();
        for id in ids {
            // Sprint ids come straight from the store; set_expanded cannot
            // miss here.
            let _ = self.store.set_expanded(&id, true);
            if !self.loaded_sprints.contains(&id) {
                effects.push(Effect::FetchStories {
                    query: self.filter.query_for(&id),
                    sprint_id: id,
                });
            }
        }
        if !effects.is_empty() {
            self.loading = Some(LoadingKind::Stories);
        }
        effects
    }

    fn toggle_stories(&mut self, sprint_id: &str) -> Vec<Effect> {
        let expanded = match self.store.toggle_expanded(sprint_id) {
            Ok(expanded) => expanded,
            Err(e) => {
                warn!(sprint_id, error = %e, "ignoring toggle for unknown sprint");
                return Vec::new();
            }
        };

        if expanded && !self.loaded_sprints.contains(sprint_id) {
            self.loading = Some(LoadingKind::Stories);
            self.error = None;
            return vec![Effect::FetchStories {
                sprint_id: sprint_id.to_string(),
                query: self.filter.query_for(sprint_id),
            }];
        }
        Vec::new()
    }

    fn toggle_tasks(&mut self, story_id: &str) -> Vec<Effect> {
        let shown = match self.store.toggle_show_tasks(story_id) {
            Ok(shown) => shown,
            Err(e) => {
                warn!(story_id, error = %e, "ignoring task toggle for unknown story");
                return Vec::new();
            }
        };

        if shown && !self.loaded_tasks.contains(story_id) {
            self.loading = Some(LoadingKind::Tasks);
            self.error = None;
            return vec![Effect::FetchTasks {
                story_id: story_id.to_string(),
            }];
        }
        Vec::new()
    }

    /// Re-issue the story fetch for every currently expanded sprint.
    fn search_expanded(&mut self) -> Vec<Effect> {
        let effects: Vec<Effect> = self
            .store
            .expanded_sprint_ids()
            .into_iter()
            .map(|sprint_id| Effect::FetchStories {
                query: self.filter.query_for(&sprint_id),
                sprint_id,
            })
            .collect();

        if effects.is_empty() {
            debug!("no expanded sprints to search");
        } else {
            self.loading = Some(LoadingKind::Stories);
            self.error = None;
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, SprintStatus};
    use chrono::NaiveDate;

    fn make_sprint(id: &str) -> Sprint {
        Sprint {
            id: id.to_string(),
            name: format!("Sprint {id}"),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            status: SprintStatus::Planning,
            expanded: false,
        }
    }

    fn make_story(id: &str, sprint: Option<&str>) -> UserStory {
        UserStory {
            id: id.to_string(),
            title: format!("Story {id}"),
            sprint_id: sprint.map(ToString::to_string),
            ..Default::default()
        }
    }

    /// Expanded sprint ids mentioned by a batch of fetch effects.
    fn fetched_sprints(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::FetchStories { sprint_id, .. } => Some(sprint_id.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_load_sprints_flow() {
        let mut state = BacklogState::new();
        let effects = state.reduce(Action::LoadSprints);
        assert_eq!(effects, vec![Effect::FetchSprints, Effect::FetchBacklog]);
        assert_eq!(state.loading, Some(LoadingKind::Sprints));

        let effects = state.reduce(Action::SprintsLoaded(vec![
            make_sprint("sp-a"),
            make_sprint("sp-b"),
            make_sprint("sp-c"),
        ]));

        // Policy: first two expand and fetch.
        assert_eq!(fetched_sprints(&effects), vec!["sp-a", "sp-b"]);
        assert!(state.store.sprint("sp-a").unwrap().expanded);
        assert!(state.store.sprint("sp-b").unwrap().expanded);
        assert!(!state.store.sprint("sp-c").unwrap().expanded);
    }

    #[test]
    fn test_expand_policy_applies_only_on_first_load() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 1 });
        state.reduce(Action::SprintsLoaded(vec![make_sprint("sp-a")]));
        state.reduce(Action::StoriesLoaded {
            sprint_id: "sp-a".to_string(),
            stories: vec![],
        });
        // Collapse manually, then reload the sprint collection.
        state.store.set_expanded("sp-a", false).unwrap();
        let effects = state.reduce(Action::SprintsLoaded(vec![make_sprint("sp-a")]));
        assert!(effects.is_empty());
        assert!(!state.store.sprint("sp-a").unwrap().expanded);
    }

    #[test]
    fn test_toggle_fetches_once() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 0 });
        state.reduce(Action::SprintsLoaded(vec![make_sprint("sp-a")]));

        let effects = state.reduce(Action::ToggleStories {
            sprint_id: "sp-a".to_string(),
        });
        assert_eq!(fetched_sprints(&effects), vec!["sp-a"]);

        state.reduce(Action::StoriesLoaded {
            sprint_id: "sp-a".to_string(),
            stories: vec![make_story("us-1", Some("sp-a"))],
        });

        // Collapse, expand again: already loaded, no fetch.
        assert!(state
            .reduce(Action::ToggleStories {
                sprint_id: "sp-a".to_string(),
            })
            .is_empty());
        let effects = state.reduce(Action::ToggleStories {
            sprint_id: "sp-a".to_string(),
        });
        assert!(effects.is_empty());
        assert!(state.store.sprint("sp-a").unwrap().expanded);
    }

    #[test]
    fn test_toggle_unknown_sprint_ignored() {
        let mut state = BacklogState::new();
        assert!(state
            .reduce(Action::ToggleStories {
                sprint_id: "sp-ghost".to_string(),
            })
            .is_empty());
    }

    #[test]
    fn test_toggle_does_not_disturb_other_sprints() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 0 });
        state.reduce(Action::SprintsLoaded(vec![
            make_sprint("sp-x"),
            make_sprint("sp-y"),
        ]));
        state.reduce(Action::ToggleStories {
            sprint_id: "sp-x".to_string(),
        });
        assert!(state.store.sprint("sp-x").unwrap().expanded);
        assert!(!state.store.sprint("sp-y").unwrap().expanded);
    }

    #[test]
    fn test_filter_edit_schedules_debounced_search() {
        let mut state = BacklogState::new();
        let effects = state.reduce(Action::FilterChanged(FilterUpdate::search("aut")));
        assert_eq!(
            effects,
            vec![Effect::ScheduleSearch {
                generation: 1,
                delay: DEBOUNCE,
            }]
        );
        assert_eq!(state.filter.search_text, "aut");
    }

    #[test]
    fn test_stale_debounce_generation_ignored() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 0 });
        state.reduce(Action::SprintsLoaded(vec![make_sprint("sp-a")]));
        state.reduce(Action::ToggleStories {
            sprint_id: "sp-a".to_string(),
        });

        state.reduce(Action::FilterChanged(FilterUpdate::search("a")));
        state.reduce(Action::FilterChanged(FilterUpdate::search("au")));

        // First timer fires after being superseded: nothing happens.
        assert!(state.reduce(Action::SearchDue { generation: 1 }).is_empty());
        // Current timer re-fetches the expanded sprint.
        let effects = state.reduce(Action::SearchDue { generation: 2 });
        assert_eq!(fetched_sprints(&effects), vec!["sp-a"]);
    }

    #[test]
    fn test_filter_searches_expanded_sprints_only() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 0 });
        state.reduce(Action::SprintsLoaded(vec![
            make_sprint("A"),
            make_sprint("B"),
            make_sprint("C"),
        ]));
        for id in ["A", "B"] {
            state.reduce(Action::ToggleStories {
                sprint_id: id.to_string(),
            });
            state.reduce(Action::StoriesLoaded {
                sprint_id: id.to_string(),
                stories: vec![],
            });
        }
        // C stays collapsed but has stories from an earlier session.
        state
            .store
            .upsert_stories(vec![make_story("us-c1", Some("C"))]);

        state.reduce(Action::FilterChanged(FilterUpdate {
            priority: Some(Some(Priority::High)),
            ..Default::default()
        }));
        let effects = state.reduce(Action::SearchDue {
            generation: state.current_generation(),
        });

        assert_eq!(fetched_sprints(&effects), vec!["A", "B"]);
        for effect in &effects {
            if let Effect::FetchStories { query, .. } = effect {
                assert_eq!(query.priority, Some(Priority::High));
            }
        }

        // Merging results for A and B leaves C's stories alone.
        state.reduce(Action::StoriesLoaded {
            sprint_id: "A".to_string(),
            stories: vec![make_story("us-a1", Some("A"))],
        });
        state.reduce(Action::StoriesLoaded {
            sprint_id: "B".to_string(),
            stories: vec![make_story("us-b1", Some("B"))],
        });
        assert_eq!(
            state
                .projection(&ContainerId::Sprint("C".to_string()))
                .len(),
            1
        );
    }

    #[test]
    fn test_fetch_failure_sets_flag_keeps_data() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 0 });
        state.reduce(Action::SprintsLoaded(vec![make_sprint("sp-a")]));
        state.reduce(Action::ToggleStories {
            sprint_id: "sp-a".to_string(),
        });
        state.reduce(Action::StoriesLoaded {
            sprint_id: "sp-a".to_string(),
            stories: vec![make_story("us-1", Some("sp-a"))],
        });

        state.reduce(Action::FetchFailed {
            reason: "connection refused".to_string(),
        });
        assert_eq!(state.error.as_deref(), Some("connection refused"));
        assert!(state.loading.is_none());
        // Stale but consistent: the earlier data is still there.
        assert_eq!(
            state
                .projection(&ContainerId::Sprint("sp-a".to_string()))
                .len(),
            1
        );

        // Next success clears the flag.
        state.reduce(Action::StoriesLoaded {
            sprint_id: "sp-a".to_string(),
            stories: vec![],
        });
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_expand_leaves_empty_list_and_error() {
        let mut state = BacklogState::new().with_policy(ExpandPolicy { expand_first: 0 });
        state.reduce(Action::SprintsLoaded(vec![make_sprint("A")]));
        let effects = state.reduce(Action::ToggleStories {
            sprint_id: "A".to_string(),
        });
        assert_eq!(fetched_sprints(&effects), vec!["A"]);

        state.reduce(Action::FetchFailed {
            reason: "boom".to_string(),
        });
        assert!(state.error.is_some());
        assert!(state
            .projection(&ContainerId::Sprint("A".to_string()))
            .is_empty());

        // No automatic retry: re-toggling is the retry path, and the sprint
        // still counts as unloaded.
        state.reduce(Action::ToggleStories {
            sprint_id: "A".to_string(),
        });
        let effects = state.reduce(Action::ToggleStories {
            sprint_id: "A".to_string(),
        });
        assert_eq!(fetched_sprints(&effects), vec!["A"]);
    }

    #[test]
    fn test_move_story_through_reducer() {
        let mut state = BacklogState::new();
        state.store.upsert_stories(vec![make_story("s1", None)]);

        let effects = state.reduce(Action::MoveStory {
            story_id: "s1".to_string(),
            target: ContainerId::Sprint("sprintA".to_string()),
        });
        assert!(effects.is_empty());
        assert_eq!(
            state.projection(&ContainerId::Sprint("sprintA".to_string()))[0].id,
            "s1"
        );
        assert!(state.projection(&ContainerId::Backlog).is_empty());
    }

    #[test]
    fn test_task_toggle_fetches_once() {
        let mut state = BacklogState::new();
        state.store.upsert_stories(vec![make_story("us-1", None)]);

        let effects = state.reduce(Action::ToggleTasks {
            story_id: "us-1".to_string(),
        });
        assert_eq!(
            effects,
            vec![Effect::FetchTasks {
                story_id: "us-1".to_string(),
            }]
        );
        state.reduce(Action::TasksLoaded {
            story_id: "us-1".to_string(),
            tasks: vec![],
        });

        state.reduce(Action::ToggleTasks {
            story_id: "us-1".to_string(),
        });
        let effects = state.reduce(Action::ToggleTasks {
            story_id: "us-1".to_string(),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_empty_filter_update_is_inert() {
        let mut state = BacklogState::new();
        assert!(state
            .reduce(Action::FilterChanged(FilterUpdate::default()))
            .is_empty());
        assert_eq!(state.current_generation(), 0);
    }

    #[test]
    fn test_from_store_marks_populated_sprints_loaded() {
        let mut store = ItemStore::new();
        store.upsert_sprints(vec![make_sprint("sp-a"), make_sprint("sp-b")]);
        store.upsert_stories(vec![make_story("us-1", Some("sp-a"))]);

        let mut state = BacklogState::from_store(store);
        // sp-a already holds stories: expanding it fetches nothing.
        assert!(state
            .reduce(Action::ToggleStories {
                sprint_id: "sp-a".to_string(),
            })
            .is_empty());
        // sp-b is empty: expanding it fetches.
        let effects = state.reduce(Action::ToggleStories {
            sprint_id: "sp-b".to_string(),
        });
        assert_eq!(fetched_sprints(&effects), vec!["sp-b"]);
    }
}
