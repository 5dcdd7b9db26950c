//! `board-lib` — In-process sprint-board state library.
//!
//! Models a backlog page as a single state container: an insertion-ordered
//! item store, a drag-and-drop reassignment engine, and a reducer-style
//! controller that turns UI signals into follow-up fetch effects. Data is
//! held in memory and persisted via JSONL files.
//!
//! # Quick Start
//!
//! ```
//! use board_lib::{Action, BacklogState, ContainerId, FilterUpdate};
//!
//! let mut state = BacklogState::new();
//!
//! // Dispatch UI signals; execute the returned effects against a ReadApi.
//! let effects = state.reduce(Action::LoadSprints);
//! assert_eq!(effects.len(), 2); // fetch sprints + backlog
//!
//! // Drag-end: move a story into a sprint.
//! state.reduce(Action::MoveStory {
//!     story_id: "us-1".into(),
//!     target: ContainerId::Sprint("sp-1".into()),
//! });
//!
//! // Filter edits are debounced via generation-stamped timers.
//! let timer = state.reduce(Action::FilterChanged(FilterUpdate::search("auth")));
//! assert_eq!(timer.len(), 1);
//! ```

pub mod api;
pub mod controller;
pub mod engine;
pub mod error;
pub mod fixtures;
pub mod jsonl;
pub mod model;
pub mod query;
pub mod store;
pub mod util;
pub mod view;

pub use api::{MemoryApi, NewSprint, NewUserStory, ReadApi, WriteApi};
pub use controller::{Action, BacklogState, Effect, ExpandPolicy, LoadingKind, DEBOUNCE};
pub use engine::{apply_move, MoveOutcome};
pub use error::{BoardError, Result};
pub use model::{ContainerId, Priority, Sprint, SprintStatus, StoryStatus, Task, UserStory};
pub use query::{FilterState, FilterUpdate, StoryQuery};
pub use store::ItemStore;
