//! Reassignment engine.
//!
//! Translates a raw "move" signal (story id + destination container) into
//! exactly one item-store mutation. The drag gesture itself is someone
//! else's problem; by the time a signal reaches here it is just ids.

use tracing::{debug, warn};

use crate::model::ContainerId;
use crate::store::ItemStore;

/// Result of applying a move signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The story changed containers.
    Moved {
        from: ContainerId,
        to: ContainerId,
    },
    /// The destination was the story's current container; nothing changed.
    NoOp,
    /// The story id is unknown — the gesture is assumed stale (e.g. the
    /// story was deleted mid-drag). Logged, never fatal.
    UnknownStory,
}

/// Apply a move signal to the store.
///
/// Covers the three cases: backlog → sprint, sprint → backlog, and
/// sprint → different sprint (set directly, no intermediate backlog state).
/// A move to the story's current container is a no-op and emits nothing.
///
/// The destination is not validated against the sprint collection; callers
/// derive destination ids from the current sprints before invoking this.
pub fn apply_move(store: &mut ItemStore, story_id: &str, target: &ContainerId) -> MoveOutcome {
    let Some(story) = store.story(story_id) else {
        warn!(story_id, target = %target, "ignoring move for unknown story");
        return MoveOutcome::UnknownStory;
    };

    let from = story.container();
    if from == *target {
        debug!(story_id, container = %target, "move to current container is a no-op");
        return MoveOutcome::NoOp;
    }

    // The store lookup above guarantees this cannot fail.
    if store.move_to_sprint(story_id, target.sprint_id()).is_err() {
        return MoveOutcome::UnknownStory;
    }

    MoveOutcome::Moved {
        from,
        to: target.clone(),
    }
}
