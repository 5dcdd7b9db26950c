//! Sprints command implementation.
//!
//! Prints the whole board: backlog first, then each sprint header with
//! story lines under the expanded ones.

use anyhow::Result;
use board_lib::{view, ContainerId};

use crate::board::Session;
use crate::format::{format_sprint_line, format_story_line, BoardView, SprintWithStories};

/// Execute the sprints command.
///
/// # Errors
///
/// Returns an error if the board cannot be opened.
pub fn execute(json: bool) -> Result<()> {
    let session = Session::open()?;
    let state = &session.state;

    if json {
        let view = BoardView {
            backlog: state
                .projection(&ContainerId::Backlog)
                .into_iter()
                .cloned()
                .collect(),
            sprints: state
                .store
                .sprints()
                .map(|sprint| SprintWithStories {
                    sprint: sprint.clone(),
                    stories: state
                        .projection(&ContainerId::Sprint(sprint.id.clone()))
                        .into_iter()
                        .cloned()
                        .collect(),
                })
                .collect(),
            error: state.error.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let backlog = state.projection(&ContainerId::Backlog);
    println!("Backlog ({} stories)", backlog.len());
    for story in backlog {
        println!("  {}", format_story_line(story));
    }

    for sprint in state.store.sprints() {
        let container = ContainerId::Sprint(sprint.id.clone());
        let stories = state.projection(&container);
        println!(
            "\n{} ({} stories, {} pts)",
            format_sprint_line(sprint),
            stories.len(),
            view::container_points(&state.store, &container)
        );
        if sprint.expanded {
            for story in stories {
                println!("  {}", format_story_line(story));
            }
        }
    }

    Ok(())
}
