//! Toggle command implementation.
//!
//! Expands or collapses one sprint. Expanding a sprint whose stories were
//! never loaded fetches them (in-process, from the board file snapshot)
//! before printing.

use anyhow::{bail, Result};
use board_lib::{Action, ContainerId};

use crate::board::Session;
use crate::cli::ToggleArgs;
use crate::driver;
use crate::format::{format_sprint_line, format_story_line, SprintWithStories};

/// Execute the toggle command.
///
/// # Errors
///
/// Returns an error if the board cannot be opened, the sprint is unknown,
/// or the save fails.
pub fn execute(args: &ToggleArgs, json: bool) -> Result<()> {
    let mut session = Session::open()?;
    if !session.state.store.has_sprint(&args.sprint_id) {
        bail!("unknown sprint: {}", args.sprint_id);
    }

    let api = session.api();
    driver::dispatch(
        &mut session.state,
        &api,
        Action::ToggleStories {
            sprint_id: args.sprint_id.clone(),
        },
    );
    session.save()?;

    let sprint = session
        .state
        .store
        .sprint(&args.sprint_id)
        .ok_or_else(|| anyhow::anyhow!("sprint disappeared: {}", args.sprint_id))?;
    let stories = session
        .state
        .projection(&ContainerId::Sprint(args.sprint_id.clone()));

    if json {
        let view = SprintWithStories {
            sprint: sprint.clone(),
            stories: if sprint.expanded {
                stories.into_iter().cloned().collect()
            } else {
                Vec::new()
            },
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", format_sprint_line(sprint));
    if sprint.expanded {
        for story in stories {
            println!("  {}", format_story_line(story));
        }
    }

    Ok(())
}
