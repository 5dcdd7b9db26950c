//! Stories command implementation.
//!
//! Lists the stories in one container, in board order.

use anyhow::{bail, Result};
use board_lib::{ContainerId, UserStory};

use crate::board::Session;
use crate::cli::StoriesArgs;
use crate::format::format_story_line;

/// Execute the stories command.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or the sprint is unknown.
pub fn execute(args: &StoriesArgs, json: bool) -> Result<()> {
    let session = Session::open()?;

    let container: ContainerId = args.container.parse()?;
    if let Some(sprint_id) = container.sprint_id() {
        if !session.state.store.has_sprint(sprint_id) {
            bail!("unknown sprint: {sprint_id}");
        }
    }

    let stories = session.state.projection(&container);

    if json {
        let owned: Vec<UserStory> = stories.into_iter().cloned().collect();
        println!("{}", serde_json::to_string_pretty(&owned)?);
        return Ok(());
    }

    if stories.is_empty() {
        println!("No stories in {container}.");
    } else {
        for story in &stories {
            println!("{}", format_story_line(story));
        }
        println!("\n{} story(ies)", stories.len());
    }

    Ok(())
}
