//! Move command implementation.
//!
//! Reassigns a story to a sprint or back to the backlog. Unknown story
//! ids and same-container moves are reported but never fail the command,
//! matching drag-end semantics.

use anyhow::{bail, Result};
use board_lib::{ContainerId, MoveOutcome};

use crate::board::Session;
use crate::cli::MoveArgs;
use crate::format::MoveReport;

/// Execute the move command.
///
/// # Errors
///
/// Returns an error if the board cannot be opened, the destination sprint
/// is unknown, or the save fails.
pub fn execute(args: &MoveArgs, json: bool) -> Result<()> {
    let mut session = Session::open()?;

    let target: ContainerId = args.target.parse()?;
    if let Some(sprint_id) = target.sprint_id() {
        if !session.state.store.has_sprint(sprint_id) {
            bail!("unknown sprint: {sprint_id}");
        }
    }

    let outcome = session.state.move_story(&args.story_id, &target);
    if !matches!(outcome, MoveOutcome::UnknownStory) {
        session.save()?;
    }

    if json {
        let report = match &outcome {
            MoveOutcome::Moved { from, to } => MoveReport {
                story_id: args.story_id.clone(),
                moved: true,
                from: Some(from.to_string()),
                to: Some(to.to_string()),
            },
            MoveOutcome::NoOp | MoveOutcome::UnknownStory => MoveReport {
                story_id: args.story_id.clone(),
                moved: false,
                from: None,
                to: None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        MoveOutcome::Moved { from, to } => {
            println!("Moved {} from {from} to {to}", args.story_id);
        }
        MoveOutcome::NoOp => println!("{} is already in {target}", args.story_id),
        MoveOutcome::UnknownStory => println!("Ignored move: unknown story {}", args.story_id),
    }

    Ok(())
}
