//! Search command implementation.
//!
//! Applies a filter the way the board does: the filter reaches only
//! expanded sprints, and the backlog is never filtered. One-shot commands
//! have no keystroke stream, so the debounce fires immediately.

use anyhow::Result;
use board_lib::{Action, ContainerId, FilterUpdate, Priority};

use crate::board::Session;
use crate::cli::SearchArgs;
use crate::driver;
use crate::format::{format_sprint_line, format_story_line, BoardView, SprintWithStories};

/// Build the filter edit from the flags.
///
/// Without `--clear`, omitted flags leave the corresponding filter field
/// alone; with it, they reset the field (the `Some(None)` clear form).
fn build_update(args: &SearchArgs) -> Result<FilterUpdate> {
    let priority = args
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()?;

    let update = if args.clear {
        FilterUpdate {
            search_text: Some(args.text.clone().unwrap_or_default()),
            priority: Some(priority),
            assignee: Some(args.assignee.clone()),
        }
    } else {
        FilterUpdate {
            search_text: args.text.clone(),
            priority: priority.map(Some),
            assignee: args.assignee.clone().map(Some),
        }
    };
    Ok(update)
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or the priority value
/// is invalid.
pub fn execute(args: &SearchArgs, json: bool) -> Result<()> {
    let mut session = Session::open()?;

    let update = build_update(args)?;

    let api = session.api();
    driver::dispatch(&mut session.state, &api, Action::FilterChanged(update));

    let state = &session.state;
    // Merges are additive, so project through the filter for display.
    let matching = |sprint_id: &str| -> Vec<_> {
        let query = state.filter.query_for(sprint_id);
        state
            .store
            .stories()
            .filter(|s| query.matches(s))
            .collect()
    };

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
                .filter(|s| s.expanded)
                .map(|sprint| SprintWithStories {
                    sprint: sprint.clone(),
                    stories: matching(&sprint.id).into_iter().cloned().collect(),
                })
                .collect(),
            error: state.error.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let mut total = 0usize;
    for sprint in state.store.sprints().filter(|s| s.expanded) {
        println!("{}", format_sprint_line(sprint));
        for story in matching(&sprint.id) {
            println!("  {}", format_story_line(story));
            total += 1;
        }
    }
    println!("\n{total} matching story(ies) across expanded sprints");

    let collapsed = state.store.sprints().filter(|s| !s.expanded).count();
    if collapsed > 0 {
        println!("({collapsed} collapsed sprint(s) not searched)");
    }

    Ok(())
}
