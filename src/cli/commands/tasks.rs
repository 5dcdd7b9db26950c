//! Tasks command implementation.
//!
//! Toggles a story's task drill-down and prints it when open.

use anyhow::{bail, Result};
use board_lib::{view, Action};

use crate::board::Session;
use crate::cli::TasksArgs;
use crate::driver;
use crate::format::{format_story_line, format_task_line, StoryWithTasks};

/// Execute the tasks command.
///
/// # Errors
///
/// Returns an error if the board cannot be opened, the story is unknown,
/// or the save fails.
pub fn execute(args: &TasksArgs, json: bool) -> Result<()> {
    let mut session = Session::open()?;
    if session.state.store.story(&args.story_id).is_none() {
        bail!("unknown story: {}", args.story_id);
    }

    let api = session.api();
    driver::dispatch(
        &mut session.state,
        &api,
        Action::ToggleTasks {
            story_id: args.story_id.clone(),
        },
    );
    session.save()?;

    let story = session
        .state
        .store
        .story(&args.story_id)
        .ok_or_else(|| anyhow::anyhow!("story disappeared: {}", args.story_id))?;
    let tasks = view::tasks_for(&session.state.store, &args.story_id);

    if json {
        let out = StoryWithTasks {
            story: story.clone(),
            tasks: if story.show_tasks {
                tasks.into_iter().cloned().collect()
            } else {
                Vec::new()
            },
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", format_story_line(story));
    if story.show_tasks {
        if tasks.is_empty() {
            println!("    (no tasks)");
        }
        for task in tasks {
            println!("{}", format_task_line(task));
        }
    } else {
        println!("    (tasks hidden)");
    }

    Ok(())
}
