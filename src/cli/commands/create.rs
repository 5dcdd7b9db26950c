//! Create commands (sprints and stories).

use anyhow::{Context, Result};
use board_lib::{MemoryApi, NewSprint, NewUserStory, Priority, SprintStatus, WriteApi};
use chrono::NaiveDate;

use crate::board::Session;
use crate::cli::{CreateSprintArgs, CreateStoryArgs};
use crate::format::{format_sprint_line, format_story_line};

fn parse_date(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid --{flag} date '{value}', expected YYYY-MM-DD"))
}

/// Execute the create-sprint command.
///
/// # Errors
///
/// Returns an error on invalid dates/status or if the save fails.
pub fn execute_sprint(args: &CreateSprintArgs, json: bool) -> Result<()> {
    let mut session = Session::open()?;

    let new = NewSprint {
        name: args.name.clone(),
        start_date: parse_date(&args.start, "start")?,
        end_date: parse_date(&args.end, "end")?,
        status: args.status.parse::<SprintStatus>()?,
    };

    let mut api = MemoryApi::new(std::mem::take(&mut session.state.store));
    let sprint = api.create_sprint(new)?;
    session.state.store = api.into_store();
    session.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sprint)?);
    } else {
        println!("Created {}", format_sprint_line(&sprint));
    }
    Ok(())
}

/// Execute the create-story command.
///
/// # Errors
///
/// Returns an error on invalid priority, unknown sprint, or save failure.
pub fn execute_story(args: &CreateStoryArgs, json: bool) -> Result<()> {
    let mut session = Session::open()?;

    let new = NewUserStory {
        title: args.title.clone(),
        description: args.description.clone(),
        story_points: args.points,
        priority: args.priority.parse::<Priority>()?,
        sprint_id: args.sprint.clone(),
        assignee: args.assignee.clone(),
        tags: args.tags.clone(),
    };

    let mut api = MemoryApi::new(std::mem::take(&mut session.state.store));
    let story = api.create_user_story(new)?;
    session.state.store = api.into_store();
    session.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&story)?);
    } else {
        println!("Created {}", format_story_line(&story));
    }
    Ok(())
}
