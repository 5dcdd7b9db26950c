//! Command-line interface for `sprint_board`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::logging;

/// `sprint_board` (sb) - Sprint backlog board.
#[derive(Parser, Debug)]
#[command(name = "sb")]
#[command(
    author,
    version,
    about = "Sprint backlog board (JSONL-backed)",
    long_about = None,
    after_help = "Non-invasive: everything lives under .board/, no daemons."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a board workspace
    Init(InitArgs),

    /// Show the board: sprints with expanded story lists, plus the backlog
    Sprints,

    /// List stories in one container (a sprint id, or "backlog")
    Stories(StoriesArgs),

    /// Move a story to a sprint or back to the backlog (alias: mv)
    #[command(alias = "mv")]
    Move(MoveArgs),

    /// Expand or collapse a sprint's story list
    Toggle(ToggleArgs),

    /// Toggle and show a story's task drill-down
    Tasks(TasksArgs),

    /// Filter stories across expanded sprints
    Search(SearchArgs),

    /// Create a new sprint
    CreateSprint(CreateSprintArgs),

    /// Create a new user story
    CreateStory(CreateStoryArgs),

    /// Run a scripted interactive session against seeded data
    Demo(DemoArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Seed the board with sample sprints and stories
    #[arg(long)]
    pub seed: bool,

    /// Overwrite an existing board file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct StoriesArgs {
    /// Container: a sprint id, or "backlog"
    #[arg(default_value = "backlog")]
    pub container: String,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Story id
    pub story_id: String,

    /// Destination: a sprint id, or "backlog"
    pub target: String,
}

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Sprint id
    pub sprint_id: String,
}

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Story id
    pub story_id: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Title substring (case-insensitive)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Priority: high, medium, or low
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Assignee substring (unassigned stories never match)
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Reset filter fields not given, instead of keeping them
    #[arg(long)]
    pub clear: bool,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Debounce window for the scripted filter keystrokes
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,
}

#[derive(Args, Debug)]
pub struct CreateSprintArgs {
    /// Sprint name
    #[arg(short, long)]
    pub name: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Status: planning, active, or completed
    #[arg(long, default_value = "planning")]
    pub status: String,
}

#[derive(Args, Debug)]
pub struct CreateStoryArgs {
    /// Story title
    #[arg(short, long)]
    pub title: String,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Story points
    #[arg(long, default_value_t = 0)]
    pub points: u32,

    /// Priority: high, medium, or low
    #[arg(short, long, default_value = "medium")]
    pub priority: String,

    /// Destination sprint id (omit for the backlog)
    #[arg(short, long)]
    pub sprint: Option<String>,

    /// Assignee
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        Some(Commands::Init(args)) => commands::init::execute(&args),
        Some(Commands::Sprints) => commands::sprints::execute(cli.json),
        Some(Commands::Stories(args)) => commands::stories::execute(&args, cli.json),
        Some(Commands::Move(args)) => commands::move_story::execute(&args, cli.json),
        Some(Commands::Toggle(args)) => commands::toggle::execute(&args, cli.json),
        Some(Commands::Tasks(args)) => commands::tasks::execute(&args, cli.json),
        Some(Commands::Search(args)) => commands::search::execute(&args, cli.json),
        Some(Commands::CreateSprint(args)) => commands::create::execute_sprint(&args, cli.json),
        Some(Commands::CreateStory(args)) => commands::create::execute_story(&args, cli.json),
        Some(Commands::Demo(args)) => commands::demo::execute(&args),
        Some(Commands::Version) => commands::version::execute(cli.json),
        None => {
            println!("sb - Sprint backlog board. Use --help for usage.");
            Ok(())
        }
    }
}
