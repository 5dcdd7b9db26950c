//! Demo command implementation.
//!
//! Runs a scripted interactive session against seeded data with real
//! timers: fetches resolve after simulated latency and filter keystrokes
//! go through the genuine debounce window, so a quick second keystroke
//! aborts the pending search. Per-sprint story fetches keep at most one
//! task in flight; a newer query aborts the stale one.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use board_lib::{
    fixtures, Action, BacklogState, ContainerId, Effect, FilterUpdate, MemoryApi, ReadApi,
    StoryQuery,
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::cli::DemoArgs;
use crate::format::{format_sprint_line, format_story_line};

const FETCH_LATENCY: Duration = Duration::from_millis(50);

/// Tasks spawned for effects, so stale ones can be aborted.
#[derive(Default)]
struct InFlight {
    search_timer: Option<JoinHandle<()>>,
    story_fetches: HashMap<String, JoinHandle<()>>,
}

/// Execute the demo command.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn execute(args: &DemoArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(Duration::from_millis(args.debounce_ms)))
}

async fn run(debounce: Duration) -> Result<()> {
    let api = Arc::new(MemoryApi::new(fixtures::seed_store()));
    let mut state = BacklogState::new().with_debounce(debounce);
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

    // Scripted user: open the board, drag a backlog story into the active
    // sprint, then type a search with a second keystroke inside the
    // debounce window. Only "auth" should ever reach the data source.
    let script = tx.clone();
    let keystroke_gap = debounce / 3;
    tokio::spawn(async move {
        let _ = script.send(Action::LoadSprints);
        sleep(Duration::from_millis(200)).await;
        let _ = script.send(Action::MoveStory {
            story_id: "us-4".to_string(),
            target: ContainerId::Sprint("sp-1".to_string()),
        });
        sleep(Duration::from_millis(100)).await;
        let _ = script.send(Action::FilterChanged(FilterUpdate::search("a")));
        sleep(keystroke_gap).await;
        let _ = script.send(Action::FilterChanged(FilterUpdate::search("auth")));
    });

    let mut in_flight = InFlight::default();

    loop {
        // The script is finite; a stretch of silence means quiescence.
        let idle = debounce + Duration::from_secs(1);
        let action = match tokio::time::timeout(idle, rx.recv()).await {
            Ok(Some(action)) => action,
            Ok(None) | Err(_) => break,
        };
        narrate(&action);
        for effect in state.reduce(action) {
            spawn_effect(effect, &api, &tx, &mut in_flight);
        }
    }

    println!("\nFinal board:");
    print_board(&state);
    Ok(())
}

/// Execute one effect on the runtime, feeding the completion back.
fn spawn_effect(
    effect: Effect,
    api: &Arc<MemoryApi>,
    tx: &UnboundedSender<Action>,
    in_flight: &mut InFlight,
) {
    debug!(?effect, "spawning effect");
    match effect {
        Effect::ScheduleSearch { generation, delay } => {
            // A newer keystroke supersedes the pending timer.
            if let Some(handle) = in_flight.search_timer.take() {
                handle.abort();
            }
            let tx = tx.clone();
            in_flight.search_timer = Some(tokio::spawn(async move {
                sleep(delay).await;
                let _ = tx.send(Action::SearchDue { generation });
            }));
        }
        Effect::FetchSprints => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                sleep(FETCH_LATENCY).await;
                let _ = tx.send(match api.list_sprints() {
                    Ok(sprints) => Action::SprintsLoaded(sprints),
                    Err(e) => Action::FetchFailed {
                        reason: e.to_string(),
                    },
                });
            });
        }
        Effect::FetchBacklog => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                sleep(FETCH_LATENCY).await;
                let _ = tx.send(match api.list_user_stories(&StoryQuery::container(None)) {
                    Ok(stories) => Action::BacklogLoaded(stories),
                    Err(e) => Action::FetchFailed {
                        reason: e.to_string(),
                    },
                });
            });
        }
        Effect::FetchStories { sprint_id, query } => {
            // One in-flight fetch per sprint; a newer query wins.
            if let Some(handle) = in_flight.story_fetches.remove(&sprint_id) {
                handle.abort();
            }
            let api = Arc::clone(api);
            let tx = tx.clone();
            let key = sprint_id.clone();
            let handle = tokio::spawn(async move {
                sleep(FETCH_LATENCY).await;
                let _ = tx.send(match api.list_user_stories(&query) {
                    Ok(stories) => Action::StoriesLoaded { sprint_id, stories },
                    Err(e) => Action::FetchFailed {
                        reason: e.to_string(),
                    },
                });
            });
            in_flight.story_fetches.insert(key, handle);
        }
        Effect::FetchTasks { story_id } => {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                sleep(FETCH_LATENCY).await;
                let _ = tx.send(match api.list_tasks(&story_id) {
                    Ok(tasks) => Action::TasksLoaded { story_id, tasks },
                    Err(e) => Action::FetchFailed {
                        reason: e.to_string(),
                    },
                });
            });
        }
    }
}

fn narrate(action: &Action) {
    match action {
        Action::LoadSprints => println!("» opening board"),
        Action::SprintsLoaded(sprints) => println!("« {} sprints loaded", sprints.len()),
        Action::BacklogLoaded(stories) => println!("« {} backlog stories loaded", stories.len()),
        Action::StoriesLoaded { sprint_id, stories } => {
            println!("« {} stories loaded for {sprint_id}", stories.len());
        }
        Action::TasksLoaded { story_id, tasks } => {
            println!("« {} tasks loaded for {story_id}", tasks.len());
        }
        Action::MoveStory { story_id, target } => println!("» dragging {story_id} to {target}"),
        Action::FilterChanged(update) => {
            if let Some(text) = &update.search_text {
                println!("» typing search: {text:?}");
            } else {
                println!("» changing filter");
            }
        }
        Action::SearchDue { generation } => println!("· debounce fired (generation {generation})"),
        Action::ToggleStories { sprint_id } => println!("» toggling {sprint_id}"),
        Action::ToggleTasks { story_id } => println!("» toggling tasks for {story_id}"),
        Action::FetchFailed { reason } => println!("! fetch failed: {reason}"),
    }
}

fn print_board(state: &BacklogState) {
    let backlog = state.projection(&ContainerId::Backlog);
    println!("Backlog ({} stories)", backlog.len());
    for story in backlog {
        println!("  {}", format_story_line(story));
    }
    for sprint in state.store.sprints() {
        println!("{}", format_sprint_line(sprint));
        if sprint.expanded {
            for story in state.projection(&ContainerId::Sprint(sprint.id.clone())) {
                println!("  {}", format_story_line(story));
            }
        }
    }
}
