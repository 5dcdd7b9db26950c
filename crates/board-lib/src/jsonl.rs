//! JSONL file I/O for board items.
//!
//! Each line is one tagged record: a sprint, a user story, or a task.
//! Line order is preserved on save, so the file reflects board order.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::model::{Sprint, Task, UserStory};
use crate::store::ItemStore;

/// One line of the board file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Sprint(Sprint),
    UserStory(UserStory),
    Task(Task),
}

/// Load a board file into a store, keeping file order.
///
/// # Errors
///
/// Returns `FileNotFound` if the path does not exist, `Io` for other read
/// failures, or `JsonlParse` if any line is invalid.
pub fn load(path: &Path) -> Result<ItemStore> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BoardError::FileNotFound(path.to_path_buf())
        } else {
            BoardError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut store = ItemStore::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: Record = serde_json::from_str(trimmed).map_err(|e| BoardError::JsonlParse {
            line: line_num + 1,
            reason: e.to_string(),
        })?;

        match record {
            Record::Sprint(sprint) => store.upsert_sprints(vec![sprint]),
            Record::UserStory(story) => store.upsert_stories(vec![story]),
            Record::Task(task) => store.upsert_tasks(vec![task]),
        }
    }

    Ok(store)
}

/// Save a store to a JSONL file with atomic write.
///
/// Sprints first, then stories, then tasks, each in store order. Uses
/// write-to-temp + rename for atomicity.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save(path: &Path, store: &ItemStore) -> Result<()> {
    let tmp_path = path.with_extension("jsonl.tmp");
    let mut file = fs::File::create(&tmp_path)?;

    for sprint in store.sprints() {
        let json = serde_json::to_string(&Record::Sprint(sprint.clone()))?;
        writeln!(file, "{json}")?;
    }
    for story in store.stories() {
        let json = serde_json::to_string(&Record::UserStory(story.clone()))?;
        writeln!(file, "{json}")?;
    }
    for task in store.tasks() {
        let json = serde_json::to_string(&Record::Task(task.clone()))?;
        writeln!(file, "{json}")?;
    }

    file.sync_all()?;
    drop(file);
    fs::rename(&tmp_path, path)?;

    Ok(())
}
