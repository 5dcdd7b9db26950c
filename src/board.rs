//! Workspace discovery and board-file sessions.
//!
//! A workspace is a directory with a `.board/` subdirectory holding
//! `board.jsonl` (the data) and `config.yaml` (settings). A [`Session`]
//! loads both, exposes the controller state, and saves atomically.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use board_lib::{jsonl, BacklogState, ItemStore, MemoryApi};

use crate::config::BoardConfig;

pub const BOARD_DIR: &str = ".board";
pub const BOARD_FILE: &str = "board.jsonl";
pub const CONFIG_FILE: &str = "config.yaml";

#[must_use]
pub fn board_dir() -> PathBuf {
    PathBuf::from(BOARD_DIR)
}

#[must_use]
pub fn board_file() -> PathBuf {
    board_dir().join(BOARD_FILE)
}

#[must_use]
pub fn config_file() -> PathBuf {
    board_dir().join(CONFIG_FILE)
}

/// An open board: controller state plus the file it came from.
#[derive(Debug)]
pub struct Session {
    pub state: BacklogState,
    pub config: BoardConfig,
    path: PathBuf,
}

impl Session {
    /// Open the workspace in the current directory.
    ///
    /// # Errors
    ///
    /// Fails if the workspace is not initialized or the board file is
    /// unreadable.
    pub fn open() -> Result<Self> {
        Self::open_at(&board_file(), &config_file())
    }

    /// Open a board from explicit paths.
    ///
    /// # Errors
    ///
    /// Fails if the board file is missing or invalid.
    pub fn open_at(board_path: &Path, config_path: &Path) -> Result<Self> {
        if !board_path.exists() {
            bail!("no board found. Run 'sb init' first.");
        }
        let store = jsonl::load(board_path)
            .with_context(|| format!("cannot load {}", board_path.display()))?;
        let config = BoardConfig::load(config_path)?;

        let state = BacklogState::from_store(store)
            .with_policy(config.expand_policy())
            .with_debounce(config.debounce());

        Ok(Self {
            state,
            config,
            path: board_path.to_path_buf(),
        })
    }

    /// A data source over a snapshot of the current store, for running
    /// fetch effects in-process.
    #[must_use]
    pub fn api(&self) -> MemoryApi {
        MemoryApi::new(self.state.store.clone())
    }

    /// Write the store back to the board file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        jsonl::save(&self.path, &self.state.store)
            .with_context(|| format!("cannot save {}", self.path.display()))?;
        Ok(())
    }
}

/// Write a fresh board file. Used by `sb init`.
///
/// # Errors
///
/// Fails if `.board/` or the file cannot be created.
pub fn create(board_path: &Path, store: &ItemStore) -> Result<()> {
    if let Some(parent) = board_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    jsonl::save(board_path, store)?;
    Ok(())
}
