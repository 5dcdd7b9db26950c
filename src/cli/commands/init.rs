//! Init command implementation.

use std::fs;

use anyhow::{bail, Result};
use board_lib::{fixtures, ItemStore};

use crate::board;
use crate::cli::InitArgs;
use crate::config;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the board already exists (without `--force`) or the
/// files cannot be created.
pub fn execute(args: &InitArgs) -> Result<()> {
    let board_path = board::board_file();
    if board_path.exists() && !args.force {
        bail!(
            "board already initialized at {} (use --force to overwrite)",
            board_path.display()
        );
    }

    let store = if args.seed {
        fixtures::seed_store()
    } else {
        ItemStore::new()
    };
    board::create(&board_path, &store)?;

    let config_path = board::config_file();
    if !config_path.exists() {
        fs::write(&config_path, config::CONFIG_TEMPLATE)?;
    }

    if args.seed {
        println!(
            "Initialized board workspace in {}/ ({} sprints, {} stories)",
            board::BOARD_DIR,
            store.sprint_count(),
            store.story_count()
        );
    } else {
        println!("Initialized board workspace in {}/", board::BOARD_DIR);
    }
    Ok(())
}
