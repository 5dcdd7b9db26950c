//! `sprint_board` (sb) - Sprint backlog board
//!
//! A file-backed sprint planning board with JSONL storage. Non-invasive
//! design: no daemon, no background processes, everything in `.board/`.

use sprint_board::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
