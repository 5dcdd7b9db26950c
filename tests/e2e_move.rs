mod common;
use common::cli::{run_sb, SbWorkspace};

#[test]
fn test_move_backlog_story_into_sprint() {
    let workspace = SbWorkspace::new();
    run_sb(&workspace, ["init", "--seed"], "init");

    let mv = run_sb(&workspace, ["move", "us-4", "sp-1"], "move");
    assert!(mv.status.success(), "move failed: {}", mv.stderr);
    assert!(mv.stdout.contains("Moved us-4 from backlog to sp-1"));

    // The move persisted: projections on a fresh process agree.
    let sprint = run_sb(&workspace, ["stories", "sp-1"], "stories_sprint");
    assert!(sprint.stdout.contains("us-4"));
    let backlog = run_sb(&workspace, ["stories", "backlog"], "stories_backlog");
    assert!(!backlog.stdout.contains("us-4"));
}

#[test]
fn test_move_between_sprints_and_back() {
    let workspace = SbWorkspace::new();
    run_sb(&workspace, ["init", "--seed"], "init");

    let across = run_sb(&workspace, ["move", "us-1", "sp-2"], "across");
    assert!(across.stdout.contains("from sp-1 to sp-2"));

    let back = run_sb(&workspace, ["move", "us-1", "backlog"], "back");
    assert!(back.stdout.contains("from sp-2 to backlog"));
    let backlog = run_sb(&workspace, ["stories"], "backlog");
    assert!(backlog.stdout.contains("us-1"));
}

#[test]
fn test_move_to_current_container_is_a_noop() {
    let workspace = SbWorkspace::new();
    run_sb(&workspace, ["init", "--seed"], "init");

    let noop = run_sb(&workspace, ["move", "us-1", "sp-1"], "noop");
    assert!(noop.status.success());
    assert!(noop.stdout.contains("already in sp-1"));
}

#[test]
fn test_move_unknown_story_is_ignored_not_fatal() {
    let workspace = SbWorkspace::new();
    run_sb(&workspace, ["init", "--seed"], "init");

    let ghost = run_sb(&workspace, ["move", "us-ghost", "sp-1"], "ghost");
    assert!(ghost.status.success());
    assert!(ghost.stdout.contains("unknown story us-ghost"));

    // The board is untouched.
    let sprint = run_sb(&workspace, ["stories", "sp-1"], "stories");
    assert!(sprint.stdout.contains("2 story(ies)"));
}

#[test]
fn test_move_to_unknown_sprint_fails() {
    let workspace = SbWorkspace::new();
    run_sb(&workspace, ["init", "--seed"], "init");

    let bad = run_sb(&workspace, ["move", "us-1", "sp-ghost"], "bad_target");
    assert!(!bad.status.success());
    assert!(bad.stderr.contains("unknown sprint"));
}

#[test]
fn test_move_json_report() {
    let workspace = SbWorkspace::new();
    run_sb(&workspace, ["init", "--seed"], "init");

    let out = run_sb(&workspace, ["--json", "mv", "us-5", "sp-2"], "mv_json");
    let report: serde_json::Value = serde_json::from_str(&out.stdout).expect("valid JSON");
    assert_eq!(report["moved"], true);
    assert_eq!(report["from"], "backlog");
    assert_eq!(report["to"], "sp-2");
}
