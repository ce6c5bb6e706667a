use super::{register_all, registry, run, CommandId};
use crate::cursor::{Position, Selection};
use crate::engine::HeadingEngine;
use crate::formats::markdown::MarkdownFormat;
use crate::host::{FileHost, Host, MemoryHost};
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn engine() -> HeadingEngine {
    HeadingEngine::new(MarkdownFormat::default()).unwrap()
}

fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn test_ids_round_trip() {
    for command in CommandId::ALL {
        assert_eq!(CommandId::from_id(command.id()), Some(command));
        assert_eq!(command.to_string(), command.id());
    }
    assert_eq!(CommandId::from_id("nope"), None);
}

#[test]
fn test_registry_carries_depth_hotkeys() {
    let specs = registry();
    assert_eq!(specs.len(), CommandId::ALL.len());

    let increase = &specs[0];
    assert_eq!(increase.id, "increase-heading");
    assert_eq!(increase.name, "Increase Heading Number");
    let hotkey = increase.hotkey.as_ref().unwrap();
    assert_eq!(hotkey.modifiers, ["Shift"]);
    assert_eq!(hotkey.key, "+");

    assert_eq!(specs[1].hotkey.as_ref().unwrap().key, "-");
    assert!(specs[2..].iter().all(|spec| spec.hotkey.is_none()));
}

#[test]
fn test_register_all() {
    let mut host = MemoryHost::default();
    register_all(&mut host);
    let ids: Vec<&str> = host.commands.iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        [
            "increase-heading",
            "decrease-heading",
            "create-scratchpad",
            "create-eol",
            "list-headings",
            "insert-date",
        ]
    );
}

#[test]
fn test_create_scratchpad_follows_up_with_eol() {
    let mut host = MemoryHost::new(["# Root"]);

    let selection = run(&mut host, &engine(), CommandId::CreateScratchpad, friday()).unwrap();

    assert_eq!(
        host.lines,
        [
            "# Root",
            "## scratchpad / Root scratchpad",
            "### 2026-10-16 friday",
            "**Root EOL**",
        ]
    );
    assert_eq!(host.commits, 2);
    assert_eq!(selection, Some(Selection::caret(Position::new(3, 0))));
    assert_eq!(host.selection, Selection::caret(Position::new(3, 0)));
    assert!(host.messages.is_empty());
}

#[test]
fn test_scratchpad_in_empty_document_is_closed() {
    let mut host = MemoryHost::new(Vec::<String>::new());

    let selection = run(&mut host, &engine(), CommandId::CreateScratchpad, friday()).unwrap();

    assert_eq!(host.lines, ["# First Scratchpad", "## 2026-10-16 friday", "**First EOL**"]);
    assert_eq!(host.commits, 2);
    assert!(host.messages.is_empty());
    assert_eq!(selection, Some(Selection::caret(Position::new(2, 0))));
}

#[test]
fn test_scratchpad_from_line_after_end_is_closed() {
    let mut host = MemoryHost::new(["# Root", "body"]).with_cursor(Position::new(2, 0));

    let selection = run(&mut host, &engine(), CommandId::CreateScratchpad, friday()).unwrap();

    assert_eq!(
        host.lines,
        [
            "# Root",
            "body",
            "## scratchpad / Root scratchpad",
            "### 2026-10-16 friday",
            "**Root EOL**",
        ]
    );
    assert_eq!(host.commits, 2);
    assert!(host.messages.is_empty());
    assert_eq!(selection, Some(Selection::caret(Position::new(4, 0))));
}

#[test]
fn test_repeat_scratchpad_notifies_and_keeps_document() {
    let mut host = MemoryHost::new(["# Root", "body"]).with_cursor(Position::new(1, 0));
    let engine = engine();
    run(&mut host, &engine, CommandId::CreateScratchpad, friday()).unwrap();
    let before = host.lines.clone();
    host.set_cursor(Position::new(1, 0));

    let selection = run(&mut host, &engine, CommandId::CreateScratchpad, friday()).unwrap();

    assert_eq!(selection, None);
    assert_eq!(host.lines, before);
    assert_eq!(host.commits, 2);
    assert_eq!(host.messages, ["Scratchpad already exists"]);
}

#[test]
fn test_rejected_depth_change_commits_nothing() {
    let selection = Selection::new(Position::new(0, 0), Position::new(0, 11));
    let mut host = MemoryHost::new(["###### Deep"]).with_selection(selection);

    let result = run(&mut host, &engine(), CommandId::IncreaseHeading, friday()).unwrap();

    assert_eq!(result, None);
    assert_eq!(host.lines, ["###### Deep"]);
    assert_eq!(host.commits, 0);
    assert_eq!(host.selection, selection);
    assert_eq!(host.messages, ["Max heading reached!"]);
}

#[test]
fn test_decrease_updates_selection() {
    let selection = Selection::new(Position::new(0, 0), Position::new(1, 5));
    let mut host = MemoryHost::new(["## A", "### B"]).with_selection(selection);

    run(&mut host, &engine(), CommandId::DecreaseHeading, friday()).unwrap();

    assert_eq!(host.lines, ["# A", "## B"]);
    assert_eq!(host.selection.to, Position::new(1, 4));
}

#[test]
fn test_list_headings_through_host() {
    let mut host =
        MemoryHost::new(["# Root", "body", "## Child"]).with_cursor(Position::new(1, 0));

    run(&mut host, &engine(), CommandId::ListHeadings, friday()).unwrap();

    assert_eq!(host.lines, ["# Root", "- Child", "body", "## Child"]);
    assert_eq!(host.selection, Selection::caret(Position::new(1, 0)));
}

#[test]
fn test_list_headings_without_children_commits_unchanged() {
    let mut host = MemoryHost::new(["# Root", "body"]).with_cursor(Position::new(1, 0));

    let selection = run(&mut host, &engine(), CommandId::ListHeadings, friday()).unwrap();

    assert_eq!(host.lines, ["# Root", "body"]);
    assert_eq!(host.commits, 1);
    assert!(host.messages.is_empty());
    assert_eq!(selection, Some(Selection::caret(Position::new(1, 0))));
}

#[test]
fn test_insert_date_on_heading_notifies() {
    let mut host = MemoryHost::new(["# Root"]);

    run(&mut host, &engine(), CommandId::InsertDate, friday()).unwrap();

    assert_eq!(host.messages, ["Put the cursor on a non-heading line"]);
    assert_eq!(host.commits, 0);
}

#[test]
fn test_eol_without_scratchpad_notifies() {
    let mut host = MemoryHost::new(["# Root", "body"]).with_cursor(Position::new(1, 0));

    run(&mut host, &engine(), CommandId::CreateEol, friday()).unwrap();

    assert_eq!(host.messages, ["Create scratchpad first"]);
}

#[test]
fn test_scratchpad_on_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Project\nnotes\n# Later").unwrap();

    let mut host = FileHost::open(file.path(), Selection::caret(Position::new(1, 0))).unwrap();
    run(&mut host, &engine(), CommandId::CreateScratchpad, friday()).unwrap();

    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        "# Project\nnotes\n## scratchpad / Project scratchpad\n### 2026-10-16 friday\n**Project EOL**\n# Later\n"
    );
    assert_eq!(host.plan().edits.len(), 2);
}

#[test]
fn test_scratchpad_dry_run_chains_on_pending_content() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Project").unwrap();

    let mut host = FileHost::open(file.path(), Selection::default())
        .unwrap()
        .dry_run(true);
    run(&mut host, &engine(), CommandId::CreateScratchpad, friday()).unwrap();

    assert_eq!(fs::read_to_string(file.path()).unwrap(), "# Project\n");
    let plan = host.into_plan();
    assert_eq!(plan.edits.len(), 2);
    assert_eq!(plan.final_lines().unwrap().last().unwrap(), "**Project EOL**");
    assert_eq!(plan.edits[1].selection, Selection::caret(Position::new(3, 0)));
}
