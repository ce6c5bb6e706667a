use super::{render_document, split_document, Edit, EditPlan, LineEnding};
use crate::error::HostError;
use crate::cursor::{Position, Selection};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn doc(lines: &[&str]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

#[test]
fn test_render_terminates_every_line() {
    assert_eq!(render_document(&doc(&["# A", "b"]), LineEnding::Lf), "# A\nb\n");
    assert_eq!(render_document(&doc(&["# A", "b"]), LineEnding::CrLf), "# A\r\nb\r\n");
    assert_eq!(render_document(&[], LineEnding::Lf), "");
}

#[test]
fn test_detect_line_ending() {
    assert_eq!(LineEnding::detect("# A\r\nb\r\n"), LineEnding::CrLf);
    assert_eq!(LineEnding::detect("# A\nb\n"), LineEnding::Lf);
    assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    assert_eq!(split_document("# A\r\nb\r\n"), doc(&["# A", "b"]));
}

#[test]
fn test_split_drops_final_line_break_only() {
    assert_eq!(split_document("# A\nb\n"), doc(&["# A", "b"]));
    assert_eq!(split_document("# A\n\nb"), doc(&["# A", "", "b"]));
    assert!(split_document("").is_empty());
}

#[test]
fn test_apply_writes_last_edit() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Old").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let mut plan = EditPlan::new(path.clone());
    plan.edits.push(Edit {
        lines: doc(&["# First"]),
        selection: Selection::default(),
    });
    plan.edits.push(Edit {
        lines: doc(&["# Second", "body"]),
        selection: Selection::caret(Position::new(1, 0)),
    });
    plan.apply().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# Second\nbody\n");
}

#[test]
fn test_empty_plan_leaves_file_alone() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "keep").unwrap();
    let path = file.path().to_string_lossy().to_string();

    EditPlan::new(path.clone()).apply().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
}

#[test]
fn test_plan_json_round_trip() {
    let mut plan = EditPlan::new("notes.md");
    plan.edits.push(Edit {
        lines: doc(&["# A"]),
        selection: Selection::caret(Position::new(0, 3)),
    });
    plan.messages.push("Scratchpad already exists".to_string());

    let json = serde_json::to_string(&plan).unwrap();
    let back: EditPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_load_reads_saved_plan() {
    let mut plan = EditPlan::new("notes.md");
    plan.line_ending = LineEnding::CrLf;
    plan.edits.push(Edit {
        lines: doc(&["# A", "b"]),
        selection: Selection::caret(Position::new(1, 0)),
    });
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(&plan).unwrap()).unwrap();

    assert_eq!(EditPlan::load(file.path()).unwrap(), plan);
}

#[test]
fn test_load_without_line_ending_defaults_to_lf() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"file_name":"notes.md","edits":[],"messages":[]}}"#).unwrap();

    let plan = EditPlan::load(file.path()).unwrap();
    assert_eq!(plan.line_ending, LineEnding::Lf);
    assert!(plan.edits.is_empty());
}

#[test]
fn test_load_rejects_invalid_plan() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not a plan").unwrap();

    let err = EditPlan::load(file.path()).unwrap_err();
    assert!(matches!(err, HostError::Plan(_)));
}
