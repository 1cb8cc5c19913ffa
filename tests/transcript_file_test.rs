use std::fs;
use std::io::Write;

use session_statusline::gauge::{Tier, render};
use session_statusline::models::ContextState;
use session_statusline::transcript::{TranscriptError, scan_transcript};

#[test]
fn scan_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"type":"assistant","message":{{"role":"assistant","usage":{{"input_tokens":10000,"output_tokens":5000,"cache_creation_input_tokens":2000,"cache_read_input_tokens":1000}}}}}}"#
    )
    .unwrap();

    let state = scan_transcript(file.path()).unwrap();
    assert_eq!(state.input_tokens, 13_000);
    assert_eq!(state.output_tokens, 5_000);
    assert_eq!(state.max_tokens, 200_000);
}

#[test]
fn later_entries_replace_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.jsonl");
    let mut lines = Vec::new();
    for input in [90_000, 150_000, 20_000] {
        lines.push(format!(
            r#"{{"type":"assistant","message":{{"role":"assistant","usage":{{"input_tokens":{input},"output_tokens":100}}}}}}"#
        ));
        lines.push(r#"{"type":"user","message":{"role":"user"}}"#.to_string());
    }
    fs::write(&path, lines.join("\n")).unwrap();

    let state = scan_transcript(&path).unwrap();
    assert_eq!(state.input_tokens, 20_000);
    assert_eq!(state.output_tokens, 100);
    assert_eq!(render(&state).tier, Tier::Normal);
}

#[test]
fn missing_file_is_empty_context() {
    let dir = tempfile::tempdir().unwrap();
    let state = scan_transcript(&dir.path().join("never-written.jsonl")).unwrap();
    assert_eq!(state, ContextState::empty());
    assert_eq!(render(&state).text, "⛶⛶⛶⛶⛶⛶⛶⛶⛶⛶ 0/200k (0%)");
}

#[cfg(unix)]
#[test]
fn directory_fails_mid_stream_with_notes() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_transcript(dir.path()).unwrap_err();
    match &err {
        TranscriptError::StreamRead { state, .. } => {
            assert_eq!(state.input_tokens, 0);
            assert!(
                state
                    .notes
                    .as_deref()
                    .is_some_and(|n| n.starts_with("Error reading transcript:"))
            );
        }
        other => panic!("expected a read failure, got {other:?}"),
    }
}
