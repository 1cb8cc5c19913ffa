//! # Transcript Module
//!
//! Reads a session transcript (one JSON object per line) and keeps the token
//! usage of the most recent assistant turn. That turn already accounts for the
//! whole conversation, so earlier turns are superseded rather than summed.
//!
//! A missing transcript is normal for a fresh session and yields an empty
//! [`ContextState`]. Lines that fail to decode are skipped because the file is
//! append-only and the last line may still be half written.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::models::{ContextState, MessageUsage, TranscriptLine};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("failed to open transcript file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading transcript file {}: {source}", .path.display())]
    StreamRead {
        path: PathBuf,
        #[source]
        source: io::Error,
        /// Result as it stood when reading stopped, with `notes` filled in
        state: ContextState,
    },
}

impl TranscriptError {
    pub fn partial_state(&self) -> Option<&ContextState> {
        match self {
            TranscriptError::StreamRead { state, .. } => Some(state),
            TranscriptError::Unreadable { .. } => None,
        }
    }
}

pub fn scan_transcript(path: &Path) -> Result<ContextState, TranscriptError> {
    scan_transcript_with(path, |p| File::open(p))
}

/// Same as [`scan_transcript`] but with a caller supplied opener, so the
/// source does not have to be a plain file.
pub fn scan_transcript_with<F, R>(path: &Path, open: F) -> Result<ContextState, TranscriptError>
where
    F: FnOnce(&Path) -> io::Result<R>,
    R: Read,
{
    let mut state = ContextState::empty();
    let source = match open(path) {
        Ok(source) => source,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no transcript at {}, reporting empty context", path.display());
            return Ok(state);
        }
        Err(source) => {
            return Err(TranscriptError::Unreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match last_assistant_usage(BufReader::new(source)) {
        Ok(last) => {
            if let Some(usage) = last {
                state.input_tokens = usage.context_input();
                state.output_tokens = usage.output();
            }
            debug!(
                "transcript {}: input={} output={}",
                path.display(),
                state.input_tokens,
                state.output_tokens
            );
            Ok(state)
        }
        Err(source) => {
            state.notes = Some(format!("Error reading transcript: {source}"));
            Err(TranscriptError::StreamRead {
                path: path.to_path_buf(),
                source,
                state,
            })
        }
    }
}

/// Single forward pass holding only the latest assistant usage seen so far.
fn last_assistant_usage<B: BufRead>(reader: B) -> io::Result<Option<MessageUsage>> {
    let mut skipped = 0usize;
    let last = reader
        .split(b'\n')
        .try_fold(None, |last, line| -> io::Result<Option<MessageUsage>> {
            let line = line?;
            if line.iter().all(u8::is_ascii_whitespace) {
                return Ok(last);
            }
            match serde_json::from_slice::<TranscriptLine>(&line) {
                Ok(entry) if entry.is_assistant_turn() => Ok(Some(entry.into_usage())),
                Ok(_) => Ok(last),
                Err(_) => {
                    skipped += 1;
                    Ok(last)
                }
            }
        })?;
    if skipped > 0 {
        debug!("skipped {skipped} undecodable transcript lines");
    }
    Ok(last)
}
