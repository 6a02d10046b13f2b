//! Append-only CSV transcript store.
//!
//! Every exchange is mirrored to a CSV file with the columns
//! `time,speaker,message`. Appends re-open the file each time and flush
//! before returning, so every row is durable on its own; there is no
//! buffering across turns. The row timestamp is recomputed at write time,
//! not copied from the in-memory turn.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::session::{now, Speaker};

const HEADER: &str = "time,speaker,message";

pub struct TranscriptLog {
    path: PathBuf,
}

impl TranscriptLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row, writing the header first when the store does not
    /// exist yet (or was truncated by [`TranscriptLog::clear`]).
    pub fn append(&self, speaker: Speaker, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if needs_header {
            writeln!(file, "{HEADER}")?;
        }
        writeln!(
            file,
            "{},{},{}",
            csv_field(&now()),
            csv_field(speaker.as_str()),
            csv_field(text)
        )?;
        file.flush()?;
        debug!(speaker = speaker.as_str(), "appended transcript row");
        Ok(())
    }

    /// Truncates the store to zero bytes. The next append re-creates the
    /// header. In-memory session state is not this adapter's concern.
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(&self.path, "")?;
        debug!(path = %self.path.display(), "transcript store cleared");
        Ok(())
    }
}

/// Quotes a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
