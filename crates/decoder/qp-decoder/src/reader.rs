//! Offline payload reading.
//!
//! Reads captured queue message bodies from any [`BufRead`] so they can be
//! fed through a [`MessageDecoder`](crate::MessageDecoder) without a queue.

use anyhow::Context;
use qp_error::Result;
use std::io::{BufRead, Read};
use tracing::trace;

/// How input is split into payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// One payload per line; blank lines are skipped
    #[default]
    PerLine,

    /// The whole input is a single payload (e.g. a pretty-printed JSON body)
    Whole,
}

/// Iterator over payloads read from a buffered reader.
///
/// The trailing line terminator (`\n` or `\r\n`) is stripped; the rest of
/// each payload is kept verbatim.
pub struct PayloadReader<R> {
    reader: R,
    mode: LineMode,
    done: bool,
}

impl<R: BufRead> PayloadReader<R> {
    /// Create a reader with the given split mode.
    pub fn new(reader: R, mode: LineMode) -> Self {
        Self {
            reader,
            mode,
            done: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read payload line")?;
            if read == 0 {
                return Ok(None);
            }

            let payload = strip_terminator(&line);
            if payload.trim().is_empty() {
                continue;
            }

            trace!(payload, "Read payload line");
            return Ok(Some(payload.to_string()));
        }
    }

    fn whole(&mut self) -> Result<Option<String>> {
        let mut content = String::new();
        self.reader
            .read_to_string(&mut content)
            .context("Failed to read payload")?;

        let payload = strip_terminator(&content);
        if payload.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(payload.to_string()))
        }
    }
}

impl<R: BufRead> Iterator for PayloadReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.mode {
            LineMode::PerLine => self.next_line(),
            LineMode::Whole => {
                self.done = true;
                self.whole()
            }
        };

        match result {
            Ok(Some(payload)) => Some(Ok(payload)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn strip_terminator(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}
