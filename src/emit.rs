//! NDJSON trace export.
//!
//! Records traces as newline-delimited JSON, one object per line, for
//! downstream tooling that wants the structured form rather than the
//! formatted report.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::trace::Trace;

/// Writes traces as NDJSON, one JSON object per line.
///
/// Each call to `emit()` writes one line:
/// ```json
/// {"id":1,"transitions":[{"thread":0,"code":[{"file":"Main.java","line":"10","method":"run(…)","text":"x = 1;"}]}]}
/// ```
pub struct TraceEmitter<W: Write> {
    writer: W,
    count: usize,
}

impl TraceEmitter<BufWriter<std::fs::File>> {
    /// Create an emitter writing to the given file path.
    pub fn create(path: &Path) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TraceEmitter<W> {
    /// Create an emitter over an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Emit one trace as an NDJSON line.
    pub fn emit(&mut self, trace: &Trace) -> Result<()> {
        serde_json::to_writer(&mut self.writer, trace)?;
        self.writer.write_all(b"\n")?;
        self.count += 1;
        Ok(())
    }

    /// Flush buffered output and return the number of traces emitted.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.count)
    }

    /// Number of traces emitted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}
