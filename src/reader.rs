//! Line-oriented parser reconstructing traces from a JPF log stream.
//!
//! The log interleaves five recognized line shapes (trace header, transition
//! header, code step, method annotation, results marker) with arbitrary
//! other output. [`TraceReader`] folds over the lines, maintaining the
//! currently-open trace as cursor state, and yields each trace lazily as
//! soon as the stream closes it. Memory is bounded by the largest single
//! trace, never the whole log.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, ParseError, Result};
use crate::trace::{Code, Trace, Transition};

static TRACE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=+ trace #([0-9]+)$").unwrap());
static TRANSITION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+ transition #([0-9]+) thread: ([0-9]+)$").unwrap());
static CODE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^  (\S+):([0-9]+) : (.*)$").unwrap());
static METHOD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^    (\S+\(\S*\)\S+)$").unwrap());
static RESULTS_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^=+ results$").unwrap());

/// Streaming parser over a line sequence, yielding completed [`Trace`]s.
///
/// Implements `Iterator<Item = Result<Trace>>`. A trace is yielded when the
/// next trace header or the results marker closes it; a trace still open at
/// end of stream is dropped, since a truncated log gives no guarantee the
/// trace is complete. Lines matching none of the recognized shapes are
/// ignored. After yielding an error the reader is fused.
pub struct TraceReader<I> {
    lines: I,
    line_no: usize,
    current: Option<Trace>,
    method_expected: bool,
    done: bool,
}

impl<R: BufRead> TraceReader<std::io::Lines<R>> {
    /// Build a reader over a byte stream, splitting it into lines.
    ///
    /// `BufRead::lines` is the line source: lazy, single-pass, no trailing
    /// newline, no whole-input buffering.
    pub fn from_reader(reader: R) -> Self {
        Self::new(reader.lines())
    }
}

impl<I> TraceReader<I>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    /// Build a reader over an existing line sequence.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_no: 0,
            current: None,
            method_expected: false,
            done: false,
        }
    }

    /// Process one line. Returns a trace when this line closed one.
    fn step(&mut self, line: &str) -> std::result::Result<Option<Trace>, ParseError> {
        // The flag set by the previous line, consumed exactly once.
        let method_expected = std::mem::take(&mut self.method_expected);

        if let Some(caps) = TRACE_HEADER.captures(line) {
            let id = self.parse_id(&caps[1])?;
            debug!(id, "new trace");
            // Opening a trace implicitly closes the previous one.
            return Ok(self.current.replace(Trace::new(id)));
        }

        if let Some(caps) = TRANSITION_HEADER.captures(line) {
            let thread = self.parse_id(&caps[2])?;
            debug!(thread, "new transition");
            let trace = self
                .current
                .as_mut()
                .ok_or(ParseError::TransitionOutsideTrace { line: self.line_no })?;
            trace.transitions.push(Transition::new(thread));
            return Ok(None);
        }

        if let Some(caps) = CODE_LINE.captures(line) {
            let code = Code {
                file: caps[1].to_string(),
                line: caps[2].to_string(),
                method: None,
                text: caps[3].to_string(),
            };
            debug!(file = %code.file, source_line = %code.line, "code step");
            let trace = self
                .current
                .as_mut()
                .ok_or(ParseError::CodeOutsideTrace { line: self.line_no })?;
            let transition = trace
                .transitions
                .last_mut()
                .ok_or(ParseError::CodeOutsideTransition { line: self.line_no })?;
            transition.code.push(code);
            self.method_expected = true;
            return Ok(None);
        }

        if let Some(caps) = METHOD_LINE.captures(line) {
            if !method_expected {
                debug!(line_no = self.line_no, "method line without a preceding code line, ignored");
                return Ok(None);
            }
            let method = &caps[1];
            debug!(method, "method annotation");
            let code = self
                .current
                .as_mut()
                .and_then(|trace| trace.transitions.last_mut())
                .and_then(|transition| transition.code.last_mut())
                .ok_or(ParseError::MethodWithoutCode { line: self.line_no })?;
            // First writer wins.
            if code.method.is_none() {
                code.method = Some(method.to_string());
            }
            return Ok(None);
        }

        if RESULTS_MARKER.is_match(line) {
            let trace = self
                .current
                .take()
                .ok_or(ParseError::ResultsOutsideTrace { line: self.line_no })?;
            debug!(id = trace.id, "results marker, closing trace");
            return Ok(Some(trace));
        }

        Ok(None)
    }

    fn parse_id(&self, value: &str) -> std::result::Result<u64, ParseError> {
        value.parse().map_err(|e: std::num::ParseIntError| ParseError::InvalidNumber {
            line: self.line_no,
            value: value.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<I> Iterator for TraceReader<I>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    type Item = Result<Trace>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let Some(line) = self.lines.next() else {
                self.done = true;
                if let Some(trace) = self.current.take() {
                    // A truncated log gives no guarantee the trace is
                    // complete, so it is dropped rather than flushed.
                    debug!(id = trace.id, "stream ended with an open trace, dropping it");
                }
                return None;
            };

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::Io(e)));
                }
            };

            self.line_no += 1;
            debug!(line_no = self.line_no, line = %line, "read line");

            match self.step(&line) {
                Ok(Some(trace)) => return Some(Ok(trace)),
                Ok(None) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
