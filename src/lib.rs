//! jpf-trace-reader: readable reports from Java PathFinder trace logs.
//!
//! JPF (Java PathFinder) explores every scheduling of a Java program and,
//! on request, dumps the execution traces it found as a flat text log. The
//! raw log repeats each source location once per bytecode instruction and
//! splits a thread's run across consecutive transitions, which makes it
//! nearly unreadable. This crate reconstructs the structure and renders a
//! deduplicated, per-thread report:
//!
//! 1. [`TraceReader`] — a streaming parser folding the line sequence into
//!    completed [`Trace`] values, one at a time.
//! 2. [`compress_trace`] — a pure pass merging consecutive same-thread
//!    transitions and suppressing repeated file:line steps.
//! 3. [`render_trace`] / [`print_trace`] — the formatted report.
//!
//! Traces can also be exported as NDJSON via [`TraceEmitter`].
//!
//! # Quick Start
//!
//! ```
//! use jpf_trace_reader::{compress_trace, render_trace, TraceReader};
//!
//! let log = "\
//! ===== trace #1
//! ----- transition #1 thread: 0
//!   Main.java:10 : x = 1;
//!     run()V
//! ===== results
//! ";
//!
//! for trace in TraceReader::from_reader(log.as_bytes()) {
//!     let trace = compress_trace(trace?);
//!     print!("{}", render_trace(&trace));
//! }
//! # Ok::<(), jpf_trace_reader::Error>(())
//! ```

pub mod compress;
pub mod emit;
pub mod error;
pub mod printer;
pub mod reader;
pub mod trace;

// Re-export core types for convenience
pub use compress::{compress_trace, METHOD_ARGS_PLACEHOLDER};
pub use emit::TraceEmitter;
pub use error::{Error, ParseError, Result};
pub use printer::{print_trace, render_trace, DISPLAY_WIDTH, UNKNOWN_METHOD};
pub use reader::TraceReader;
pub use trace::{Code, Trace, Transition};
