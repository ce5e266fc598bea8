//! Data model for JPF execution traces.
//!
//! A trace log is a sequence of traces; each trace is a sequence of
//! transitions (one thread scheduled without interruption); each transition
//! is a sequence of executed source lines. Ownership follows containment:
//! a `Code` belongs to exactly one `Transition`, a `Transition` to exactly
//! one `Trace`.

use serde::{Deserialize, Serialize};

/// One executed source-location step within a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// Source file identifier (e.g., "Main.java").
    pub file: String,

    /// Line number, kept verbatim as it appeared in the log.
    ///
    /// Stored as a string rather than parsed, so leading formatting
    /// survives round trips through the printer.
    pub line: String,

    /// Fully-qualified method signature, discovered on the line after the
    /// code line and attached retroactively. Absent when the log never
    /// names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// The literal source text of the executed line.
    pub text: String,
}

/// One scheduling step: a single thread executing without interruption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// JPF thread id.
    pub thread: u64,

    /// Executed code steps, in execution order.
    pub code: Vec<Code>,
}

/// One complete execution path explored by the model checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Trace id as declared by the log. Not guaranteed unique or ordered.
    pub id: u64,

    /// Scheduling steps in the order their headers appeared.
    pub transitions: Vec<Transition>,
}

impl Trace {
    /// Create an empty trace with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            transitions: Vec::new(),
        }
    }
}

impl Transition {
    /// Create an empty transition for the given thread.
    pub fn new(thread: u64) -> Self {
        Self {
            thread,
            code: Vec::new(),
        }
    }
}
