//! Trace compression: collapse redundant consecutive steps.
//!
//! JPF logs the same source location once per bytecode instruction, so a
//! single statement shows up as a burst of identical file:line entries, and
//! a thread scheduled across consecutive transitions is split for no reason
//! a human reader cares about. Compression merges both back together.

use crate::trace::{Code, Trace, Transition};

/// Replacement for a normalized method's argument list, so overloaded and
/// parameterized variants of the same call site collapse to one label.
pub const METHOD_ARGS_PLACEHOLDER: &str = "(…)";

/// Compress a trace.
///
/// Consecutive transitions of the same thread merge into one. Within the
/// merged run, a step whose file and line equal the previous retained
/// step's is suppressed, though its method still fills in the retained
/// step's when that one has none (JPF names the method one line after a
/// code line, so in a burst of identical steps the name often arrives on
/// a later repeat). A retained step without a method inherits the previous
/// retained step's. Idempotent.
pub fn compress_trace(trace: Trace) -> Trace {
    let mut transitions: Vec<Transition> = Vec::new();

    for transition in trace.transitions {
        if transitions
            .last()
            .is_none_or(|prev| prev.thread != transition.thread)
        {
            transitions.push(Transition::new(transition.thread));
        }
        let Some(merged) = transitions.last_mut() else {
            unreachable!("a transition was pushed above");
        };

        for step in transition.code {
            let own_method = step.method.as_deref().map(normalize_method);

            let duplicate = merged
                .code
                .last()
                .is_some_and(|prev| prev.file == step.file && prev.line == step.line);

            if duplicate {
                // Suppressed. First writer wins on the retained entry.
                if let Some(prev) = merged.code.last_mut() {
                    if prev.method.is_none() {
                        prev.method = own_method;
                    }
                }
            } else {
                let method =
                    own_method.or_else(|| merged.code.last().and_then(|prev| prev.method.clone()));
                merged.code.push(Code {
                    file: step.file,
                    line: step.line,
                    method,
                    text: step.text,
                });
            }
        }
    }

    Trace {
        id: trace.id,
        transitions,
    }
}

/// Collapse everything from the first parenthesis group onward into the
/// ellipsis placeholder: `push(Ljava/lang/Object;)V` becomes `push(…)`.
fn normalize_method(method: &str) -> String {
    match method.find('(') {
        Some(idx) => format!("{}{METHOD_ARGS_PLACEHOLDER}", &method[..idx]),
        None => method.to_string(),
    }
}
