//! Render a compressed trace as a formatted report.
//!
//! One banner block per trace, one section per transition, code steps
//! grouped under boxed method headers. Layout is fixed-width; everything
//! is centered against [`DISPLAY_WIDTH`].

use std::io::{self, Write};

use crate::trace::Trace;

/// Target width of the report, in characters.
pub const DISPLAY_WIDTH: usize = 64;

/// Group label for code steps with no method annotation.
pub const UNKNOWN_METHOD: &str = "unknown";

/// Render a trace into a `String`.
pub fn render_trace(trace: &Trace) -> String {
    let mut out = String::new();

    out.push('\n');
    rule(&mut out, '=');
    centered(&mut out, &format!("Trace {}", trace.id));
    rule(&mut out, '=');

    for transition in &trace.transitions {
        out.push('\n');
        centered(&mut out, &format!("Thread {}", transition.thread));

        let mut prev_method = "";
        for code in &transition.code {
            let method = code.method.as_deref().unwrap_or(UNKNOWN_METHOD);
            if method != prev_method {
                if !prev_method.is_empty() {
                    out.push('\n');
                }
                let box_rule = "-".repeat(method.chars().count() + 4);
                centered(&mut out, &box_rule);
                centered(&mut out, &format!("  {method}  "));
                centered(&mut out, &box_rule);
                prev_method = method;
            }
            // Line-number column is left-justified to 6 characters.
            out.push_str(&format!("{:<6} {}\n", format!("{}:", code.line), code.text));
        }

        out.push('\n');
        rule(&mut out, '-');
    }

    out
}

/// Render a trace to a writer. Terminal stage of the pipeline.
pub fn print_trace<W: Write>(out: &mut W, trace: &Trace) -> io::Result<()> {
    out.write_all(render_trace(trace).as_bytes())
}

fn rule(out: &mut String, ch: char) {
    for _ in 0..DISPLAY_WIDTH {
        out.push(ch);
    }
    out.push('\n');
}

/// Push `text` centered against [`DISPLAY_WIDTH`], then a newline.
///
/// Pads on the left only; trailing spaces would be invisible. Text wider
/// than the display width overflows untruncated.
fn centered(out: &mut String, text: &str) {
    let len = text.chars().count();
    if len < DISPLAY_WIDTH {
        for _ in 0..(DISPLAY_WIDTH - len) / 2 {
            out.push(' ');
        }
    }
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Code, Transition};

    fn code(line: &str, method: Option<&str>, text: &str) -> Code {
        Code {
            file: "Main.java".to_string(),
            line: line.to_string(),
            method: method.map(str::to_string),
            text: text.to_string(),
        }
    }

    fn sample_trace() -> Trace {
        Trace {
            id: 1,
            transitions: vec![Transition {
                thread: 0,
                code: vec![
                    code("10", Some("run(…)"), "x = 1;"),
                    code("11", Some("run(…)"), "x = 2;"),
                    code("20", None, "y = 1;"),
                ],
            }],
        }
    }

    #[test]
    fn centered_pads_to_midpoint() {
        let mut out = String::new();
        centered(&mut out, "Trace 1");
        // (64 - 7) / 2 = 28 leading spaces.
        assert_eq!(out, format!("{}Trace 1\n", " ".repeat(28)));
    }

    #[test]
    fn centered_overflows_without_truncation() {
        let long = "x".repeat(DISPLAY_WIDTH + 10);
        let mut out = String::new();
        centered(&mut out, &long);
        assert_eq!(out, format!("{long}\n"));
    }

    #[test]
    fn banner_names_the_trace() {
        let rendered = render_trace(&sample_trace());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(DISPLAY_WIDTH));
        assert_eq!(lines[2].trim(), "Trace 1");
        assert_eq!(lines[3], "=".repeat(DISPLAY_WIDTH));
    }

    #[test]
    fn steps_are_grouped_by_method() {
        let rendered = render_trace(&sample_trace());

        // One box for run(…), one for the unknown fallback.
        assert_eq!(rendered.matches("  run(…)  ").count(), 1);
        assert_eq!(rendered.matches("  unknown  ").count(), 1);

        // Both steps of the first group precede the second group's header.
        let run_box = rendered.find("  run(…)  ").unwrap();
        let unknown_box = rendered.find("  unknown  ").unwrap();
        let second_step = rendered.find("11:").unwrap();
        assert!(run_box < second_step && second_step < unknown_box);
    }

    #[test]
    fn blank_line_separates_method_groups() {
        let rendered = render_trace(&sample_trace());
        let lines: Vec<&str> = rendered.lines().collect();
        let idx = lines
            .iter()
            .position(|l| l.starts_with("11:"))
            .unwrap();
        assert_eq!(lines[idx + 1], "");
        assert!(lines[idx + 2].trim_start().starts_with("---"));
    }

    #[test]
    fn line_column_is_six_wide() {
        let rendered = render_trace(&sample_trace());
        assert!(rendered.contains("10:    x = 1;"));
        assert!(rendered.contains("11:    x = 2;"));
    }

    #[test]
    fn transition_listing_ends_with_rule() {
        let rendered = render_trace(&sample_trace());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(*lines.last().unwrap(), "-".repeat(DISPLAY_WIDTH));
        assert_eq!(lines[lines.len() - 2], "");
    }

    #[test]
    fn trace_without_transitions_is_just_the_banner() {
        let rendered = render_trace(&Trace::new(9));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].trim(), "Trace 9");
    }

    #[test]
    fn print_trace_writes_rendered_bytes() {
        let trace = sample_trace();
        let mut buf = Vec::new();
        print_trace(&mut buf, &trace).unwrap();
        assert_eq!(buf, render_trace(&trace).into_bytes());
    }
}
