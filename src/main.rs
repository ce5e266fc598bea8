//! jpf-trace: render a JPF trace log as a deduplicated report.
//!
//! Thin CLI glue over the library pipeline: open the input, pull one trace
//! at a time, compress it, print it. Set `RUST_LOG=jpf_trace_reader=debug`
//! to watch the parser classify lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jpf_trace_reader::{compress_trace, print_trace, Result, TraceEmitter, TraceReader};

/// Render a Java PathFinder trace log as a per-thread, deduplicated report.
#[derive(Parser)]
#[command(name = "jpf-trace", version, about)]
struct Cli {
    /// Trace log to read (stdin when omitted).
    input: Option<PathBuf>,

    /// Emit compressed traces as NDJSON instead of the formatted report.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jpf-trace: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let reader = TraceReader::from_reader(input);
    let mut out = io::stdout().lock();

    if cli.json {
        let mut emitter = TraceEmitter::new(out);
        for trace in reader {
            emitter.emit(&compress_trace(trace?))?;
        }
        let count = emitter.finish()?;
        tracing::debug!(count, "exported traces");
    } else {
        for trace in reader {
            print_trace(&mut out, &compress_trace(trace?))?;
        }
    }

    Ok(())
}
