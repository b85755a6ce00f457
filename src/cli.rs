//! Interactive terminal shell.
//!
//! Thin I/O layer around the engine: prompts for a process count and the
//! per-process attributes, validates, runs the pipeline (dispatch →
//! metrics → report), and writes the report. Generic over [`BufRead`]
//! and [`Write`] so the whole dialogue is unit-testable against
//! in-memory buffers.
//!
//! A process count below one prints a termination message and returns
//! `Ok` — that is the normal exit path, not an error. Everything else
//! that goes wrong aborts the run via [`ShellError`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::ShellError;
use crate::models::{ProcessSet, Ticks};
use crate::report;
use crate::scheduler::{PriorityScheduler, SimMetrics};
use crate::validation::validate_input;

const BANNER: &str = "========= Priority Non-Preemptive Scheduling =========";

/// Runs one interactive simulation session.
///
/// Reads prompts' answers from `input`, writes prompts and the final
/// report to `output`. Returns `Ok(())` both after a full run and after
/// the no-processes termination path.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), ShellError> {
    writeln!(output, "{BANNER}")?;
    writeln!(output)?;

    let count: i64 = prompt(input, output, "Enter number of processes: ")?;
    if count < 1 {
        writeln!(output, "\nThere are no processes to calculate for!")?;
        writeln!(output, "Program Terminated.")?;
        return Ok(());
    }

    let mut records: Vec<(Ticks, Ticks, i32)> = Vec::new();
    for id in 1..=count {
        let arrival: Ticks = prompt(
            input,
            output,
            &format!("\nEnter arrival time for process {id}: "),
        )?;
        let burst: Ticks = prompt(input, output, &format!("Enter burst time for process {id}: "))?;
        let priority: i32 = prompt(input, output, &format!("Enter priority for process {id}: "))?;
        records.push((arrival, burst, priority));
    }

    let mut set = ProcessSet::from_records(records);
    validate_input(&set).map_err(ShellError::Invalid)?;

    PriorityScheduler::new().schedule(&mut set);
    let metrics = SimMetrics::calculate(&mut set);
    write!(output, "{}", report::render(&set, &metrics))?;
    Ok(())
}

/// Writes `text` and reads one whitespace-trimmed answer, parsed as `T`.
///
/// A non-parsing token aborts with [`ShellError::Malformed`]; exhausted
/// input aborts with [`ShellError::UnexpectedEof`].
fn prompt<T, R, W>(input: &mut R, output: &mut W, text: &str) -> Result<T, ShellError>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ShellError::UnexpectedEof {
            prompt: text.trim().to_string(),
        });
    }

    let token = line.trim();
    token.parse().map_err(|_| ShellError::Malformed {
        prompt: text.trim().to_string(),
        token: token.to_string(),
    })
}
