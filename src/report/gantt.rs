//! Gantt chart rendering.
//!
//! Draws one timeline row per process over the discrete time axis
//! `0..=max(completion)`. Within a row, the span from arrival to the
//! start of execution is drawn as a waiting band and the span from start
//! to completion as an executing band.
//!
//! The waiting band assumes the process's waiting interval is the single
//! contiguous span immediately after arrival. That holds for this
//! engine's non-preemptive output; it would need revisiting if idle-gap
//! semantics ever changed.

use crate::models::ProcessSet;

const WAITING_CELL: &str = "---- ";
const EXECUTING_CELL: &str = "==== ";
const BLANK_CELL: &str = "     ";

/// Width of the row label column ("Time:", "P1:", ...).
const LABEL_WIDTH: usize = 8;

/// Appends the Gantt chart (legend, time header, one row per process)
/// to `out`. Renders nothing for a set with no completed processes.
pub fn write_gantt(out: &mut String, set: &ProcessSet) {
    let Some(horizon) = set.max_completion() else {
        return;
    };

    out.push_str("\nGantt Chart:\n");
    out.push_str("Waiting: '----', Executing: '===='\n");

    out.push_str(&format!("{:<width$}", "Time:", width = LABEL_WIDTH));
    for t in 0..=horizon {
        out.push_str(&format!("{t:<4} "));
    }
    out.push('\n');

    for process in &set.processes {
        out.push_str(&format!(
            "{:<width$}",
            format!("P{}:", process.id),
            width = LABEL_WIDTH
        ));
        for t in 0..=horizon {
            let cell = match process.completion {
                Some(completion) if t >= process.arrival && t < completion => {
                    if t < process.start() {
                        WAITING_CELL
                    } else {
                        EXECUTING_CELL
                    }
                }
                _ => BLANK_CELL,
            };
            out.push_str(cell);
        }
        match process.completion {
            Some(completion) => out.push_str(&format!(" ({completion})\n")),
            None => out.push_str(" (-)\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{PriorityScheduler, SimMetrics};

    fn rendered(records: &[(i64, i64, i32)]) -> String {
        let mut set = ProcessSet::from_records(records.iter().copied());
        PriorityScheduler::new().schedule(&mut set);
        SimMetrics::calculate(&mut set);
        let mut out = String::new();
        write_gantt(&mut out, &set);
        out
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        let mut out = String::new();
        write_gantt(&mut out, &ProcessSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_header_spans_zero_to_max_completion() {
        let out = rendered(&[(0, 3, 1)]);
        let header = out
            .lines()
            .find(|l| l.starts_with("Time:"))
            .expect("time header present");
        assert_eq!(header.trim_end(), "Time:   0    1    2    3");
    }

    #[test]
    fn test_single_process_row() {
        let out = rendered(&[(0, 3, 1)]);
        let row = out
            .lines()
            .find(|l| l.starts_with("P1:"))
            .expect("P1 row present");
        // Executes 0..3, blank at t=3, completion suffix.
        let expected = concat!("P1:     ", "==== ", "==== ", "==== ", "     ", " (3)");
        assert_eq!(row, expected);
    }

    #[test]
    fn test_waiting_band_precedes_execution() {
        // P2 runs 0..3; P1 waits 0..3 then runs 3..7.
        let out = rendered(&[(0, 4, 2), (0, 3, 1)]);
        let p1 = out.lines().find(|l| l.starts_with("P1:")).unwrap();
        let p2 = out.lines().find(|l| l.starts_with("P2:")).unwrap();
        let expected_p1 = concat!(
            "P1:     ",
            "---- ", "---- ", "---- ",
            "==== ", "==== ", "==== ", "==== ",
            "     ",
            " (7)"
        );
        let expected_p2 = concat!(
            "P2:     ",
            "==== ", "==== ", "==== ",
            "     ", "     ", "     ", "     ", "     ",
            " (3)"
        );
        assert_eq!(p1, expected_p1);
        assert_eq!(p2, expected_p2);
    }

    #[test]
    fn test_idle_gap_renders_blank() {
        let out = rendered(&[(5, 2, 1)]);
        let row = out.lines().find(|l| l.starts_with("P1:")).unwrap();
        // Blank through the idle gap 0..5, executing 5..7, blank at t=7.
        let expected = concat!(
            "P1:     ",
            "     ", "     ", "     ", "     ", "     ",
            "==== ", "==== ",
            "     ",
            " (7)"
        );
        assert_eq!(row, expected);
    }

    #[test]
    fn test_legend_present() {
        let out = rendered(&[(0, 1, 1)]);
        assert!(out.contains("Waiting: '----', Executing: '===='"));
    }
}
