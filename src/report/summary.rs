//! Summary table rendering.
//!
//! One column-aligned row per process (id, priority, arrival, burst,
//! completion, turnaround, waiting), framed by dashed rules, followed by
//! the average turnaround and waiting times to two decimal places.

use crate::models::ProcessSet;
use crate::scheduler::SimMetrics;

const HEADER: &str = "| ID  | Priority | Arrival | Burst | Completion | Turnaround | Waiting |";
const SEPARATOR: &str = "|-----|----------|---------|-------|------------|------------|---------|";

/// Appends the summary table and average footer to `out`.
pub fn write_summary(out: &mut String, set: &ProcessSet, metrics: &SimMetrics) {
    out.push_str("\nProcess Summary Table:\n");
    let rule = "-".repeat(HEADER.len());
    out.push_str(&rule);
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');

    for process in &set.processes {
        let completion = process
            .completion
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        out.push_str(&format!(
            "| {:>2}  |    {:>2}    |   {:>2}    |  {:>2}   |     {:>2}     |     {:>2}     |   {:>2}    |\n",
            process.id,
            process.priority,
            process.arrival,
            process.burst,
            completion,
            process.turnaround,
            process.waiting,
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Avg Turnaround Time: {:.2}\n",
        metrics.avg_turnaround
    ));
    out.push_str(&format!("Avg Waiting Time: {:.2}\n", metrics.avg_waiting));
}
