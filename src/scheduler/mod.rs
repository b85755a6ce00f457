//! Simulation engine: dispatch and derived metrics.
//!
//! [`PriorityScheduler`] performs the scheduling decisions (repeated
//! selection of the next process to run); [`SimMetrics`] derives
//! turnaround, waiting, and average times afterwards. Both mutate the
//! [`ProcessSet`](crate::models::ProcessSet) in place, in that order.
//!
//! # Usage
//!
//! ```
//! use priosim::models::ProcessSet;
//! use priosim::scheduler::{PriorityScheduler, SimMetrics};
//!
//! let mut set = ProcessSet::from_records([(0, 5, 1)]);
//! PriorityScheduler::new().schedule(&mut set);
//! let metrics = SimMetrics::calculate(&mut set);
//! assert_eq!(metrics.avg_turnaround, 5.0);
//! ```

mod dispatch;
mod metrics;

pub use dispatch::PriorityScheduler;
pub use metrics::SimMetrics;
