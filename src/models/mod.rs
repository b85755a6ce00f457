//! Simulation domain models.
//!
//! Core data types for one scheduling run: a [`Process`] carries the
//! immutable input attributes plus the fields the pipeline fills in, and
//! a [`ProcessSet`] is the ordered collection the engine operates on.
//!
//! # Lifecycle
//!
//! | Stage | Writes |
//! |-------|--------|
//! | Input shell | `id`, `arrival`, `burst`, `priority` |
//! | Dispatcher | `completion` |
//! | Metrics pass | `turnaround`, `waiting` |
//! | Renderer | nothing (read-only) |

mod process;
mod set;

pub use process::{Process, ProcessId};
pub use set::ProcessSet;

/// Discrete simulated time unit.
pub type Ticks = i64;
