//! Background Tasks Module
//!
//! Periodic maintenance tasks for cache partitions.

mod sweep;

pub use sweep::spawn_sweep_task;
