//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cached valuations at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
