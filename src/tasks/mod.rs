//! Background Tasks Module
//!
//! Contains the periodic work that runs alongside the REPL.
//!
//! # Tasks
//! - Cache sweep: removes expired cache entries once per interval

mod sweep;

pub use sweep::spawn_sweep_task;
