//! Library exports for reusing doodlepad subsystems.
//!
//! Exposes the stroke store, the touch state machine and the configuration
//! types alongside the replay shell so that other front ends (or tests) can
//! drive the same drawing core the binary uses.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
