//! Shared chase model used by the demo binaries.
//!
//! Demonstrates: ASCII map scenarios, a memoized destination field, and an
//! agent that flees a shortest-path pursuer while heading for an exit.

pub mod config;
pub mod sim;

pub use config::{ConfigError, ScenarioConfig};
pub use sim::{Chase, Outcome, pursue};
