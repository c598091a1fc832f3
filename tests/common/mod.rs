//! Common test utilities for scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated source and mirror directories plus a CLI runner
//! - `WatchSession`: a watch loop running on a background thread
//! - Polling helpers and mirror assertions

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
pub use session::*;
