//! Domain Layer
//!
//! Core types of the watch-to-mirror pipeline, free of OS notification details.
//!
//! ## Structure
//!
//! - `entities/` - Watch roots, change events, pending copies
//! - `services/` - Pure functions (mirror path mapping)
//! - `ports/` - Interface definitions for infrastructure (event source)
//!
//! ## Design Principles
//!
//! 1. **No notification backend** - events arrive through the `EventSource` port
//! 2. **Pure mapping** - destination paths depend only on their inputs

pub mod entities;
pub mod ports;
pub mod services;
