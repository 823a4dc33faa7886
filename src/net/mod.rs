//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse address, bind TCP socket)
//!     → Hand off to HTTP layer (one task per accepted connection)
//! ```
//!
//! # Design Decisions
//! - Bind failure is surfaced once, at startup, with no retry
//! - No alternate port selection

pub mod listener;

pub use listener::{bind, ListenerError};
