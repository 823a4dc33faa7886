//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build route table → Install metrics (optional) → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger or OS signal → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Route table errors are detected before the socket is bound
//! - Bind failure ends startup; it is never retried

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, StartupError};
