//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher (one CommandEvent per handled request)
//!     → sink.rs (EventSink: tracing, null, or in-memory capture)
//!     → metrics.rs (per-path request counter)
//!
//! Process startup:
//!     → logging.rs (tracing subscriber, env filter, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - The request event goes through an injected sink, not a global logger,
//!   so tests can capture events without reading stdout
//! - Recording is fire-and-forget; sinks never report failure
//! - Metrics exporter is opt-in

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::{CapturingSink, CommandEvent, EventSink, NullSink, TracingSink};
