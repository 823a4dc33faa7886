//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Table Compilation (at startup):
//!     RouteConfig[]  (or the built-in vacuum table)
//!     → route.rs (CannedResponse + log description per path)
//!     → table.rs (uniqueness + path syntax checks)
//!     → Freeze as immutable RouteTable, shared via Arc
//!
//! Incoming Request (path only)
//!     → table.rs (exact lookup)
//!     → Return: matched Route or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact, case-sensitive path match; no prefixes, wildcards or captures
//! - Method is never part of the match
//! - Deterministic: same path always yields the same canned response

pub mod route;
pub mod table;

pub use route::{CannedResponse, Route};
pub use table::{RouteError, RouteTable};
