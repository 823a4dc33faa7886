//! Mock robotic vacuum control API.
//!
//! A test double that answers a fixed set of command paths with canned,
//! single-line responses so client code can be exercised without a device.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::schema::MockConfig;
pub use http::MockServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
