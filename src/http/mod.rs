//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, one `any` route per table entry)
//!     → request.rs (assign and echo X-Request-ID)
//!     → dispatch.rs (exact path lookup, record event)
//!     → CannedResponse (status + single-line body)
//!     → Send to client
//!
//! Unknown path
//!     → Axum default fallback (404, empty body)
//! ```

pub mod dispatch;
pub mod request;
pub mod server;

pub use dispatch::Dispatcher;
pub use request::{request_id, X_REQUEST_ID};
pub use server::MockServer;
