//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID, open request span)
//!     → handlers.rs (simulated work, spans, latency samples)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use handlers::{AppState, WorkloadService, WorkloadServiceBuilder};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
