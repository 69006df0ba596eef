//! Latency demo service library.
//!
//! Three GET endpoints simulate variable-latency work and emit spans,
//! histogram samples and logs while doing it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod workload;

pub use config::schema::ServiceConfig;
pub use http::{HttpServer, WorkloadService};
pub use lifecycle::Shutdown;
