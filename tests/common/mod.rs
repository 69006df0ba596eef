//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use latency_demo::config::ServiceConfig;
use latency_demo::http::{HttpServer, WorkloadService};
use latency_demo::lifecycle::Shutdown;
use latency_demo::observability::{RecordingMeter, RecordingTracer};
use latency_demo::workload::{DayOfWeek, FixedClock, SequenceRandom};
use tokio::task::JoinHandle;

#[allow(dead_code)]
/// A live server bound to an ephemeral port, with in-memory telemetry.
pub struct TestServer {
    pub addr: SocketAddr,
    pub tracer: Arc<RecordingTracer>,
    pub meter: Arc<RecordingMeter>,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server whose delays and loop counts replay `sequence`.
pub async fn start_server(sequence: Vec<u32>) -> TestServer {
    let tracer = Arc::new(RecordingTracer::new());
    let meter = Arc::new(RecordingMeter::new());
    let service = WorkloadService::builder(tracer.clone(), meter.clone())
        .workload_random(Arc::new(SequenceRandom::new(sequence)))
        .clock(Arc::new(FixedClock(DayOfWeek::Thursday)))
        .build();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    config.observability.metrics_enabled = false;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, service, shutdown.subscribe());
    let handle = tokio::spawn(server.run(listener));

    // Give the accept loop a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        tracer,
        meter,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
