use async_trait::async_trait;
use std::time::Duration;

/// Seam for the simulated network latency every service call goes through.
/// Production wiring uses `NetworkLatency`; tests inject `NoLatency` so the
/// suites run without the delays.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn simulate(&self, delay: Duration);
}

/// Sleeps for the full requested delay, imitating a backend round trip.
#[derive(Debug, Clone, Default)]
pub struct NetworkLatency;

#[async_trait]
impl Latency for NetworkLatency {
    async fn simulate(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Resolves immediately.
#[derive(Debug, Clone, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn simulate(&self, _delay: Duration) {}
}
