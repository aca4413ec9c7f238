use crate::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Timed-suspension capability. Injected so tests can drive the full loop
/// without wall-clock waits.
#[async_trait]
pub trait Pacing: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Production pacing backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacing;

#[async_trait]
impl Pacing for TokioPacing {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[async_trait]
impl<T: Pacing + ?Sized> Pacing for Arc<T> {
    async fn pause(&self, duration: Duration) {
        (**self).pause(duration).await;
    }
}
