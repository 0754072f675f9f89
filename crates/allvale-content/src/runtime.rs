//! Target-specific timers
//!
//! Natively the engine runs on tokio; in the browser it runs on the
//! wasm-bindgen executor and uses `setTimeout` through gloo-timers.

use std::future::Future;
use std::time::Duration;

/// The deadline passed before the future completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed;

/// Run `fut` to completion unless `limit` passes first
#[cfg(not(target_arch = "wasm32"))]
pub async fn with_deadline<F: Future>(limit: Duration, fut: F) -> Result<F::Output, Elapsed> {
    tokio::time::timeout(limit, fut).await.map_err(|_| Elapsed)
}

/// Run `fut` to completion unless `limit` passes first
#[cfg(target_arch = "wasm32")]
pub async fn with_deadline<F: Future>(limit: Duration, fut: F) -> Result<F::Output, Elapsed> {
    use futures::future::{select, Either};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::sleep(limit));
    match select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Elapsed),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
