//! Browser timer helper.

use std::time::Duration;

/// Wait for `duration` on the browser event loop. Native builds return
/// immediately.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
    }
}
