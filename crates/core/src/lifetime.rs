//! Ties in-flight requests to the view that started them

use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Lives as long as a mounted view. Requests awaited through
/// [`ViewLifetime::guard`] resolve to `None` once the view has ended, so a
/// late response never updates a view that is gone.
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    token: CancellationToken,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Mark the view as gone. Idempotent.
    pub fn end(&self) {
        self.token.cancel();
    }

    /// Await `fut` unless the view ends first
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("View ended; dropping late completion");
                None
            }
            output = fut => Some(output),
        }
    }
}
