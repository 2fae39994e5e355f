use std::future::Future;

use async_trait::async_trait;

/// Decides whether the caller's access configuration is still valid.
#[async_trait]
pub trait FreshnessCheck: Send + Sync {
    /// Returns `true` when it is safe to issue a remote call.
    async fn is_fresh(&self) -> bool;
}

/// Attempts to restore a stale access configuration.
#[async_trait]
pub trait FreshnessRefresh: Send + Sync {
    /// Returns `true` when the configuration was restored.
    async fn refresh(&self) -> bool;
}

// Any `Fn() -> impl Future<Output = bool>` can be declared directly. Wrap a
// synchronous predicate with `std::future::ready`.
#[async_trait]
impl<F, Fut> FreshnessCheck for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = bool> + Send + 'static,
{
    async fn is_fresh(&self) -> bool {
        (self)().await
    }
}

#[async_trait]
impl<F, Fut> FreshnessRefresh for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = bool> + Send + 'static,
{
    async fn refresh(&self) -> bool {
        (self)().await
    }
}
