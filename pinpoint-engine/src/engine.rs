use std::sync::Arc;

use crate::{request::UpdateRequest, result::ResultBatch};

/// Receives the outcome of a one-shot fetch or an update subscription.
/// Invoked on whatever thread the positioning backend delivers on; the
/// engine adds no hops and no ordering beyond the backend's own. The
/// identity of the `Arc` a caller subscribes with doubles as the
/// subscription handle for [`LocationEngine::unsubscribe`].
pub trait PositionCallback: Send + Sync {
    /// One delivery from the backend. For subscriptions the batch carries
    /// every sample of the vendor delivery, in vendor order; for one-shot
    /// fetches it carries at most one sample, empty meaning no fix was
    /// available.
    fn on_success(&self, batch: ResultBatch);
    /// A backend failure, passed through unchanged, or [`crate::Unavailable`]
    /// when the backend signals positioning is currently unavailable.
    fn on_failure(&self, error: anyhow::Error);
}

/// A source of position fixes, independent of which backend supplies them.
/// All operations return immediately after registering with the backend;
/// results arrive later through the callback.
pub trait LocationEngine: Send + Sync {
    /// Backend-specific thread/queue selector for callback delivery.
    /// `None` means the caller's default.
    type Context;
    /// Backend-specific deferred-delivery registration, for receiving
    /// updates outside a live in-process listener.
    type DeferredTarget;

    /// Request a single best-effort fix.
    fn fetch_once(&self, callback: Arc<dyn PositionCallback>);

    /// Start continuous updates for `callback`. Subscribing the same
    /// callback again replaces its previous registration.
    fn subscribe(
        &self,
        request: &UpdateRequest,
        callback: Arc<dyn PositionCallback>,
        context: Option<Self::Context>,
    );

    /// Start continuous updates delivered to a platform target instead of an
    /// in-process callback. Delivery bypasses the engine entirely.
    fn subscribe_deferred(&self, request: &UpdateRequest, target: Self::DeferredTarget);

    /// Stop updates for `callback`. A no-op if it was never subscribed.
    /// Takes effect for future deliveries only; a delivery already in
    /// flight on another thread may still land.
    fn unsubscribe(&self, callback: &Arc<dyn PositionCallback>);

    /// Stop updates for a deferred target. A no-op on `None`.
    fn unsubscribe_deferred(&self, target: Option<Self::DeferredTarget>);
}
