use std::{sync::Arc, time::Duration};

use pinpoint_engine::PositionSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Power/accuracy hint in the vendor client's own vocabulary
pub enum VendorPriority {
    HighAccuracy,
    BalancedPowerAccuracy,
    LowPower,
    Passive,
}

#[derive(Debug, Clone, PartialEq)]
/// The vendor client's native update request, built field by field from an
/// [`pinpoint_engine::UpdateRequest`] on every subscribe call
pub struct VendorRequest {
    pub base_interval: Duration,
    pub min_update_interval: Duration,
    pub min_update_distance_meters: f32,
    pub max_update_delay: Duration,
    pub priority: VendorPriority,
}

/// Success and failure listener for a one-shot fetch, registered as a pair
/// with the vendor client. `None` means the backend has no fix to offer.
pub trait OneShotHandler: Send + Sync {
    fn on_position(&self, position: Option<PositionSample>);
    fn on_error(&self, error: anyhow::Error);
}

/// Push-style listener for continuous updates. The vendor delivers batches
/// of one or more samples and, separately, availability transitions.
pub trait UpdateListener: Send + Sync {
    fn on_samples(&self, samples: Vec<PositionSample>);
    fn on_availability(&self, available: bool);
}

/// The external positioning service this crate adapts. Treated as opaque:
/// all scheduling, accuracy, and power decisions live behind this trait,
/// and listeners are invoked on threads of the vendor's choosing.
pub trait VendorClient: Send + Sync {
    /// Thread/queue selector the vendor accepts for listener delivery
    type Context;
    /// Platform deferred-delivery registration (e.g. a broadcast target)
    type DeferredTarget;

    /// Request the last known position once. Exactly one of the handler's
    /// methods will eventually be invoked.
    fn last_position(&self, handler: Arc<dyn OneShotHandler>);

    fn request_updates(
        &self,
        request: VendorRequest,
        listener: Arc<dyn UpdateListener>,
        context: Option<Self::Context>,
    );

    fn request_updates_deferred(&self, request: VendorRequest, target: Self::DeferredTarget);

    /// Cancel the registration made for this exact listener. Unknown
    /// listeners are ignored.
    fn remove_updates(&self, listener: &Arc<dyn UpdateListener>);

    fn remove_updates_deferred(&self, target: Self::DeferredTarget);
}
