use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use log::debug;

use pinpoint_engine::{
    LocationEngine, PositionCallback, PositionSample, Priority, ResultBatch, Unavailable,
    UpdateRequest,
};

use crate::vendor::{OneShotHandler, UpdateListener, VendorClient, VendorPriority, VendorRequest};

/// Adapts a [`VendorClient`] to the abstract [`LocationEngine`] surface.
///
/// The adapter is a pure translator: requests are mapped field by field into
/// the vendor's native shape, vendor deliveries are forwarded to the
/// caller's callback in vendor order on the vendor's thread, and vendor
/// errors pass through untouched. The only failure synthesized here is
/// [`Unavailable`], raised each time the vendor signals that positioning
/// has become unavailable for an active subscription.
///
/// All live state (active registrations, last known position) belongs to
/// the vendor client; the adapter only keeps the map from a subscribed
/// callback's identity to the listener shim it registered, so that
/// unsubscribing cancels the right vendor-side registration without
/// touching any other subscription.
pub struct ProviderAdapter<C: VendorClient> {
    client: C,
    shims: Mutex<HashMap<usize, Arc<UpdateShim>>>,
}

impl<C: VendorClient> ProviderAdapter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            shims: Mutex::new(HashMap::new()),
        }
    }

    /// Access to the wrapped vendor client
    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Subscriptions are keyed by the identity of the caller's `Arc`, not by
/// any equality the callback type happens to implement.
fn callback_key(callback: &Arc<dyn PositionCallback>) -> usize {
    Arc::as_ptr(callback) as *const () as usize
}

pub(crate) fn to_vendor_priority(priority: Priority) -> VendorPriority {
    match priority {
        Priority::HighAccuracy => VendorPriority::HighAccuracy,
        Priority::Balanced => VendorPriority::BalancedPowerAccuracy,
        Priority::LowPower => VendorPriority::LowPower,
        Priority::Passive => VendorPriority::Passive,
    }
}

pub(crate) fn to_vendor_request(request: &UpdateRequest) -> VendorRequest {
    VendorRequest {
        base_interval: request.interval,
        min_update_interval: request.fastest_interval,
        min_update_distance_meters: request.min_displacement_meters,
        max_update_delay: request.max_delay,
        priority: to_vendor_priority(request.priority),
    }
}

impl<C: VendorClient> LocationEngine for ProviderAdapter<C> {
    type Context = C::Context;
    type DeferredTarget = C::DeferredTarget;

    fn fetch_once(&self, callback: Arc<dyn PositionCallback>) {
        debug!("requesting one-shot position fix");
        self.client.last_position(Arc::new(OneShotShim { callback }));
    }

    fn subscribe(
        &self,
        request: &UpdateRequest,
        callback: Arc<dyn PositionCallback>,
        context: Option<Self::Context>,
    ) {
        debug!("subscribing for updates with priority {:?}", request.priority);

        let shim = Arc::new(UpdateShim {
            callback: callback.clone(),
        });

        let replaced = self
            .shims
            .lock()
            .expect("subscription table poisoned")
            .insert(callback_key(&callback), shim.clone());

        // Subscribing the same callback twice replaces the registration
        if let Some(old) = replaced {
            let old: Arc<dyn UpdateListener> = old;
            self.client.remove_updates(&old);
        }

        self.client
            .request_updates(to_vendor_request(request), shim, context);
    }

    fn subscribe_deferred(&self, request: &UpdateRequest, target: Self::DeferredTarget) {
        debug!("registering deferred update delivery");
        self.client
            .request_updates_deferred(to_vendor_request(request), target);
    }

    fn unsubscribe(&self, callback: &Arc<dyn PositionCallback>) {
        let removed = self
            .shims
            .lock()
            .expect("subscription table poisoned")
            .remove(&callback_key(callback));

        if let Some(shim) = removed {
            debug!("unsubscribing callback from updates");
            let listener: Arc<dyn UpdateListener> = shim;
            self.client.remove_updates(&listener);
        }
    }

    fn unsubscribe_deferred(&self, target: Option<Self::DeferredTarget>) {
        if let Some(target) = target {
            debug!("removing deferred update delivery");
            self.client.remove_updates_deferred(target);
        }
    }
}

/// Listener shim for one-shot fetches: a missing fix is an empty successful
/// batch, never an error.
struct OneShotShim {
    callback: Arc<dyn PositionCallback>,
}

impl OneShotHandler for OneShotShim {
    fn on_position(&self, position: Option<PositionSample>) {
        let batch = match position {
            Some(sample) => ResultBatch::single(sample),
            None => ResultBatch::empty(),
        };
        self.callback.on_success(batch);
    }

    fn on_error(&self, error: anyhow::Error) {
        self.callback.on_failure(error);
    }
}

/// Listener shim for continuous updates: one vendor delivery becomes one
/// `on_success`, samples kept in vendor order; every unavailability signal
/// becomes one `on_failure(Unavailable)`, including after fixes have
/// already been delivered.
struct UpdateShim {
    callback: Arc<dyn PositionCallback>,
}

impl UpdateListener for UpdateShim {
    fn on_samples(&self, samples: Vec<PositionSample>) {
        self.callback.on_success(ResultBatch::from_samples(samples));
    }

    fn on_availability(&self, available: bool) {
        if !available {
            self.callback.on_failure(anyhow::Error::new(Unavailable));
        }
    }
}
