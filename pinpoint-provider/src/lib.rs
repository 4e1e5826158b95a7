mod adapter;
mod vendor;

pub use adapter::ProviderAdapter;
pub use vendor::{OneShotHandler, UpdateListener, VendorClient, VendorPriority, VendorRequest};
