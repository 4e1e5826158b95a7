use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Positioning is currently unavailable for an active subscription. This is
/// the only failure the engine synthesizes itself; every other error is
/// passed through from the backend untouched. May be delivered repeatedly,
/// once per unavailability signal, even after real fixes have already
/// arrived on the same subscription.
pub struct Unavailable;

impl Unavailable {
    /// Whether the given failure is an unavailability signal rather than a
    /// backend error.
    pub fn caused(error: &anyhow::Error) -> bool {
        error.downcast_ref::<Self>().is_some()
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "positioning is currently unavailable")
    }
}

impl std::error::Error for Unavailable {}
