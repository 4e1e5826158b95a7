use std::{convert::Infallible, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// How aggressively the positioning backend should trade power for accuracy
pub enum Priority {
    /// Best possible fixes, typically GNSS-backed
    HighAccuracy,
    /// Block-level fixes at reduced power
    Balanced,
    /// Coarse fixes only
    LowPower,
    /// Never actively obtain fixes, only ride along with other clients
    #[default]
    Passive,
}

impl FromStr for Priority {
    type Err = Infallible;

    /// Total parse: any unrecognized name falls back to [`Priority::Passive`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "high_accuracy" | "HighAccuracy" => Self::HighAccuracy,
            "balanced" | "Balanced" => Self::Balanced,
            "low_power" | "LowPower" => Self::LowPower,
            // "passive" and anything unrecognized
            _ => Self::Passive,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Parameters for a position update subscription. Created by the caller,
/// consumed once per subscribe call; constraints are enforced by the
/// positioning backend, not validated here.
pub struct UpdateRequest {
    /// Desired time between fixes
    pub interval: Duration,
    /// Shortest interval the caller can handle when fixes arrive faster
    /// than requested (e.g. another client is driving the backend harder)
    pub fastest_interval: Duration,
    /// Minimum movement before a new fix is delivered, in meters
    pub min_displacement_meters: f32,
    /// How long fixes may be batched before delivery
    pub max_delay: Duration,
    pub priority: Priority,
}

impl UpdateRequest {
    /// A request with the given interval and the backend's usual defaults
    /// for everything else.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            fastest_interval: interval,
            min_displacement_meters: 0.0,
            max_delay: Duration::ZERO,
            priority: Priority::HighAccuracy,
        }
    }
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }
}
