use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Convenience alias for UTC DT
pub type UtcDT = DateTime<Utc>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// A single resolved fix as reported by the positioning backend. The engine
/// never inspects or adjusts these, they pass through unchanged.
pub struct PositionSample {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub long: f64,
    /// Estimated horizontal accuracy radius in meters, when the backend
    /// reports one
    pub horizontal_accuracy_meters: Option<f64>,
    /// When the fix was resolved
    pub timestamp: UtcDT,
}

impl PositionSample {
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            lat,
            long,
            horizontal_accuracy_meters: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
/// An ordered batch of fixes delivered to a callback in one go. A one-shot
/// fetch yields at most one sample; an empty batch means the backend had no
/// fix available, which is a success, not a failure.
pub struct ResultBatch {
    samples: Vec<PositionSample>,
}

impl ResultBatch {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(sample: PositionSample) -> Self {
        Self {
            samples: vec![sample],
        }
    }

    pub fn from_samples(samples: Vec<PositionSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[PositionSample] {
        &self.samples
    }

    /// The most recent fix in the batch, if any
    pub fn last(&self) -> Option<&PositionSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<PositionSample>> for ResultBatch {
    fn from(samples: Vec<PositionSample>) -> Self {
        Self::from_samples(samples)
    }
}

impl IntoIterator for ResultBatch {
    type Item = PositionSample;
    type IntoIter = std::vec::IntoIter<PositionSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
