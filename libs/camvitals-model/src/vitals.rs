//! Vitals readings and derived-metric classification
//!
//! A [`VitalsReading`] is one immutable snapshot of simulated physiological
//! measurements. Stress and activity levels are pure functions of heart rate;
//! the threshold tables below are the only business thresholds in the system
//! and boundary values always fall into the lower-severity bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ============================================================================
// Field bounds (inclusive)
// ============================================================================

pub const HEART_RATE_BPM: RangeInclusive<u32> = 60..=100;
pub const RESPIRATION_RATE: RangeInclusive<u32> = 12..=20;
pub const BLOOD_PRESSURE_SYSTOLIC: RangeInclusive<u32> = 110..=140;
pub const BLOOD_PRESSURE_DIASTOLIC: RangeInclusive<u32> = 70..=90;
pub const OXYGEN_SATURATION: RangeInclusive<u32> = 95..=100;
pub const BREATHING_RATE: RangeInclusive<u32> = 12..=18;

// ============================================================================
// Derived metrics
// ============================================================================

/// Stress classification derived from heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// Classify a heart rate in BPM.
    ///
    /// Total over all integers so it can be reused with real measurements
    /// later. Strict comparisons: 85 BPM is `Moderate`, not `High`.
    pub fn from_heart_rate(bpm: i64) -> Self {
        if bpm > 85 {
            StressLevel::High
        } else if bpm > 75 {
            StressLevel::Moderate
        } else {
            StressLevel::Low
        }
    }
}

/// Activity classification derived from heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Resting,
    Light,
    Active,
    /// Serialized as "Very Active" to match the dashboard label.
    #[serde(rename = "Very Active")]
    VeryActive,
}

impl ActivityLevel {
    /// Classify a heart rate in BPM. Strict comparisons, same as
    /// [`StressLevel::from_heart_rate`]: 90 BPM is `Active`.
    pub fn from_heart_rate(bpm: i64) -> Self {
        if bpm > 90 {
            ActivityLevel::VeryActive
        } else if bpm > 80 {
            ActivityLevel::Active
        } else if bpm > 70 {
            ActivityLevel::Light
        } else {
            ActivityLevel::Resting
        }
    }
}

// ============================================================================
// Readings
// ============================================================================

/// One synthetic snapshot of simulated physiological measurements.
///
/// Created fresh on every sampler tick and never mutated afterwards. All
/// numeric fields lie within their declared inclusive bounds; the classifier
/// fields are derived from `heart_rate` at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
    pub heart_rate: u32,
    pub respiration_rate: u32,
    pub blood_pressure_systolic: u32,
    pub blood_pressure_diastolic: u32,
    pub oxygen_saturation: u32,
    pub breathing_rate: u32,
    pub stress_level: StressLevel,
    pub activity_level: ActivityLevel,
    pub timestamp: DateTime<Utc>,
}
