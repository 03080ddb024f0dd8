//! Synthetic vitals generation

use camvitals_model::vitals::{
    ActivityLevel, StressLevel, VitalsReading, BLOOD_PRESSURE_DIASTOLIC, BLOOD_PRESSURE_SYSTOLIC,
    BREATHING_RATE, HEART_RATE_BPM, OXYGEN_SATURATION, RESPIRATION_RATE,
};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Draw one reading with every field uniform over its inclusive bounds.
///
/// Generation cannot fail and touches no shared state; the caller owns
/// placement into history. The random source is injected so tests can seed a
/// deterministic sequence.
pub fn generate_reading<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> VitalsReading {
    let heart_rate = rng.gen_range(HEART_RATE_BPM);

    VitalsReading {
        heart_rate,
        respiration_rate: rng.gen_range(RESPIRATION_RATE),
        blood_pressure_systolic: rng.gen_range(BLOOD_PRESSURE_SYSTOLIC),
        blood_pressure_diastolic: rng.gen_range(BLOOD_PRESSURE_DIASTOLIC),
        oxygen_saturation: rng.gen_range(OXYGEN_SATURATION),
        breathing_rate: rng.gen_range(BREATHING_RATE),
        stress_level: StressLevel::from_heart_rate(i64::from(heart_rate)),
        activity_level: ActivityLevel::from_heart_rate(i64::from(heart_rate)),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn every_field_stays_in_bounds_over_ten_thousand_samples() {
        let mut rng = StdRng::seed_from_u64(0xCA11);
        for _ in 0..10_000 {
            let r = generate_reading(&mut rng, Utc::now());
            assert!(HEART_RATE_BPM.contains(&r.heart_rate));
            assert!(RESPIRATION_RATE.contains(&r.respiration_rate));
            assert!(BLOOD_PRESSURE_SYSTOLIC.contains(&r.blood_pressure_systolic));
            assert!(BLOOD_PRESSURE_DIASTOLIC.contains(&r.blood_pressure_diastolic));
            assert!(OXYGEN_SATURATION.contains(&r.oxygen_saturation));
            assert!(BREATHING_RATE.contains(&r.breathing_rate));
        }
    }

    #[test]
    fn derived_levels_match_heart_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let r = generate_reading(&mut rng, Utc::now());
            assert_eq!(
                r.stress_level,
                StressLevel::from_heart_rate(i64::from(r.heart_rate))
            );
            assert_eq!(
                r.activity_level,
                ActivityLevel::from_heart_rate(i64::from(r.heart_rate))
            );
        }
    }
}
