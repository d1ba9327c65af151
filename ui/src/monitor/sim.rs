//! Mean-reverting random walk for SpO2 and pulse.
//!
//! Randomness comes in through `rand::Rng` so runs are reproducible with a
//! seeded `StdRng` in tests.

use rand::Rng;

use super::patient::Patient;

pub const SPO2_MIN: f64 = 82.0;
pub const SPO2_MAX: f64 = 100.0;
pub const PULSE_MIN: f64 = 40.0;
pub const PULSE_MAX: f64 = 140.0;

/// Fraction of the distance back to baseline recovered per tick.
const REVERSION: f64 = 0.1;
/// SpO2 noise is skewed slightly upward (`-0.48` rather than `-0.5`) so
/// healthy patients hover a touch above their baseline.
const SPO2_NOISE_BIAS: f64 = 0.48;
const SPO2_NOISE_SPAN: f64 = 0.8;
const PULSE_NOISE_BIAS: f64 = 0.5;
const PULSE_NOISE_SPAN: f64 = 2.0;

/// Advance one patient by one tick: drift toward baseline plus bounded
/// noise, clamp to the valid range, append the new SpO2 to history.
pub fn advance<R: Rng + ?Sized>(patient: &mut Patient, rng: &mut R) {
    let o2_drift = (patient.base_spo2 - patient.spo2) * REVERSION;
    patient.spo2 += o2_drift + (rng.gen::<f64>() - SPO2_NOISE_BIAS) * SPO2_NOISE_SPAN;
    patient.spo2 = patient.spo2.clamp(SPO2_MIN, SPO2_MAX);

    let pulse_drift = (patient.base_pulse - patient.pulse) * REVERSION;
    patient.pulse += pulse_drift + (rng.gen::<f64>() - PULSE_NOISE_BIAS) * PULSE_NOISE_SPAN;
    patient.pulse = patient.pulse.clamp(PULSE_MIN, PULSE_MAX);

    patient.history.push(patient.spo2);
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::monitor::patient::SPARK_POINTS;

    fn patient() -> Patient {
        Patient::new("kay", "Kay", 70, 95.0, 70.0, "#30d158")
    }

    #[test]
    fn vitals_stay_in_range_over_long_runs() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = patient();

        for _ in 0..5_000 {
            advance(&mut p, &mut rng);
            assert!((SPO2_MIN..=SPO2_MAX).contains(&p.spo2), "spo2 {}", p.spo2);
            assert!(
                (PULSE_MIN..=PULSE_MAX).contains(&p.pulse),
                "pulse {}",
                p.pulse
            );
        }
    }

    #[test]
    fn history_tracks_each_tick_up_to_capacity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = patient();

        for expected in 1..=SPARK_POINTS {
            advance(&mut p, &mut rng);
            assert_eq!(p.history.len(), expected);
        }

        advance(&mut p, &mut rng);
        assert_eq!(p.history.len(), SPARK_POINTS);
        assert_eq!(p.history.to_vec().last().copied(), Some(p.spo2));
    }

    #[test]
    fn walk_reverts_toward_baseline() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = patient();
        p.spo2 = 84.0;

        for _ in 0..200 {
            advance(&mut p, &mut rng);
        }

        // After many ticks the walk has pulled well clear of the excursion.
        assert!(p.spo2 > 90.0, "spo2 stuck low at {}", p.spo2);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = patient();
        let mut b = patient();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            advance(&mut a, &mut rng_a);
            advance(&mut b, &mut rng_b);
        }

        assert_eq!(a.spo2, b.spo2);
        assert_eq!(a.pulse, b.pulse);
        assert_eq!(a.history.to_vec(), b.history.to_vec());
    }
}
