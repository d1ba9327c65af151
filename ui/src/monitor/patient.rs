//! Patient state: identity, baselines, live vitals and the bounded SpO2
//! history feeding the sparklines.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::alerts::AlertTier;

/// Sparkline window; the history buffer never grows past this.
pub const SPARK_POINTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    /// Simulation anchors the walk reverts toward.
    pub base_spo2: f64,
    pub base_pulse: f64,
    /// Live float state, clamped to the valid ranges on every tick.
    pub spo2: f64,
    pub pulse: f64,
    /// Accent color used by the card and its sparkline.
    pub color: String,
    pub tier: AlertTier,
    pub history: VitalsHistory,
}

impl Patient {
    pub fn new(id: &str, name: &str, age: u8, base_spo2: f64, base_pulse: f64, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            age,
            base_spo2,
            base_pulse,
            spo2: base_spo2,
            pulse: base_pulse,
            color: color.to_string(),
            tier: AlertTier::None,
            history: VitalsHistory::default(),
        }
    }

    pub fn rounded_spo2(&self) -> i32 {
        self.spo2.round() as i32
    }

    pub fn rounded_pulse(&self) -> i32 {
        self.pulse.round() as i32
    }
}

/// Fixed-capacity FIFO of recent SpO2 samples. Oldest sample is evicted
/// once `SPARK_POINTS` is reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsHistory {
    samples: VecDeque<f64>,
}

impl VitalsHistory {
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == SPARK_POINTS {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn oldest(&self) -> Option<f64> {
        self.samples.front().copied()
    }
}
