//! Threshold classification of rounded SpO2 readings.
//!
//! Everything here is a pure function of its inputs: the same rounded value
//! always produces the same tier, labels and style tokens. Tier boundaries:
//! below 90 is critical, 90 through 92 is warning, 93 and up is clear.

use serde::{Deserialize, Serialize};

use super::store::PatientStore;

const GREEN: &str = "#30d158";
const YELLOW: &str = "#ffd60a";
const RED: &str = "#ff3b30";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    None,
    Warning,
    Critical,
}

/// Classify a rounded SpO2 reading.
pub fn classify(rounded_spo2: i32) -> AlertTier {
    if rounded_spo2 < 90 {
        AlertTier::Critical
    } else if rounded_spo2 < 93 {
        AlertTier::Warning
    } else {
        AlertTier::None
    }
}

impl AlertTier {
    /// Short alert line shown on each patient card.
    pub fn card_label(self) -> &'static str {
        match self {
            Self::Critical => "Critical low O2",
            Self::Warning => "Low O2 warning",
            Self::None => "No alerts",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Self::Critical => "patient-alert-text alert-active",
            Self::Warning => "patient-alert-text alert-warning",
            Self::None => "patient-alert-text",
        }
    }

    /// Color token for the numeric SpO2 readout.
    pub fn value_color(self) -> &'static str {
        match self {
            Self::Critical => RED,
            Self::Warning => YELLOW,
            Self::None => GREEN,
        }
    }

    /// Status badge shown on the detail screen.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Monitor",
            Self::None => "Stable",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Critical => "detail-status detail-status--critical",
            Self::Warning => "detail-status detail-status--warning",
            Self::None => "detail-status detail-status--stable",
        }
    }

    pub fn detail_class(self) -> &'static str {
        match self {
            Self::Critical => "detail-alert alert-red",
            Self::Warning => "detail-alert alert-yellow",
            Self::None => "detail-alert alert-green",
        }
    }

    pub fn detail_icon(self) -> &'static str {
        match self {
            Self::Critical => "⚠",
            Self::Warning => "⏛",
            Self::None => "✓",
        }
    }

    /// Detail alert panel copy; critical and warning embed the reading.
    pub fn detail_message(self, rounded_spo2: i32) -> String {
        match self {
            Self::Critical => {
                format!("SpO2 critically low at {rounded_spo2}%. Immediate attention needed.")
            }
            Self::Warning => {
                format!("SpO2 slightly low at {rounded_spo2}%. Monitoring recommended.")
            }
            Self::None => "All vitals within normal range.".to_string(),
        }
    }
}

impl Default for AlertTier {
    fn default() -> Self {
        Self::None
    }
}

/// Aggregate banner state: the single worst patient, if any is critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub patient_id: String,
    pub name: String,
    pub spo2: i32,
}

impl EmergencyAlert {
    pub fn banner_text(&self) -> String {
        format!("Critical: {} SpO2 at {}%", self.name, self.spo2)
    }
}

/// Scan the store for the lowest rounded SpO2. The banner shows iff that
/// minimum is below 90; ties keep the first patient in store order.
pub fn emergency(store: &PatientStore) -> Option<EmergencyAlert> {
    let mut worst: Option<(&super::patient::Patient, i32)> = None;

    for patient in store.iter() {
        let spo2 = patient.rounded_spo2();
        match worst {
            Some((_, low)) if spo2 >= low => {}
            _ => worst = Some((patient, spo2)),
        }
    }

    worst.and_then(|(patient, spo2)| {
        (spo2 < 90).then(|| EmergencyAlert {
            patient_id: patient.id.clone(),
            name: patient.name.clone(),
            spo2,
        })
    })
}
