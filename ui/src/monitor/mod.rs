//! Simulated vitals: patient model, random-walk simulator, alert tiers and
//! the engine/state machine driving the dashboard.

pub mod alerts;
pub mod engine;
pub mod patient;
pub mod sim;
pub mod store;

pub use alerts::{classify, AlertTier, EmergencyAlert};
pub use engine::{DefaultEngine, MonitorEngine, ViewState, TICK_MS};
pub use patient::{Patient, VitalsHistory, SPARK_POINTS};
pub use store::PatientStore;
