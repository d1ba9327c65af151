//! Monitor engine: owns the patient store, the noise source and the
//! grid/detail view state machine.
//!
//! The engine is synchronous and free of any render or timer concern; the
//! runtime component awaits the tick cadence and calls [`MonitorEngine::tick`],
//! so tests can step it deterministically with a seeded generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::charting::trend::{Period, TrendSeries};

use super::alerts::{self, classify, EmergencyAlert};
use super::sim;
use super::store::PatientStore;

/// Simulator cadence in milliseconds.
pub const TICK_MS: u64 = 2_000;

pub type DefaultEngine = MonitorEngine<StdRng>;

/// Which screen is active. `Detail` carries the trend series so the chart
/// only regenerates on explicit navigation, never on a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Grid,
    Detail {
        patient_id: String,
        series: TrendSeries,
    },
}

#[derive(Debug, Clone)]
pub struct MonitorEngine<R: Rng = StdRng> {
    store: PatientStore,
    view: ViewState,
    rng: R,
    ticks: u64,
}

impl MonitorEngine<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(PatientStore::demo(), StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(PatientStore::demo(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MonitorEngine<R> {
    pub fn new(store: PatientStore, rng: R) -> Self {
        Self {
            store,
            view: ViewState::Grid,
            rng,
            ticks: 0,
        }
    }

    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One simulator pass: advance every patient independently, then
    /// re-derive its alert tier from the rounded reading.
    pub fn tick(&mut self) {
        for patient in self.store.iter_mut() {
            sim::advance(patient, &mut self.rng);
            patient.tier = classify(patient.rounded_spo2());
        }
        self.ticks += 1;
    }

    pub fn emergency(&self) -> Option<EmergencyAlert> {
        alerts::emergency(&self.store)
    }

    /// Open the detail screen for `id`, generating that patient's "Day"
    /// trend. Unknown ids leave the view untouched.
    pub fn open_detail(&mut self, id: &str) {
        let Some(baseline) = self.store.get(id).map(|p| p.base_spo2) else {
            return;
        };

        self.view = ViewState::Detail {
            patient_id: id.to_string(),
            series: TrendSeries::generate(Period::Day, baseline, &mut self.rng),
        };
    }

    pub fn close_detail(&mut self) {
        self.view = ViewState::Grid;
    }

    /// External navigation (router tab change) drops any open detail.
    pub fn tab_changed(&mut self) {
        self.view = ViewState::Grid;
    }

    /// Regenerate the detail series for a new period. No-op on the grid.
    pub fn select_period(&mut self, period: Period) {
        let ViewState::Detail { patient_id, series } = &mut self.view else {
            return;
        };

        let Some(baseline) = self.store.get(patient_id).map(|p| p.base_spo2) else {
            return;
        };

        *series = TrendSeries::generate(period, baseline, &mut self.rng);
    }

    /// The patient backing the open detail screen, if any.
    pub fn detail_patient(&self) -> Option<&super::patient::Patient> {
        match &self.view {
            ViewState::Detail { patient_id, .. } => self.store.get(patient_id),
            ViewState::Grid => None,
        }
    }

    pub fn detail_series(&self) -> Option<&TrendSeries> {
        match &self.view {
            ViewState::Detail { series, .. } => Some(series),
            ViewState::Grid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::sim::{PULSE_MAX, PULSE_MIN, SPO2_MAX, SPO2_MIN};

    #[test]
    fn tick_advances_every_patient_and_retiers() {
        let mut engine = MonitorEngine::seeded(1);
        engine.tick();

        for patient in engine.store().iter() {
            assert_eq!(patient.history.len(), 1);
            assert_eq!(patient.tier, classify(patient.rounded_spo2()));
        }
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn invariants_hold_for_every_patient_across_ticks() {
        let mut engine = MonitorEngine::seeded(99);

        for _ in 0..1_000 {
            engine.tick();
            for patient in engine.store().iter() {
                assert!((SPO2_MIN..=SPO2_MAX).contains(&patient.spo2));
                assert!((PULSE_MIN..=PULSE_MAX).contains(&patient.pulse));
            }
        }
    }

    #[test]
    fn open_detail_generates_day_series() {
        let mut engine = MonitorEngine::seeded(5);
        engine.open_detail("dad");

        let series = engine.detail_series().expect("detail open");
        assert_eq!(series.period, Period::Day);
        assert_eq!(series.samples.len(), Period::Day.sample_count());
        assert_eq!(engine.detail_patient().map(|p| p.id.as_str()), Some("dad"));
    }

    #[test]
    fn open_detail_ignores_unknown_id() {
        let mut engine = MonitorEngine::seeded(5);
        engine.open_detail("stranger");
        assert_eq!(*engine.view(), ViewState::Grid);
    }

    #[test]
    fn tab_change_forces_detail_back_to_grid() {
        let mut engine = MonitorEngine::seeded(5);
        engine.open_detail("mom");
        assert!(engine.detail_patient().is_some());

        engine.tab_changed();
        assert_eq!(*engine.view(), ViewState::Grid);
        assert!(engine.detail_patient().is_none());
    }

    #[test]
    fn select_period_swaps_series_without_touching_patients() {
        let mut engine = MonitorEngine::seeded(5);
        engine.open_detail("grandma");
        let before: Vec<f64> = engine
            .store()
            .iter()
            .map(|p| p.spo2)
            .collect();

        engine.select_period(Period::Week);

        let series = engine.detail_series().unwrap();
        assert_eq!(series.period, Period::Week);
        assert_eq!(series.samples.len(), 7);
        let after: Vec<f64> = engine.store().iter().map(|p| p.spo2).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn select_period_is_a_noop_on_grid() {
        let mut engine = MonitorEngine::seeded(5);
        engine.select_period(Period::Year);
        assert_eq!(*engine.view(), ViewState::Grid);
    }

    #[test]
    fn ticks_never_regenerate_the_open_series() {
        let mut engine = MonitorEngine::seeded(5);
        engine.open_detail("mom");
        let before = engine.detail_series().unwrap().clone();

        for _ in 0..10 {
            engine.tick();
        }

        assert_eq!(*engine.detail_series().unwrap(), before);
    }
}
