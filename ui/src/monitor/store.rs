//! Explicitly owned patient collection with stable iteration order.
//!
//! Tie-breaking for the emergency banner relies on first-encountered wins,
//! so the store keeps insertion order rather than hashing.

use super::patient::Patient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientStore {
    patients: Vec<Patient>,
}

impl PatientStore {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Seed roster used by the demo dashboard.
    pub fn demo() -> Self {
        Self::new(vec![
            Patient::new("mom", "Mom", 72, 96.0, 68.0, "#30d158"),
            Patient::new("dad", "Dad", 75, 93.0, 74.0, "#0a84ff"),
            Patient::new("grandma", "Grandma", 88, 91.0, 82.0, "#bf5af2"),
            Patient::new("aunt", "Aunt Lisa", 65, 97.0, 62.0, "#ff9f0a"),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Patient> {
        self.patients.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_roster_is_seeded_in_order() {
        let store = PatientStore::demo();
        let ids: Vec<&str> = store.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["mom", "dad", "grandma", "aunt"]);
    }

    #[test]
    fn lookup_by_id() {
        let store = PatientStore::demo();
        assert_eq!(store.get("grandma").map(|p| p.age), Some(88));
        assert!(store.get("nobody").is_none());
    }
}
