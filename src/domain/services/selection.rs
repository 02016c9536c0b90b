use std::collections::BTreeSet;
use crate::domain::models::slot::Slot;

/// Slot ids picked by the user for the active resource and date.
///
/// A booked slot can never be inserted, so the set never refers to one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the slot if absent, removes it if present. Returns whether the
    /// selection changed; booked slots leave it untouched.
    pub fn toggle(&mut self, slot: &Slot) -> bool {
        if slot.is_booked {
            return false;
        }
        if !self.ids.remove(&slot.id) {
            self.ids.insert(slot.id.clone());
        }
        true
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.ids.contains(slot_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Sum of the prices of the selected slots present in `slots`. Missing
    /// prices count as zero; ids not in `slots` contribute nothing.
    pub fn total(&self, slots: &[Slot]) -> f64 {
        slots.iter()
            .filter(|s| self.ids.contains(&s.id))
            .map(|s| s.price.unwrap_or(0.0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot(id: &str, price: Option<f64>, booked: bool) -> Slot {
        Slot {
            id: id.to_string(),
            resource_id: "A".to_string(),
            start_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap(),
            price,
            is_booked: booked,
        }
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let a = slot("a", Some(10.0), false);
        let b = slot("b", Some(15.0), false);
        let mut selection = Selection::new();
        selection.toggle(&a);
        let before = selection.clone();

        selection.toggle(&b);
        selection.toggle(&b);
        assert_eq!(selection, before);

        selection.toggle(&a);
        selection.toggle(&a);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_booked_slot_is_never_selected() {
        let booked = slot("b", Some(20.0), true);
        let mut selection = Selection::new();

        assert!(!selection.toggle(&booked));
        assert!(selection.is_empty());
        assert_eq!(selection.total(&[booked]), 0.0);
    }

    #[test]
    fn test_total_is_additive() {
        let slots = vec![slot("a", Some(12.5), false), slot("b", Some(30.0), false)];

        let mut only_a = Selection::new();
        only_a.toggle(&slots[0]);
        let mut only_b = Selection::new();
        only_b.toggle(&slots[1]);
        let mut both = Selection::new();
        both.toggle(&slots[1]);
        both.toggle(&slots[0]);

        assert_eq!(both.total(&slots), only_a.total(&slots) + only_b.total(&slots));
        assert_eq!(both.total(&slots), 42.5);
    }

    #[test]
    fn test_null_price_counts_as_zero() {
        let slots = vec![slot("a", None, false), slot("b", Some(8.0), false)];
        let mut selection = Selection::new();
        selection.toggle(&slots[0]);
        selection.toggle(&slots[1]);

        assert_eq!(selection.total(&slots), 8.0);
    }

    #[test]
    fn test_total_follows_displayed_slots() {
        let a = slot("a", Some(10.0), false);
        let mut selection = Selection::new();
        selection.toggle(&a);

        assert_eq!(selection.total(&[a]), 10.0);
        assert_eq!(selection.total(&[]), 0.0);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = Selection::new();
        for id in ["a", "b", "c"] {
            selection.toggle(&slot(id, Some(1.0), false));
        }
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_empty());
    }
}
