use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use crate::domain::models::slot::Slot;

/// One line of the grid: every resource's slot for an exact `(start, end)` pair.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SlotMatrixRow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Option<f64>,
    pub slots_by_resource: BTreeMap<String, Slot>,
}

/// What a grid cell shows. `NotOffered` is a resource without any slot for the
/// row, which is not the same thing as a free slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotCell<'a> {
    NotOffered,
    Available(&'a Slot),
    Booked(&'a Slot),
}

impl SlotMatrixRow {
    pub fn cell(&self, resource_id: &str) -> SlotCell<'_> {
        match self.slots_by_resource.get(resource_id) {
            None => SlotCell::NotOffered,
            Some(slot) if slot.is_booked => SlotCell::Booked(slot),
            Some(slot) => SlotCell::Available(slot),
        }
    }
}

/// Groups slots by exact `(start_time, end_time)` and orders the rows by start.
///
/// Endpoints must match exactly; overlapping intervals are never merged. The
/// row price is the first non-null price seen for the key, later differing
/// prices are ignored. A second slot for the same resource and key replaces
/// the first one.
pub fn build_slot_matrix(slots: &[Slot]) -> Vec<SlotMatrixRow> {
    let mut index: HashMap<(DateTime<Utc>, DateTime<Utc>), usize> = HashMap::new();
    let mut rows: Vec<SlotMatrixRow> = Vec::new();

    for slot in slots {
        let pos = *index.entry(slot.key()).or_insert_with(|| {
            rows.push(SlotMatrixRow {
                start_time: slot.start_time,
                end_time: slot.end_time,
                price: None,
                slots_by_resource: BTreeMap::new(),
            });
            rows.len() - 1
        });

        let row = &mut rows[pos];
        if row.price.is_none() {
            row.price = slot.price;
        }
        row.slots_by_resource.insert(slot.resource_id.clone(), slot.clone());
    }

    rows.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.end_time.cmp(&b.end_time)));
    rows
}
