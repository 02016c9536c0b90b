use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::models::{resource::{Resource, ResourceSummary}, slot::Slot};
use crate::domain::services::availability::CalendarDay;
use crate::domain::services::booking_page::{BookingPage, PageError};
use crate::domain::services::selection::Selection;
use crate::domain::services::slot_matrix::{SlotCell, SlotMatrixRow};

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<Slot>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    NotOffered,
    Available,
    Booked,
}

#[derive(Serialize)]
pub struct MatrixCellResponse {
    pub resource_id: String,
    pub state: CellState,
    pub slot: Option<Slot>,
    pub selected: bool,
}

#[derive(Serialize)]
pub struct MatrixRowResponse {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Option<f64>,
    pub cells: Vec<MatrixCellResponse>,
}

impl MatrixRowResponse {
    /// One cell per column resource, in column order.
    pub fn from_row(row: &SlotMatrixRow, columns: &[Resource], selection: Option<&Selection>) -> Self {
        let cells = columns.iter().map(|resource| {
            let (state, slot) = match row.cell(&resource.id) {
                SlotCell::NotOffered => (CellState::NotOffered, None),
                SlotCell::Available(slot) => (CellState::Available, Some(slot.clone())),
                SlotCell::Booked(slot) => (CellState::Booked, Some(slot.clone())),
            };
            let selected = match (&slot, selection) {
                (Some(slot), Some(selection)) => selection.contains(&slot.id),
                _ => false,
            };
            MatrixCellResponse { resource_id: resource.id.clone(), state, slot, selected }
        }).collect();

        Self {
            start_time: row.start_time,
            end_time: row.end_time,
            price: row.price,
            cells,
        }
    }
}

#[derive(Serialize)]
pub struct SlotMatrixResponse {
    pub date: String,
    pub resources: Vec<ResourceSummary>,
    pub rows: Vec<MatrixRowResponse>,
    /// Day has no slots at all; rendered as an explicit empty state.
    pub empty: bool,
}

#[derive(Serialize)]
pub struct DisabledDaysResponse {
    pub resource_id: String,
    pub disabled_days: Vec<CalendarDay>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub date: String,
    pub selected: Vec<String>,
    pub refused: Vec<String>,
    pub total: f64,
}

#[derive(Serialize)]
pub struct BookingPageResponse {
    pub resource: Option<Resource>,
    pub resources: Vec<ResourceSummary>,
    pub date: String,
    pub disabled_days: Vec<CalendarDay>,
    pub rows: Vec<MatrixRowResponse>,
    pub no_slots: bool,
    pub selected: Vec<String>,
    pub total: f64,
    pub error: Option<PageError>,
}

impl From<&BookingPage> for BookingPageResponse {
    fn from(page: &BookingPage) -> Self {
        let rows = page.matrix().iter()
            .map(|row| MatrixRowResponse::from_row(row, page.resources(), Some(page.selection())))
            .collect();

        Self {
            resource: page.resource().cloned(),
            resources: page.resources().iter().map(ResourceSummary::from).collect(),
            date: page.date().to_string(),
            disabled_days: page.disabled_days().iter().copied().collect(),
            rows,
            no_slots: page.has_no_slots(),
            selected: page.selection().ids().map(str::to_string).collect(),
            total: page.total(),
            error: page.error().cloned(),
        }
    }
}
