use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::models::{resource::Resource, slot::Slot, schedule::WeeklyScheduleRule};
use crate::domain::ports::{ResourceRepository, ScheduleRepository, SlotRepository};
use crate::domain::services::availability::{self, CalendarDay};
use crate::domain::services::calendar::{day_window, parse_date, today};
use crate::domain::services::selection::Selection;
use crate::domain::services::slot_matrix::{build_slot_matrix, SlotMatrixRow};
use crate::error::AppError;
use crate::state::AppState;

/// Everything the page reads from.
#[derive(Clone)]
pub struct BookingSources {
    pub resources: Arc<dyn ResourceRepository>,
    pub slots: Arc<dyn SlotRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub timezone: Tz,
}

impl BookingSources {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            resources: state.resource_repo.clone(),
            slots: state.slot_repo.clone(),
            schedules: state.schedule_repo.clone(),
            timezone: state.config.timezone,
        }
    }
}

/// Page seed taken from the `resourceId` and `date` query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialConfig {
    pub initial_resource_id: Option<String>,
    pub initial_date: Option<NaiveDate>,
}

impl InitialConfig {
    /// An unparsable date is dropped rather than rejected.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let initial_date = params.get("date").and_then(|raw| match parse_date(raw) {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("Ignoring invalid date query parameter: {}", raw);
                None
            }
        });

        Self {
            initial_resource_id: params.get("resourceId")
                .filter(|id| !id.trim().is_empty())
                .cloned(),
            initial_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageErrorKind {
    NotFound,
    DataAccess,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageError {
    pub kind: PageErrorKind,
    pub message: String,
}

impl From<&AppError> for PageError {
    fn from(err: &AppError) -> Self {
        let kind = match err {
            AppError::NotFound(_) => PageErrorKind::NotFound,
            _ => PageErrorKind::DataAccess,
        };
        Self { kind, message: err.user_message() }
    }
}

/// Ticket for one slot fetch. Only the most recently issued ticket is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLoad {
    generation: u64,
    pub business_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleLoad {
    generation: u64,
    pub resource_id: String,
}

/// Controller state behind the booking screen.
///
/// Selection is emptied on every resource or date change, and the loaded
/// slots are dropped at the same moment so a stale slot can never be toggled.
pub struct BookingPage {
    sources: BookingSources,
    resource_id: Option<String>,
    resource: Option<Resource>,
    resources: Vec<Resource>,
    date: NaiveDate,
    slots: Vec<Slot>,
    disabled_days: BTreeSet<CalendarDay>,
    selection: Selection,
    error: Option<PageError>,
    slot_generation: u64,
    schedule_generation: u64,
}

impl BookingPage {
    pub fn new(sources: BookingSources, initial_date: Option<NaiveDate>) -> Self {
        let date = initial_date.unwrap_or_else(|| today(sources.timezone));
        Self {
            sources,
            resource_id: None,
            resource: None,
            resources: Vec::new(),
            date,
            slots: Vec::new(),
            disabled_days: BTreeSet::new(),
            selection: Selection::new(),
            error: None,
            slot_generation: 0,
            schedule_generation: 0,
        }
    }

    /// Builds the page and runs the first load cycle.
    pub async fn open(sources: BookingSources, initial: InitialConfig) -> Self {
        let mut page = Self::new(sources, initial.initial_date);
        match initial.initial_resource_id {
            Some(resource_id) => page.select_resource(&resource_id).await,
            None => debug!("Booking page opened without a resource"),
        }
        page
    }

    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn disabled_days(&self) -> &BTreeSet<CalendarDay> {
        &self.disabled_days
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    pub fn matrix(&self) -> Vec<SlotMatrixRow> {
        build_slot_matrix(&self.slots)
    }

    pub fn total(&self) -> f64 {
        self.selection.total(&self.slots)
    }

    pub fn selected_slots(&self) -> Vec<&Slot> {
        self.slots.iter().filter(|s| self.selection.contains(&s.id)).collect()
    }

    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        availability::is_date_disabled(date, &self.disabled_days)
    }

    /// True once a business is known, nothing failed and the day has no slots.
    pub fn has_no_slots(&self) -> bool {
        self.resource.is_some() && self.error.is_none() && self.slots.is_empty()
    }

    /// Toggles a loaded slot. Unknown ids and booked slots are ignored.
    pub fn toggle_slot(&mut self, slot_id: &str) -> bool {
        match self.slots.iter().find(|s| s.id == slot_id) {
            Some(slot) => self.selection.toggle(slot),
            None => {
                debug!("Toggle ignored, slot {} is not on the page", slot_id);
                false
            }
        }
    }

    /// Picks a resource. The resource, its business siblings and the weekly
    /// schedule are fetched again even when the id was already on the page.
    pub async fn select_resource(&mut self, resource_id: &str) {
        info!("Booking page switched to resource {}", resource_id);
        self.resource_id = Some(resource_id.to_string());
        self.reload(true).await;
    }

    pub async fn select_date(&mut self, date: NaiveDate) {
        info!("Booking page switched to date {}", date);
        self.date = date;
        self.reload(false).await;
    }

    /// Starts a slot fetch for the current business and date, invalidating
    /// any fetch still in flight. Clears the selection.
    pub fn begin_slot_load(&mut self) -> Option<SlotLoad> {
        self.invalidate_slots();
        let business_id = self.resource.as_ref()?.business_id.clone();
        Some(SlotLoad {
            generation: self.slot_generation,
            business_id,
            date: self.date,
        })
    }

    fn invalidate_slots(&mut self) {
        self.selection.clear();
        self.slots.clear();
        self.slot_generation += 1;
    }

    /// Returns whether the result was taken; superseded loads are dropped.
    pub fn apply_slot_load(&mut self, load: SlotLoad, result: Result<Vec<Slot>, AppError>) -> bool {
        if load.generation != self.slot_generation {
            debug!("Discarding stale slot load for {} (generation {})", load.date, load.generation);
            return false;
        }
        match result {
            Ok(slots) => {
                debug!("Loaded {} slots for {}", slots.len(), load.date);
                self.slots = slots;
            }
            Err(e) => {
                error!("Failed to load slots for {}: {}", load.date, e);
                self.error = Some(PageError::from(&e));
            }
        }
        true
    }

    pub fn begin_schedule_load(&mut self) -> Option<ScheduleLoad> {
        let resource_id = self.resource.as_ref()?.id.clone();
        self.schedule_generation += 1;
        Some(ScheduleLoad {
            generation: self.schedule_generation,
            resource_id,
        })
    }

    pub fn apply_schedule_load(&mut self, load: ScheduleLoad, result: Result<Vec<WeeklyScheduleRule>, AppError>) -> bool {
        if load.generation != self.schedule_generation {
            debug!("Discarding stale schedule load for {}", load.resource_id);
            return false;
        }
        self.disabled_days = availability::disabled_days_or_open(result);
        true
    }

    /// Resolves the resource and its business list, then fetches slots and,
    /// when asked, the schedule. Each cycle starts from a clean error state.
    async fn reload(&mut self, reload_schedule: bool) {
        self.error = None;
        self.invalidate_slots();
        let Some(resource_id) = self.resource_id.clone() else {
            debug!("No resource picked, nothing to load");
            return;
        };

        let listed = match self.load_resources(&resource_id).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to load resources for {}: {}", resource_id, e);
                self.error = Some(PageError::from(&e));
                false
            }
        };

        if self.resource.is_none() {
            self.schedule_generation += 1;
            self.disabled_days.clear();
            return;
        }

        // Without the business columns the matrix cannot tell offered from not offered.
        let slot_load = if listed { self.begin_slot_load() } else { None };
        let schedule_load = if reload_schedule { self.begin_schedule_load() } else { None };

        let sources = &self.sources;
        let (slots, rules) = tokio::join!(
            async {
                match &slot_load {
                    Some(load) => Some(fetch_slots(sources, load).await),
                    None => None,
                }
            },
            async {
                match &schedule_load {
                    Some(load) => Some(sources.schedules.list_by_resource(&load.resource_id).await),
                    None => None,
                }
            },
        );

        if let (Some(load), Some(result)) = (slot_load, slots) {
            self.apply_slot_load(load, result);
        }
        if let (Some(load), Some(result)) = (schedule_load, rules) {
            self.apply_schedule_load(load, result);
        }
    }

    async fn load_resources(&mut self, resource_id: &str) -> Result<(), AppError> {
        self.resource = None;
        self.resources.clear();

        let resource = self.sources.resources.find_by_id(resource_id).await?
            .ok_or_else(|| {
                warn!("Resource {} not found", resource_id);
                AppError::NotFound("Resource not found".into())
            })?;
        let business_id = resource.business_id.clone();
        debug!("Resolved resource {} ({}) in business {}", resource.id, resource.name, business_id);
        self.resource = Some(resource);

        self.resources = self.sources.resources.list_by_business(&business_id).await?;
        Ok(())
    }
}

pub async fn fetch_slots(sources: &BookingSources, load: &SlotLoad) -> Result<Vec<Slot>, AppError> {
    let (from, to) = day_window(sources.timezone, load.date)?;
    sources.slots.list_for_business(&load.business_id, from, to).await
}
