//! Lookup and generation service over the schedule dataset.
//!
//! Lookups delegate to the injected read-only store; slot, week, and color
//! generation are pure and cannot fail. "Not found" is an ordinary result
//! here, never an error.

use crate::dataset::{at, ScheduleStore, StoreError};
use crate::models::{Appointment, Category, Doctor, Patient, TimeSlot, FALLBACK_COLOR};
use chrono::{Datelike, Duration, NaiveDate};

/// First slot of the display grid starts at this hour.
pub const DAY_START_HOUR: u32 = 8;
/// The grid ends at this hour; the last slot finishes exactly here.
pub const DAY_END_HOUR: u32 = 18;
/// Grid resolution in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Query front end for the viewer.
///
/// Holds the store behind a trait object so a real backend can replace the
/// static dataset without touching any query logic.
pub struct ScheduleService {
    store: Box<dyn ScheduleStore>,
}

impl ScheduleService {
    pub fn new(store: Box<dyn ScheduleStore>) -> Self {
        ScheduleService { store }
    }

    /// All doctors, insertion order preserved.
    pub fn doctors_all(&self) -> Result<Vec<Doctor>, StoreError> {
        self.store.doctors()
    }

    pub fn doctor_by_id(&self, doctor_id: &str) -> Result<Option<Doctor>, StoreError> {
        self.store.doctor_by_id(doctor_id)
    }

    pub fn patient_by_id(&self, patient_id: &str) -> Result<Option<Patient>, StoreError> {
        self.store.patient_by_id(patient_id)
    }

    /// Appointments for a doctor on one calendar day, insertion order.
    pub fn appointments_for_doctor_on_date(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        self.store.appointments_for_doctor_on_date(doctor_id, date)
    }

    /// Appointments for a doctor with a start day inside `[start, end]`.
    pub fn appointments_for_doctor_in_range(
        &self,
        doctor_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        self.store
            .appointments_for_doctor_in_range(doctor_id, start, end)
    }

    /// Appointments for the 7-day window beginning at `week_start`.
    pub fn appointments_for_doctor_in_week(
        &self,
        doctor_id: &str,
        week_start: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        let week_end = week_start + Duration::days(6);
        self.appointments_for_doctor_in_range(doctor_id, week_start, week_end)
    }
}

/// Generate the fixed half-hour grid for one day: 20 slots from 08:00 to
/// 18:00 local, ascending and contiguous. Consumers rely on this order for
/// slot-to-row mapping.
pub fn generate_day_slots(date: NaiveDate) -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(20);
    for hour in DAY_START_HOUR..DAY_END_HOUR {
        for minute in [0, 30] {
            let start_time = at(date, hour, minute);
            slots.push(TimeSlot {
                start_time,
                end_time: start_time + Duration::minutes(SLOT_MINUTES),
            });
        }
    }
    slots
}

/// The 7 consecutive calendar days beginning at `start`, ascending.
pub fn generate_week_days(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// The Sunday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Display color for a category label.
///
/// Case-insensitive and total: unrecognized labels (including empty input)
/// map to the neutral fallback color.
pub fn color_for_category(category: &str) -> &'static str {
    Category::from_label(category)
        .map(|c| c.color())
        .unwrap_or(FALLBACK_COLOR)
}
