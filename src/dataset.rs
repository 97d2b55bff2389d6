//! Static dataset and the read-only store boundary.
//!
//! The viewer never writes: doctors, patients, and appointments are loaded
//! once and queried for the lifetime of the process. `ScheduleStore` is the
//! seam a real backend would implement; `StaticStore` is the in-memory
//! implementation backing the demo dataset.

use crate::models::{Appointment, Doctor, Patient, WorkingHours};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use std::collections::HashMap;
use thiserror::Error;

/// Failure of the backing store itself.
///
/// Record misses are not errors; they come back as `None` or an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("schedule store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only query primitives over the schedule records.
pub trait ScheduleStore {
    /// All doctors, insertion order preserved.
    fn doctors(&self) -> Result<Vec<Doctor>, StoreError>;

    /// Exact-match doctor lookup.
    fn doctor_by_id(&self, doctor_id: &str) -> Result<Option<Doctor>, StoreError>;

    /// Exact-match patient lookup.
    fn patient_by_id(&self, patient_id: &str) -> Result<Option<Patient>, StoreError>;

    /// Appointments for a doctor whose start falls on the given calendar
    /// day, in insertion order.
    fn appointments_for_doctor_on_date(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError>;

    /// Appointments for a doctor whose start falls on a calendar day within
    /// `[start, end]` inclusive, in insertion order.
    fn appointments_for_doctor_in_range(
        &self,
        doctor_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError>;
}

/// In-memory store over fixed record vectors.
pub struct StaticStore {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
}

impl StaticStore {
    pub fn new(
        doctors: Vec<Doctor>,
        patients: Vec<Patient>,
        appointments: Vec<Appointment>,
    ) -> Self {
        StaticStore {
            doctors,
            patients,
            appointments,
        }
    }

    /// Demo dataset: three doctors, a handful of patients, and a week of
    /// appointments anchored to the Sunday of the current week so the grids
    /// have something to show.
    pub fn sample() -> Self {
        let today = Local::now().date_naive();
        let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);

        let doctors = vec![
            doctor(
                "doc-1",
                "Sarah Mitchell",
                "Cardiology",
                &[
                    (Weekday::Mon, 9, 17),
                    (Weekday::Tue, 9, 17),
                    (Weekday::Wed, 9, 17),
                    (Weekday::Thu, 9, 17),
                    (Weekday::Fri, 9, 15),
                ],
            ),
            doctor(
                "doc-2",
                "James Okafor",
                "Pediatrics",
                &[
                    (Weekday::Mon, 8, 16),
                    (Weekday::Tue, 8, 16),
                    (Weekday::Wed, 8, 16),
                    (Weekday::Thu, 8, 16),
                    (Weekday::Fri, 8, 16),
                ],
            ),
            doctor(
                "doc-3",
                "Elena Petrov",
                "Dermatology",
                &[
                    (Weekday::Mon, 10, 18),
                    (Weekday::Wed, 10, 18),
                    (Weekday::Fri, 10, 18),
                ],
            ),
        ];

        let patients = vec![
            patient("pat-1", "Alice Brown"),
            patient("pat-2", "John Smith"),
            patient("pat-3", "Maria Garcia"),
            patient("pat-4", "Wei Zhang"),
            patient("pat-5", "Tom Becker"),
            patient("pat-6", "Nadia Hussain"),
        ];

        // Start offsets are days past the week's Sunday; times sit on the
        // half-hour grid. pat-9 is intentionally dangling to exercise the
        // unknown-patient fallback.
        let appointments = vec![
            appointment("apt-1", "doc-1", "pat-1", "checkup", week_start, 1, 9, 0, 30),
            appointment("apt-2", "doc-1", "pat-2", "consultation", week_start, 1, 10, 30, 30),
            appointment("apt-3", "doc-1", "pat-3", "follow-up", week_start, 2, 9, 0, 30),
            appointment("apt-4", "doc-1", "pat-4", "procedure", week_start, 2, 14, 0, 60),
            appointment("apt-5", "doc-1", "pat-5", "checkup", week_start, 3, 11, 0, 30),
            appointment("apt-6", "doc-1", "pat-9", "consultation", week_start, 4, 13, 30, 30),
            appointment("apt-7", "doc-1", "pat-6", "Checkup", week_start, 5, 9, 30, 30),
            appointment("apt-8", "doc-2", "pat-2", "checkup", week_start, 1, 8, 0, 30),
            appointment("apt-9", "doc-2", "pat-3", "follow-up", week_start, 1, 8, 30, 30),
            appointment("apt-10", "doc-2", "pat-1", "consultation", week_start, 3, 10, 0, 30),
            appointment("apt-11", "doc-2", "pat-5", "procedure", week_start, 4, 15, 0, 60),
            appointment("apt-12", "doc-2", "pat-6", "checkup", week_start, 5, 8, 0, 30),
            appointment("apt-13", "doc-3", "pat-4", "consultation", week_start, 1, 10, 0, 30),
            appointment("apt-14", "doc-3", "pat-1", "procedure", week_start, 3, 16, 0, 60),
            appointment("apt-15", "doc-3", "pat-3", "follow-up", week_start, 5, 11, 30, 30),
        ];

        StaticStore::new(doctors, patients, appointments)
    }
}

impl ScheduleStore for StaticStore {
    fn doctors(&self) -> Result<Vec<Doctor>, StoreError> {
        Ok(self.doctors.clone())
    }

    fn doctor_by_id(&self, doctor_id: &str) -> Result<Option<Doctor>, StoreError> {
        Ok(self.doctors.iter().find(|d| d.id == doctor_id).cloned())
    }

    fn patient_by_id(&self, patient_id: &str) -> Result<Option<Patient>, StoreError> {
        Ok(self.patients.iter().find(|p| p.id == patient_id).cloned())
    }

    fn appointments_for_doctor_on_date(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id && a.start_time.date_naive() == date)
            .cloned()
            .collect())
    }

    fn appointments_for_doctor_in_range(
        &self,
        doctor_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| {
                let day = a.start_time.date_naive();
                a.doctor_id == doctor_id && day >= start && day <= end
            })
            .cloned()
            .collect())
    }
}

fn doctor(id: &str, name: &str, specialty: &str, hours: &[(Weekday, u32, u32)]) -> Doctor {
    let working_hours: HashMap<Weekday, WorkingHours> = hours
        .iter()
        .map(|&(day, start, end)| {
            (
                day,
                WorkingHours {
                    start: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
                    end: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
                },
            )
        })
        .collect();

    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        working_hours,
    }
}

fn patient(id: &str, name: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    doctor_id: &str,
    patient_id: &str,
    category: &str,
    week_start: NaiveDate,
    day_offset: i64,
    hour: u32,
    minute: u32,
    duration_minutes: i64,
) -> Appointment {
    let start_time = at(week_start + Duration::days(day_offset), hour, minute);
    Appointment {
        id: id.to_string(),
        doctor_id: doctor_id.to_string(),
        patient_id: patient_id.to_string(),
        category: category.to_string(),
        start_time,
        end_time: start_time + Duration::minutes(duration_minutes),
    }
}

/// Anchor a wall-clock time to a calendar day in the local zone.
pub fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
    date.and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}
