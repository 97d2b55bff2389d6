//! Data-fetch adapters between the lookup service and the render loop.
//!
//! Each feed is a snapshot keyed on its inputs and rebuilt whenever a key
//! changes; there is no caching across key changes. Lookups resolve
//! synchronously today, so `loading` is always false by the time a feed is
//! returned. The flag stays in the shape so a deferred backend can publish
//! an in-flight state without changing any consumer.

use crate::models::{Appointment, Doctor, TimeSlot};
use crate::service::{self, ScheduleService};
use chrono::NaiveDate;
use tracing::warn;

/// The only user-visible lookup failure text. Cause detail goes to the log.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load appointments";

/// Doctor list for the picker.
pub struct DoctorsFeed {
    pub doctors: Vec<Doctor>,
    pub loading: bool,
}

impl DoctorsFeed {
    pub fn load(service: &ScheduleService) -> Self {
        let doctors = match service.doctors_all() {
            Ok(doctors) => doctors,
            Err(err) => {
                warn!(error = %err, "failed to load doctors");
                Vec::new()
            }
        };
        DoctorsFeed {
            doctors,
            loading: false,
        }
    }
}

/// One day of appointments plus the slot grid for that day.
pub struct DayFeed {
    pub appointments: Vec<Appointment>,
    pub time_slots: Vec<TimeSlot>,
    pub loading: bool,
    pub error: Option<&'static str>,
}

impl DayFeed {
    /// Rebuild for the (doctor, date) key. An unset doctor is the idle
    /// state: empty results, no error, nothing in flight.
    pub fn refresh(service: &ScheduleService, doctor_id: Option<&str>, date: NaiveDate) -> Self {
        let time_slots = service::generate_day_slots(date);

        let doctor_id = match doctor_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                return DayFeed {
                    appointments: Vec::new(),
                    time_slots,
                    loading: false,
                    error: None,
                }
            }
        };

        match service.appointments_for_doctor_on_date(doctor_id, date) {
            Ok(appointments) => DayFeed {
                appointments,
                time_slots,
                loading: false,
                error: None,
            },
            Err(err) => {
                warn!(error = %err, doctor_id, %date, "day lookup failed");
                DayFeed {
                    appointments: Vec::new(),
                    time_slots,
                    loading: false,
                    error: Some(LOAD_ERROR_MESSAGE),
                }
            }
        }
    }
}

/// Seven days of appointments plus the day sequence for the columns.
pub struct WeekFeed {
    pub appointments: Vec<Appointment>,
    pub week_days: Vec<NaiveDate>,
    pub loading: bool,
    pub error: Option<&'static str>,
}

impl WeekFeed {
    /// Rebuild for the (doctor, week start) key. Same idle contract as
    /// `DayFeed::refresh`.
    pub fn refresh(
        service: &ScheduleService,
        doctor_id: Option<&str>,
        week_start: NaiveDate,
    ) -> Self {
        let week_days = service::generate_week_days(week_start);

        let doctor_id = match doctor_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                return WeekFeed {
                    appointments: Vec::new(),
                    week_days,
                    loading: false,
                    error: None,
                }
            }
        };

        match service.appointments_for_doctor_in_week(doctor_id, week_start) {
            Ok(appointments) => WeekFeed {
                appointments,
                week_days,
                loading: false,
                error: None,
            },
            Err(err) => {
                warn!(error = %err, doctor_id, %week_start, "week lookup failed");
                WeekFeed {
                    appointments: Vec::new(),
                    week_days,
                    loading: false,
                    error: Some(LOAD_ERROR_MESSAGE),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ScheduleStore, StaticStore, StoreError};
    use crate::models::Patient;

    /// Store whose every query fails, for the error-collapse path.
    struct FailingStore;

    impl ScheduleStore for FailingStore {
        fn doctors(&self) -> Result<Vec<Doctor>, StoreError> {
            Err(StoreError::Unavailable("backend offline".to_string()))
        }

        fn doctor_by_id(&self, _doctor_id: &str) -> Result<Option<Doctor>, StoreError> {
            Err(StoreError::Unavailable("backend offline".to_string()))
        }

        fn patient_by_id(&self, _patient_id: &str) -> Result<Option<Patient>, StoreError> {
            Err(StoreError::Unavailable("backend offline".to_string()))
        }

        fn appointments_for_doctor_on_date(
            &self,
            _doctor_id: &str,
            _date: NaiveDate,
        ) -> Result<Vec<Appointment>, StoreError> {
            Err(StoreError::Unavailable("backend offline".to_string()))
        }

        fn appointments_for_doctor_in_range(
            &self,
            _doctor_id: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Appointment>, StoreError> {
            Err(StoreError::Unavailable("backend offline".to_string()))
        }
    }

    fn empty_service() -> ScheduleService {
        ScheduleService::new(Box::new(StaticStore::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )))
    }

    fn failing_service() -> ScheduleService {
        ScheduleService::new(Box::new(FailingStore))
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn unset_doctor_is_idle_not_loading() {
        let feed = DayFeed::refresh(&empty_service(), None, monday());
        assert!(feed.appointments.is_empty());
        assert!(!feed.loading);
        assert!(feed.error.is_none());
        assert_eq!(feed.time_slots.len(), 20);
    }

    #[test]
    fn empty_doctor_id_counts_as_unset() {
        let feed = DayFeed::refresh(&failing_service(), Some(""), monday());
        assert!(feed.error.is_none(), "idle state must suppress the fetch");
    }

    #[test]
    fn unknown_doctor_is_success_with_no_results() {
        let feed = DayFeed::refresh(&empty_service(), Some("unknown-id"), monday());
        assert!(feed.appointments.is_empty());
        assert!(feed.error.is_none());
    }

    #[test]
    fn store_failure_collapses_to_the_fixed_message() {
        let feed = DayFeed::refresh(&failing_service(), Some("doc-1"), monday());
        assert!(feed.appointments.is_empty());
        assert_eq!(feed.error, Some(LOAD_ERROR_MESSAGE));
        assert!(!feed.loading);
    }

    #[test]
    fn week_feed_carries_the_seven_columns() {
        let feed = WeekFeed::refresh(&empty_service(), Some("doc-1"), monday());
        assert_eq!(feed.week_days.len(), 7);
        assert_eq!(feed.week_days[0], monday());
        assert!(feed.error.is_none());
    }

    #[test]
    fn week_feed_failure_matches_day_feed_failure() {
        let feed = WeekFeed::refresh(&failing_service(), Some("doc-1"), monday());
        assert_eq!(feed.error, Some(LOAD_ERROR_MESSAGE));
        assert!(feed.appointments.is_empty());
    }

    #[test]
    fn doctors_feed_swallows_store_failure() {
        let feed = DoctorsFeed::load(&failing_service());
        assert!(feed.doctors.is_empty());
        assert!(!feed.loading);
    }
}
