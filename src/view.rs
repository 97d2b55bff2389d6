//! Rendering of the schedule grids, doctor panel, and legend.
//!
//! Everything here is a deterministic mapping from feed snapshots to text.
//! The only composition rules are per-slot bucketing (exact hour-and-minute
//! match against the slot start) and per-column day filtering (calendar-day
//! match). Rendering never fails: missing records fall back to display text.

use crate::fetch::{DayFeed, WeekFeed};
use crate::models::{Appointment, Category, Doctor, TimeSlot};
use crate::service::{self, ScheduleService};
use chrono::{NaiveDate, Timelike, Weekday};

pub const SELECT_DOCTOR_PROMPT: &str = "Please select a doctor to view appointments";
pub const EMPTY_SLOT_PLACEHOLDER: &str = "No appointments";
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

const WEEK_COLUMN_WIDTH: usize = 14;

/// Appointments whose start matches the slot start exactly on hour and
/// minute. An appointment off the half-hour grid lands in no bucket.
pub fn appointments_in_slot<'a>(
    appointments: &'a [Appointment],
    slot: &TimeSlot,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|a| {
            a.start_time.hour() == slot.start_time.hour()
                && a.start_time.minute() == slot.start_time.minute()
        })
        .collect()
}

/// Appointments whose start falls on the given calendar day.
pub fn appointments_on_day<'a>(
    appointments: &'a [Appointment],
    date: NaiveDate,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|a| a.start_time.date_naive() == date)
        .collect()
}

fn slot_label(slot: &TimeSlot) -> String {
    slot.start_time.format("%l:%M %p").to_string().trim().to_string()
}

fn patient_display_name(service: &ScheduleService, patient_id: &str) -> String {
    service
        .patient_by_id(patient_id)
        .ok()
        .flatten()
        .map(|p| p.name)
        .unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
}

fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

/// One appointment card: patient, category, length, color token.
fn render_card(service: &ScheduleService, appointment: &Appointment) -> String {
    format!(
        "{} ({}, {} min) [{}]",
        patient_display_name(service, &appointment.patient_id),
        appointment.category,
        appointment.duration_minutes(),
        service::color_for_category(&appointment.category)
    )
}

/// Render the single-day grid: one row per slot, a time label column, and
/// either the slot's cards or an explicit empty placeholder.
pub fn render_day_view(service: &ScheduleService, feed: &DayFeed, doctor_selected: bool) -> String {
    if feed.loading {
        return "Loading...".to_string();
    }
    if let Some(error) = feed.error {
        return error.to_string();
    }
    if !doctor_selected {
        return SELECT_DOCTOR_PROMPT.to_string();
    }

    let mut out = String::new();
    for slot in &feed.time_slots {
        let matched = appointments_in_slot(&feed.appointments, slot);
        let cell = if matched.is_empty() {
            EMPTY_SLOT_PLACEHOLDER.to_string()
        } else {
            matched
                .iter()
                .map(|a| render_card(service, a))
                .collect::<Vec<_>>()
                .join("; ")
        };
        out.push_str(&format!("{:>8}  {}\n", slot_label(slot), cell));
    }
    out
}

/// Render the week grid: a time column plus one column per day, headed by
/// weekday and date. Cells hold truncated patient names; empty cells render
/// a dash so they cannot be mistaken for a failed fetch.
pub fn render_week_view(
    service: &ScheduleService,
    feed: &WeekFeed,
    doctor_selected: bool,
) -> String {
    if feed.loading {
        return "Loading...".to_string();
    }
    if let Some(error) = feed.error {
        return error.to_string();
    }
    if !doctor_selected {
        return SELECT_DOCTOR_PROMPT.to_string();
    }

    let slots = match feed.week_days.first() {
        Some(&first_day) => service::generate_day_slots(first_day),
        None => return String::new(),
    };

    let mut out = String::new();
    out.push_str(&format!("{:>8}  ", "Time"));
    for day in &feed.week_days {
        out.push_str(&format!(
            "{:<width$}",
            day.format("%a %b %-d").to_string(),
            width = WEEK_COLUMN_WIDTH
        ));
    }
    out.push('\n');

    for slot in &slots {
        out.push_str(&format!("{:>8}  ", slot_label(slot)));
        for &day in &feed.week_days {
            let day_appointments = appointments_on_day(&feed.appointments, day);
            let names: Vec<String> = day_appointments
                .iter()
                .filter(|a| {
                    a.start_time.hour() == slot.start_time.hour()
                        && a.start_time.minute() == slot.start_time.minute()
                })
                .map(|a| patient_display_name(service, &a.patient_id))
                .collect();
            let cell = if names.is_empty() {
                "-".to_string()
            } else {
                truncate(&names.join("/"), WEEK_COLUMN_WIDTH - 2)
            };
            out.push_str(&format!("{:<width$}", cell, width = WEEK_COLUMN_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// Selected-doctor summary: name, specialty, working hours per weekday.
pub fn render_doctor_panel(doctor: &Doctor) -> String {
    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    let hours: Vec<String> = WEEK
        .iter()
        .filter_map(|day| {
            doctor.working_hours.get(day).map(|h| {
                format!(
                    "{} {}-{}",
                    day,
                    h.start.format("%H:%M"),
                    h.end.format("%H:%M")
                )
            })
        })
        .collect();

    format!(
        "Dr. {} - {}\nWorking hours: {}\n",
        doctor.name,
        doctor.specialty,
        if hours.is_empty() {
            "not on file".to_string()
        } else {
            hours.join(", ")
        }
    )
}

/// Static legend mapping each fixed category to its color and label.
pub fn render_legend() -> String {
    let mut out = String::from("Appointment Types\n");
    for category in Category::ALL {
        out.push_str(&format!(
            "  {}  {}\n",
            category.color(),
            category.display_name()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{at, StaticStore};
    use crate::models::{Patient, WorkingHours};
    use chrono::{Duration, NaiveTime};
    use std::collections::HashMap;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn appt(id: &str, patient_id: &str, category: &str, hour: u32, minute: u32) -> Appointment {
        let start_time = at(monday(), hour, minute);
        Appointment {
            id: id.to_string(),
            doctor_id: "doc-1".to_string(),
            patient_id: patient_id.to_string(),
            category: category.to_string(),
            start_time,
            end_time: start_time + Duration::minutes(30),
        }
    }

    fn fixture_service(appointments: Vec<Appointment>) -> ScheduleService {
        ScheduleService::new(Box::new(StaticStore::new(
            Vec::new(),
            vec![Patient {
                id: "pat-1".to_string(),
                name: "Alice Brown".to_string(),
            }],
            appointments,
        )))
    }

    #[test]
    fn slot_bucketing_requires_exact_start_match() {
        let appointments = vec![appt("apt-1", "pat-1", "checkup", 9, 0)];
        let slots = service::generate_day_slots(monday());

        let nine = &slots[2]; // 08:00, 08:30, 09:00
        let nine_thirty = &slots[3];
        assert_eq!(appointments_in_slot(&appointments, nine).len(), 1);
        assert!(appointments_in_slot(&appointments, nine_thirty).is_empty());
    }

    #[test]
    fn day_view_without_doctor_renders_the_prompt() {
        let service = fixture_service(Vec::new());
        let feed = DayFeed::refresh(&service, None, monday());
        let rendered = render_day_view(&service, &feed, false);
        assert_eq!(rendered, SELECT_DOCTOR_PROMPT);
    }

    #[test]
    fn day_view_renders_cards_and_placeholders() {
        let service = fixture_service(vec![appt("apt-1", "pat-1", "checkup", 9, 0)]);
        let feed = DayFeed::refresh(&service, Some("doc-1"), monday());
        let rendered = render_day_view(&service, &feed, true);

        assert!(rendered.contains("Alice Brown (checkup, 30 min) [#3b82f6]"));
        assert!(rendered.contains(EMPTY_SLOT_PLACEHOLDER));
        assert_eq!(rendered.lines().count(), 20);
    }

    #[test]
    fn dangling_patient_falls_back_to_unknown() {
        let service = fixture_service(vec![appt("apt-1", "pat-9", "checkup", 9, 0)]);
        let feed = DayFeed::refresh(&service, Some("doc-1"), monday());
        let rendered = render_day_view(&service, &feed, true);
        assert!(rendered.contains(UNKNOWN_PATIENT));
    }

    #[test]
    fn mixed_case_category_gets_the_palette_color() {
        let service = fixture_service(vec![appt("apt-1", "pat-1", "CheckUp", 9, 0)]);
        let feed = DayFeed::refresh(&service, Some("doc-1"), monday());
        let rendered = render_day_view(&service, &feed, true);
        assert!(rendered.contains("[#3b82f6]"));
    }

    #[test]
    fn week_view_places_names_in_the_right_column() {
        let service = fixture_service(vec![appt("apt-1", "pat-1", "checkup", 9, 0)]);
        let feed = WeekFeed::refresh(&service, Some("doc-1"), service::start_of_week(monday()));
        let rendered = render_week_view(&service, &feed, true);

        assert!(rendered.contains("Sun Mar 9"));
        assert!(rendered.contains("Mon Mar 10"));
        let nine_row = rendered
            .lines()
            .find(|l| l.trim_start().starts_with("9:00 AM"))
            .unwrap();
        assert!(nine_row.contains("Alice Brown"));
    }

    #[test]
    fn week_view_error_replaces_the_grid() {
        let service = fixture_service(Vec::new());
        let mut feed = WeekFeed::refresh(&service, Some("doc-1"), monday());
        feed.error = Some(crate::fetch::LOAD_ERROR_MESSAGE);
        let rendered = render_week_view(&service, &feed, true);
        assert_eq!(rendered, "Failed to load appointments");
    }

    #[test]
    fn doctor_panel_lists_working_hours_in_week_order() {
        let mut working_hours = HashMap::new();
        working_hours.insert(
            Weekday::Wed,
            WorkingHours {
                start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            },
        );
        working_hours.insert(
            Weekday::Mon,
            WorkingHours {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            },
        );
        let doctor = Doctor {
            id: "doc-1".to_string(),
            name: "Sarah Mitchell".to_string(),
            specialty: "Cardiology".to_string(),
            working_hours,
        };

        let rendered = render_doctor_panel(&doctor);
        assert!(rendered.contains("Dr. Sarah Mitchell - Cardiology"));
        let mon = rendered.find("Mon 09:00-17:00").unwrap();
        let wed = rendered.find("Wed 10:00-18:00").unwrap();
        assert!(mon < wed);
    }

    #[test]
    fn legend_lists_all_four_categories() {
        let rendered = render_legend();
        for category in Category::ALL {
            assert!(rendered.contains(category.display_name()));
            assert!(rendered.contains(category.color()));
        }
    }
}
