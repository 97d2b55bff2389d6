//! Data models for the schedule viewer.
//!
//! This module defines the record types used throughout the system:
//! - Doctor: doctor identity plus weekly working hours
//! - Patient: patient identity
//! - Appointment: a booked visit referencing a doctor and a patient
//! - Category: appointment classification driving display color
//! - TimeSlot: a derived 30-minute grid window

use chrono::{DateTime, Duration, Local, NaiveTime, Weekday};
use std::collections::HashMap;

/// Neutral color used for any category outside the fixed palette.
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Fixed appointment classifications.
///
/// Appointments carry their category as a free-form label so that data from
/// a future backend with unrecognized labels still renders; this enum is the
/// fixed palette the legend and color lookup are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Checkup,
    Consultation,
    FollowUp,
    Procedure,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Checkup,
        Category::Consultation,
        Category::FollowUp,
        Category::Procedure,
    ];

    /// Parse a category label, case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "checkup" => Some(Category::Checkup),
            "consultation" => Some(Category::Consultation),
            "follow-up" => Some(Category::FollowUp),
            "procedure" => Some(Category::Procedure),
            _ => None,
        }
    }

    /// Human-readable name for the legend.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Checkup => "Checkup",
            Category::Consultation => "Consultation",
            Category::FollowUp => "Follow-up",
            Category::Procedure => "Procedure",
        }
    }

    /// Display color for the category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Checkup => "#3b82f6",
            Category::Consultation => "#10b981",
            Category::FollowUp => "#f59e0b",
            Category::Procedure => "#8b5cf6",
        }
    }
}

/// A start/end pair of times-of-day a doctor works on a given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Represents a doctor in the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub working_hours: HashMap<Weekday, WorkingHours>,
}

/// Represents a patient referenced by appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: String,
    pub name: String,
}

/// Represents a booked appointment.
///
/// `doctor_id` and `patient_id` reference records that are expected to
/// exist; a dangling reference degrades to a display fallback, never a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_id: String,
    pub category: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
}

impl Appointment {
    /// Appointment length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Represents one 30-minute window of the display grid.
///
/// Slots are derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
}

impl TimeSlot {
    /// Calculate the duration of the time slot.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Get the duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}
