#![allow(dead_code)]
//! Interactive terminal front end for the schedule viewer.
//!
//! Provides a menu loop for picking a doctor, a date, and a day or week
//! view, and renders the selected doctor's appointments as a text grid
//! against the fixed half-hour slots.

mod dataset;
mod fetch;
mod models;
mod service;
mod view;

use chrono::{Local, NaiveDate};
use dataset::StaticStore;
use fetch::{DayFeed, DoctorsFeed, WeekFeed};
use service::ScheduleService;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewKind {
    Day,
    Week,
}

struct ScheduleCli {
    service: ScheduleService,
    doctors: DoctorsFeed,
    doctor_id: Option<String>,
    date: NaiveDate,
    view_kind: ViewKind,
    running: bool,
}

impl ScheduleCli {
    fn new(service: ScheduleService) -> Self {
        let doctors = DoctorsFeed::load(&service);
        ScheduleCli {
            service,
            doctors,
            doctor_id: None,
            date: Local::now().date_naive(),
            view_kind: ViewKind::Day,
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       HOSPITAL SCHEDULE VIEWER");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self) {
        let doctor = match &self.doctor_id {
            Some(id) => self
                .doctors
                .doctors
                .iter()
                .find(|d| &d.id == id)
                .map(|d| format!("Dr. {}", d.name))
                .unwrap_or_else(|| id.clone()),
            None => "none".to_string(),
        };
        let view = match self.view_kind {
            ViewKind::Day => "day",
            ViewKind::Week => "week",
        };

        println!("\n--- Main Menu ---");
        println!("Doctor: {} | Date: {} | View: {}", doctor, self.date, view);
        println!("1. Select doctor");
        println!("2. Select date");
        println!("3. Toggle day/week view");
        println!("4. Show schedule");
        println!("5. Show legend");
        println!("6. Exit");
        println!("{}", "-".repeat(20));
    }

    fn get_input(&self, prompt: &str, default: Option<&str>) -> String {
        if let Some(def) = default {
            print!("{} [{}]: ", prompt, def);
        } else {
            print!("{}: ", prompt);
        }
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        let input = input.trim();

        if input.is_empty() {
            default.unwrap_or("").to_string()
        } else {
            input.to_string()
        }
    }

    fn get_int_input(&self, prompt: &str, default: Option<i32>) -> i32 {
        loop {
            let default_str = default.map(|d| d.to_string());
            let input = self.get_input(prompt, default_str.as_deref());

            if let Ok(value) = input.parse::<i32>() {
                return value;
            }
            println!("Please enter a valid number");
        }
    }

    fn select_doctor(&mut self) {
        println!("\n--- Select Doctor ---");

        if self.doctors.doctors.is_empty() {
            println!("No doctors available");
            return;
        }

        println!("0. (clear selection)");
        for (i, doctor) in self.doctors.doctors.iter().enumerate() {
            println!("{}. Dr. {} - {}", i + 1, doctor.name, doctor.specialty);
        }

        let choice = self.get_int_input("Select doctor", Some(0));
        if choice == 0 {
            self.doctor_id = None;
            println!("Selection cleared");
        } else if choice > 0 && (choice as usize) <= self.doctors.doctors.len() {
            let doctor = &self.doctors.doctors[choice as usize - 1];
            self.doctor_id = Some(doctor.id.clone());
            print!("{}", view::render_doctor_panel(doctor));
        } else {
            println!("Invalid choice");
        }
    }

    fn select_date(&mut self) {
        println!("\n--- Select Date ---");

        loop {
            let today = Local::now().date_naive().to_string();
            let input = self.get_input("Date (YYYY-MM-DD)", Some(&today));

            match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
                Ok(date) => {
                    self.date = date;
                    println!("Date set to {}", date.format("%A, %Y-%m-%d"));
                    return;
                }
                Err(_) => println!("Please enter a valid date, e.g. 2025-03-10"),
            }
        }
    }

    fn toggle_view(&mut self) {
        self.view_kind = match self.view_kind {
            ViewKind::Day => ViewKind::Week,
            ViewKind::Week => ViewKind::Day,
        };
        let view = match self.view_kind {
            ViewKind::Day => "day",
            ViewKind::Week => "week",
        };
        println!("\nSwitched to {} view", view);
    }

    fn show_schedule(&self) {
        let doctor_id = self.doctor_id.as_deref();

        if let Some(id) = doctor_id {
            if let Some(doctor) = self.service.doctor_by_id(id).ok().flatten() {
                println!();
                print!("{}", view::render_doctor_panel(&doctor));
            }
        }

        match self.view_kind {
            ViewKind::Day => {
                let feed = DayFeed::refresh(&self.service, doctor_id, self.date);
                println!("\n--- {} ---", self.date.format("%A, %Y-%m-%d"));
                print!("{}", view::render_day_view(&self.service, &feed, doctor_id.is_some()));
            }
            ViewKind::Week => {
                let week_start = service::start_of_week(self.date);
                let feed = WeekFeed::refresh(&self.service, doctor_id, week_start);
                println!("\n--- Week of {} ---", week_start.format("%Y-%m-%d"));
                print!("{}", view::render_week_view(&self.service, &feed, doctor_id.is_some()));
            }
        }
        println!();
    }

    fn show_legend(&self) {
        println!();
        print!("{}", view::render_legend());
    }

    fn run(&mut self) {
        self.print_header();

        while self.running {
            self.print_menu();

            let choice = self.get_int_input("Enter choice", Some(4));

            match choice {
                1 => self.select_doctor(),
                2 => self.select_date(),
                3 => self.toggle_view(),
                4 => self.show_schedule(),
                5 => self.show_legend(),
                6 => {
                    self.running = false;
                    println!("\nGoodbye!");
                }
                _ => println!("Invalid choice"),
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let service = ScheduleService::new(Box::new(StaticStore::sample()));
    let mut cli = ScheduleCli::new(service);
    cli.run();
}
