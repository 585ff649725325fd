// Seed behavior snapshot keyed by the same doctor ids as the doctor roster.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::{
    AppointmentHistory, AppointmentStatus, BehaviorStatus, BehaviorTrend, DoctorBehavior,
};

pub fn doctor_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn appointment_id(n: u128) -> Uuid {
    Uuid::from_u128(0xA000 + n)
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or(NaiveDate::MIN)
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[allow(clippy::too_many_arguments)]
fn behavior(
    n: u128,
    name: &str,
    specialty: &str,
    hospital: &str,
    counts: (u32, u32, u32, u32),
    average_rating: f64,
    minutes: (f64, f64, f64),
    total_appointments: u32,
    risk_score: f64,
    status: BehaviorStatus,
) -> DoctorBehavior {
    let (delayed_appointments, no_shows, complaints, warnings_issued) = counts;
    let (join_delay_minutes, consult_duration_minutes, response_time_minutes) = minutes;
    let email = format!(
        "{}@telehealth.example",
        name.trim_start_matches("Dr. ").to_lowercase().replace(' ', ".")
    );

    DoctorBehavior {
        id: doctor_id(n),
        name: name.to_string(),
        email,
        specialty: specialty.to_string(),
        hospital: hospital.to_string(),
        delayed_appointments,
        no_shows,
        complaints,
        average_rating,
        total_appointments,
        join_delay_minutes,
        consult_duration_minutes,
        response_time_minutes,
        warnings_issued,
        risk_score,
        status,
    }
}

/// Nine monitored doctors. Two carry a stored status that disagrees with their score band:
/// Priya Patel (active, 65.0) and Omar Hassan (warned, 70.0).
#[rustfmt::skip]
pub fn behaviors() -> Vec<DoctorBehavior> {
    use BehaviorStatus::*;

    vec![
        behavior(1, "Dr. Sarah Johnson", "Cardiology", "Mount Sinai Hospital",
                 (2, 0, 0, 0), 4.9, (1.5, 22.0, 4.0), 156, 12.0, Active),
        behavior(2, "Dr. Michael Chen", "Neurology", "Northwestern Memorial",
                 (5, 1, 1, 0), 4.7, (3.2, 19.5, 8.0), 132, 38.5, Active),
        behavior(3, "Dr. Emily Rodriguez", "Pediatrics", "Texas Children's Hospital",
                 (9, 2, 2, 1), 4.3, (6.8, 16.0, 14.0), 118, 45.0, Warned),
        behavior(4, "Dr. James Wilson", "Orthopedics", "Massachusetts General",
                 (18, 6, 5, 3), 3.6, (12.4, 11.5, 32.0), 97, 72.0, Flagged),
        behavior(5, "Dr. Priya Patel", "Dermatology", "UCSF Medical Center",
                 (11, 3, 2, 0), 4.1, (7.9, 15.0, 18.0), 141, 65.0, Active),
        behavior(7, "Dr. Aisha Mohammed", "Cardiology", "Rush University Medical Center",
                 (8, 2, 3, 1), 4.2, (5.5, 17.0, 12.0), 109, 40.0, Warned),
        behavior(8, "Dr. Robert Brown", "General Practice", "Houston Methodist",
                 (24, 9, 7, 4), 3.1, (15.2, 9.5, 45.0), 88, 88.0, Flagged),
        behavior(10, "Dr. Omar Hassan", "Gastroenterology", "Brigham and Women's Hospital",
                 (16, 5, 4, 2), 3.5, (10.8, 12.0, 28.0), 93, 70.0, Warned),
        behavior(12, "Dr. Thomas Anderson", "Oncology", "Stanford Health Care",
                 (27, 11, 9, 5), 2.8, (18.6, 8.0, 52.0), 76, 91.0, Flagged),
    ]
}

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn trend(points: [(u32, u32, f64, u32); 6]) -> Vec<BehaviorTrend> {
    MONTHS
        .iter()
        .zip(points)
        .map(|(month, (delays, no_shows, rating, complaints))| BehaviorTrend {
            month: month.to_string(),
            delays,
            no_shows,
            rating,
            complaints,
        })
        .collect()
}

/// January to June. Doctor 2 has no trend recorded yet.
#[rustfmt::skip]
pub fn trends() -> HashMap<Uuid, Vec<BehaviorTrend>> {
    HashMap::from([
        (doctor_id(1), trend([
            (0, 0, 4.9, 0), (1, 0, 4.9, 0), (0, 0, 5.0, 0),
            (1, 0, 4.8, 0), (0, 0, 4.9, 0), (0, 0, 4.9, 0),
        ])),
        (doctor_id(3), trend([
            (1, 0, 4.4, 0), (2, 1, 4.3, 1), (1, 0, 4.4, 0),
            (2, 0, 4.2, 1), (2, 1, 4.3, 0), (1, 0, 4.4, 0),
        ])),
        (doctor_id(4), trend([
            (2, 1, 3.9, 0), (3, 1, 3.8, 1), (3, 1, 3.6, 1),
            (4, 1, 3.5, 1), (3, 1, 3.5, 1), (3, 1, 3.4, 1),
        ])),
        (doctor_id(5), trend([
            (1, 0, 4.3, 0), (2, 1, 4.2, 0), (2, 0, 4.1, 1),
            (2, 1, 4.0, 0), (2, 0, 4.1, 1), (2, 1, 4.0, 0),
        ])),
        (doctor_id(7), trend([
            (1, 0, 4.3, 0), (1, 1, 4.2, 1), (2, 0, 4.2, 0),
            (1, 0, 4.1, 1), (2, 1, 4.2, 0), (1, 0, 4.2, 1),
        ])),
        (doctor_id(8), trend([
            (3, 1, 3.4, 1), (4, 1, 3.2, 1), (4, 2, 3.1, 1),
            (4, 2, 3.0, 1), (5, 1, 3.0, 2), (4, 2, 2.9, 1),
        ])),
        (doctor_id(10), trend([
            (2, 1, 3.7, 0), (3, 1, 3.6, 1), (3, 1, 3.5, 1),
            (2, 0, 3.5, 0), (3, 1, 3.4, 1), (3, 1, 3.3, 1),
        ])),
        (doctor_id(12), trend([
            (3, 1, 3.2, 1), (4, 2, 3.0, 1), (5, 2, 2.8, 2),
            (5, 2, 2.7, 1), (5, 2, 2.6, 2), (5, 2, 2.5, 2),
        ])),
    ])
}

struct Visit {
    n: u128,
    doctor: u128,
    date: (u32, u32),
    patient: &'static str,
    scheduled: (u32, u32),
    joined: Option<(u32, u32)>,
    duration: u32,
    status: AppointmentStatus,
    rating: Option<u8>,
    feedback: Option<&'static str>,
    issues: &'static [&'static str],
}

impl Visit {
    fn into_history(self) -> AppointmentHistory {
        AppointmentHistory {
            id: appointment_id(self.n),
            doctor_id: doctor_id(self.doctor),
            date: date(self.date.0, self.date.1),
            patient_name: self.patient.to_string(),
            scheduled_time: time(self.scheduled.0, self.scheduled.1),
            joined_time: self.joined.map(|(h, m)| time(h, m)),
            duration_minutes: self.duration,
            status: self.status,
            patient_rating: self.rating,
            feedback: self.feedback.map(str::to_string),
            issues: self.issues.iter().map(|issue| issue.to_string()).collect(),
        }
    }
}

pub fn appointments() -> Vec<AppointmentHistory> {
    use AppointmentStatus::*;

    vec![
        Visit {
            n: 1,
            doctor: 12,
            date: (6, 3),
            patient: "Maria Garcia",
            scheduled: (9, 0),
            joined: None,
            duration: 0,
            status: NoShow,
            rating: Some(1),
            feedback: Some("Doctor never joined the call"),
            issues: &["no_show"],
        },
        Visit {
            n: 2,
            doctor: 12,
            date: (6, 7),
            patient: "Kevin O'Brien",
            scheduled: (14, 30),
            joined: Some((14, 52)),
            duration: 9,
            status: Delayed,
            rating: Some(2),
            feedback: Some("Joined very late and rushed"),
            issues: &["late_join", "short_consult"],
        },
        Visit {
            n: 3,
            doctor: 12,
            date: (6, 11),
            patient: "Fatima Noor",
            scheduled: (11, 0),
            joined: Some((11, 18)),
            duration: 12,
            status: Delayed,
            rating: Some(3),
            feedback: None,
            issues: &["late_join"],
        },
        Visit {
            n: 4,
            doctor: 12,
            date: (5, 28),
            patient: "Daniel Park",
            scheduled: (16, 0),
            joined: Some((16, 2)),
            duration: 20,
            status: Completed,
            rating: Some(4),
            feedback: None,
            issues: &[],
        },
        Visit {
            n: 5,
            doctor: 4,
            date: (6, 5),
            patient: "Helen Wright",
            scheduled: (10, 15),
            joined: Some((10, 31)),
            duration: 14,
            status: Delayed,
            rating: Some(3),
            feedback: Some("Waited a long time"),
            issues: &["late_join"],
        },
        Visit {
            n: 6,
            doctor: 4,
            date: (6, 9),
            patient: "Samuel Osei",
            scheduled: (13, 0),
            joined: Some((13, 1)),
            duration: 22,
            status: Completed,
            rating: Some(4),
            feedback: None,
            issues: &[],
        },
        Visit {
            n: 7,
            doctor: 4,
            date: (5, 30),
            patient: "Lucy Tran",
            scheduled: (8, 45),
            joined: None,
            duration: 0,
            status: Cancelled,
            rating: None,
            feedback: None,
            issues: &["cancelled_by_doctor"],
        },
        Visit {
            n: 8,
            doctor: 8,
            date: (6, 2),
            patient: "Ahmed Yusuf",
            scheduled: (15, 30),
            joined: None,
            duration: 0,
            status: NoShow,
            rating: Some(1),
            feedback: Some("No one showed up"),
            issues: &["no_show"],
        },
        Visit {
            n: 9,
            doctor: 8,
            date: (6, 10),
            patient: "Rachel Green",
            scheduled: (9, 30),
            joined: Some((9, 45)),
            duration: 10,
            status: Delayed,
            rating: Some(2),
            feedback: None,
            issues: &["late_join", "poor_connection"],
        },
        Visit {
            n: 10,
            doctor: 8,
            date: (5, 21),
            patient: "Carlos Mendez",
            scheduled: (12, 0),
            joined: Some((12, 0)),
            duration: 18,
            status: Completed,
            rating: Some(4),
            feedback: None,
            issues: &[],
        },
        Visit {
            n: 11,
            doctor: 1,
            date: (6, 12),
            patient: "Olivia Brooks",
            scheduled: (10, 0),
            joined: Some((9, 58)),
            duration: 25,
            status: Completed,
            rating: Some(5),
            feedback: Some("Thorough and kind"),
            issues: &[],
        },
        Visit {
            n: 12,
            doctor: 1,
            date: (6, 4),
            patient: "Ethan Wood",
            scheduled: (17, 0),
            joined: Some((17, 1)),
            duration: 21,
            status: Completed,
            rating: Some(5),
            feedback: None,
            issues: &[],
        },
    ]
    .into_iter()
    .map(Visit::into_history)
    .collect()
}
