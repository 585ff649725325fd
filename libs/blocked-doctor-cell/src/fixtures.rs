// Seed blocked list. Ids 8 and 12 match the blocked entries of the doctor roster;
// the rest belong to doctors already removed from it.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{BlockedDoctor, ReasonCategory};

pub fn doctor_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

struct Seed {
    n: u128,
    name: &'static str,
    specialty: &'static str,
    hospital: &'static str,
    blocked: (i32, u32, u32),
    blocked_by: &'static str,
    reason: &'static str,
    category: ReasonCategory,
    details: &'static str,
    warnings: u32,
    can_reactivate: bool,
}

impl Seed {
    fn into_blocked(self) -> BlockedDoctor {
        let (year, month, day) = self.blocked;
        let email = format!(
            "{}@telehealth.example",
            self.name.trim_start_matches("Dr. ").to_lowercase().replace(' ', ".")
        );

        BlockedDoctor {
            id: doctor_id(self.n),
            name: self.name.to_string(),
            email,
            specialty: self.specialty.to_string(),
            hospital: self.hospital.to_string(),
            blocked_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
            blocked_by: self.blocked_by.to_string(),
            reason: self.reason.to_string(),
            reason_category: self.category,
            details: self.details.to_string(),
            previous_warnings: self.warnings,
            can_reactivate: self.can_reactivate,
        }
    }
}

pub fn blocked_doctors() -> Vec<BlockedDoctor> {
    vec![
        Seed {
            n: 8,
            name: "Dr. Robert Brown",
            specialty: "General Practice",
            hospital: "Houston Methodist",
            blocked: (2024, 3, 4),
            blocked_by: "Admin Sarah Miller",
            reason: "Prescription irregularities",
            category: ReasonCategory::Violation,
            details: "Controlled substances prescribed without documented consultations.",
            warnings: 2,
            can_reactivate: false,
        },
        Seed {
            n: 12,
            name: "Dr. Thomas Anderson",
            specialty: "Oncology",
            hospital: "Stanford Health Care",
            blocked: (2024, 2, 19),
            blocked_by: "Admin James Cole",
            reason: "Repeated no-shows and late joins",
            category: ReasonCategory::Behavior,
            details: "Eleven missed appointments in six months after five warnings.",
            warnings: 5,
            can_reactivate: true,
        },
        Seed {
            n: 101,
            name: "Dr. Kevin Walsh",
            specialty: "Dermatology",
            hospital: "Cedars-Sinai",
            blocked: (2024, 5, 12),
            blocked_by: "Admin Sarah Miller",
            reason: "Unprofessional conduct during consultations",
            category: ReasonCategory::Behavior,
            details: "Several recorded sessions show dismissive language toward patients.",
            warnings: 3,
            can_reactivate: true,
        },
        Seed {
            n: 102,
            name: "Dr. Natalie Ross",
            specialty: "Psychiatry",
            hospital: "McLean Hospital",
            blocked: (2024, 1, 8),
            blocked_by: "Compliance Team",
            reason: "Expired medical license",
            category: ReasonCategory::Compliance,
            details: "State license lapsed and renewal was denied.",
            warnings: 1,
            can_reactivate: false,
        },
        Seed {
            n: 103,
            name: "Dr. Victor Alvarez",
            specialty: "Cardiology",
            hospital: "Cleveland Clinic",
            blocked: (2024, 4, 22),
            blocked_by: "Compliance Team",
            reason: "Missing malpractice insurance documents",
            category: ReasonCategory::Compliance,
            details: "Insurance certificate expired; renewal pending upload.",
            warnings: 0,
            can_reactivate: true,
        },
        Seed {
            n: 104,
            name: "Dr. Hannah Fischer",
            specialty: "Pediatrics",
            hospital: "Boston Children's Hospital",
            blocked: (2024, 6, 1),
            blocked_by: "Admin James Cole",
            reason: "Multiple patient complaints",
            category: ReasonCategory::Complaint,
            details: "Parents reported rushed consultations and missing follow-up notes.",
            warnings: 2,
            can_reactivate: true,
        },
        Seed {
            n: 105,
            name: "Dr. Marcus Greene",
            specialty: "Orthopedics",
            hospital: "Hospital for Special Surgery",
            blocked: (2024, 5, 27),
            blocked_by: "Admin Sarah Miller",
            reason: "Billing disputes raised by patients",
            category: ReasonCategory::Complaint,
            details: "Consultation fees charged above the listed rate.",
            warnings: 1,
            can_reactivate: true,
        },
        Seed {
            n: 106,
            name: "Dr. Sophie Laurent",
            specialty: "Neurology",
            hospital: "Johns Hopkins Hospital",
            blocked: (2024, 3, 30),
            blocked_by: "Security Team",
            reason: "Account sharing detected",
            category: ReasonCategory::Other,
            details: "Logins from two locations at once during consultations.",
            warnings: 0,
            can_reactivate: true,
        },
    ]
    .into_iter()
    .map(Seed::into_blocked)
    .collect()
}
