// Seed roster loaded into the in-memory repository when SEED_FIXTURES is enabled.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Doctor, DoctorStatus};

pub fn doctor_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

struct Seed {
    n: u128,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    license: &'static str,
    specialty: &'static str,
    sub_specialty: &'static str,
    city: &'static str,
    hospital: &'static str,
    status: DoctorStatus,
    rating: f64,
    consults: u32,
    joined: (i32, u32, u32),
    last_active: (i32, u32, u32, u32, u32),
    experience: u32,
    fee: f64,
    verified: bool,
}

impl Seed {
    fn into_doctor(self) -> Doctor {
        let (jy, jm, jd) = self.joined;
        let (ly, lm, ld, lh, lmin) = self.last_active;
        Doctor {
            id: doctor_id(self.n),
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            license_number: self.license.to_string(),
            specialty: self.specialty.to_string(),
            sub_specialty: self.sub_specialty.to_string(),
            city: self.city.to_string(),
            hospital: self.hospital.to_string(),
            status: self.status,
            rating: self.rating,
            total_consults: self.consults,
            joined_date: date(jy, jm, jd),
            last_active: at(ly, lm, ld, lh, lmin),
            experience_years: self.experience,
            consultation_fee: self.fee,
            is_verified: self.verified,
        }
    }
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Seed {
            n: 1,
            name: "Dr. Sarah Johnson",
            email: "sarah.johnson@telehealth.example",
            phone: "+1 (555) 201-4410",
            license: "MD-2019-04521",
            specialty: "Cardiology",
            sub_specialty: "Interventional Cardiology",
            city: "New York",
            hospital: "Mount Sinai Hospital",
            status: DoctorStatus::Active,
            rating: 4.9,
            consults: 1247,
            joined: (2023, 1, 15),
            last_active: (2024, 6, 14, 9, 30),
            experience: 15,
            fee: 150.0,
            verified: true,
        },
        Seed {
            n: 2,
            name: "Dr. Michael Chen",
            email: "michael.chen@telehealth.example",
            phone: "+1 (555) 318-2290",
            license: "MD-2017-11873",
            specialty: "Neurology",
            sub_specialty: "Epilepsy",
            city: "Chicago",
            hospital: "Northwestern Memorial",
            status: DoctorStatus::Active,
            rating: 4.8,
            consults: 982,
            joined: (2023, 3, 2),
            last_active: (2024, 6, 14, 8, 5),
            experience: 12,
            fee: 175.0,
            verified: true,
        },
        Seed {
            n: 3,
            name: "Dr. Emily Rodriguez",
            email: "emily.rodriguez@telehealth.example",
            phone: "+1 (555) 442-7781",
            license: "MD-2020-03317",
            specialty: "Pediatrics",
            sub_specialty: "Neonatology",
            city: "Houston",
            hospital: "Texas Children's Hospital",
            status: DoctorStatus::Active,
            rating: 4.7,
            consults: 856,
            joined: (2023, 5, 20),
            last_active: (2024, 6, 13, 16, 45),
            experience: 9,
            fee: 120.0,
            verified: true,
        },
        Seed {
            n: 4,
            name: "Dr. James Wilson",
            email: "james.wilson@telehealth.example",
            phone: "+1 (555) 509-1184",
            license: "MD-2015-08842",
            specialty: "Orthopedics",
            sub_specialty: "Sports Medicine",
            city: "Boston",
            hospital: "Massachusetts General",
            status: DoctorStatus::Suspended,
            rating: 4.6,
            consults: 634,
            joined: (2022, 11, 8),
            last_active: (2024, 5, 28, 11, 0),
            experience: 18,
            fee: 200.0,
            verified: true,
        },
        Seed {
            n: 5,
            name: "Dr. Priya Patel",
            email: "priya.patel@telehealth.example",
            phone: "+1 (555) 623-9015",
            license: "MD-2018-06609",
            specialty: "Dermatology",
            sub_specialty: "Cosmetic Dermatology",
            city: "San Francisco",
            hospital: "UCSF Medical Center",
            status: DoctorStatus::Active,
            rating: 4.5,
            consults: 1103,
            joined: (2023, 2, 11),
            last_active: (2024, 6, 14, 10, 12),
            experience: 11,
            fee: 140.0,
            verified: true,
        },
        Seed {
            n: 6,
            name: "Dr. David Kim",
            email: "david.kim@telehealth.example",
            phone: "+1 (555) 734-5502",
            license: "MD-2021-01298",
            specialty: "Psychiatry",
            sub_specialty: "Child Psychiatry",
            city: "Seattle",
            hospital: "Swedish Medical Center",
            status: DoctorStatus::Pending,
            rating: 4.4,
            consults: 87,
            joined: (2024, 4, 2),
            last_active: (2024, 6, 10, 14, 20),
            experience: 6,
            fee: 160.0,
            verified: false,
        },
        Seed {
            n: 7,
            name: "Dr. Aisha Mohammed",
            email: "aisha.mohammed@telehealth.example",
            phone: "+1 (555) 845-3376",
            license: "MD-2016-09954",
            specialty: "Cardiology",
            sub_specialty: "Electrophysiology",
            city: "Chicago",
            hospital: "Rush University Medical Center",
            status: DoctorStatus::Active,
            rating: 4.3,
            consults: 712,
            joined: (2023, 7, 19),
            last_active: (2024, 6, 12, 18, 40),
            experience: 14,
            fee: 165.0,
            verified: true,
        },
        Seed {
            n: 8,
            name: "Dr. Robert Brown",
            email: "robert.brown@telehealth.example",
            phone: "+1 (555) 956-2241",
            license: "MD-2012-04410",
            specialty: "General Practice",
            sub_specialty: "Family Medicine",
            city: "Houston",
            hospital: "Houston Methodist",
            status: DoctorStatus::Blocked,
            rating: 3.2,
            consults: 421,
            joined: (2022, 9, 30),
            last_active: (2024, 3, 3, 9, 15),
            experience: 22,
            fee: 90.0,
            verified: true,
        },
        Seed {
            n: 9,
            name: "Dr. Linda Martinez",
            email: "linda.martinez@telehealth.example",
            phone: "+1 (555) 167-8830",
            license: "MD-2019-07723",
            specialty: "Endocrinology",
            sub_specialty: "Diabetes",
            city: "New York",
            hospital: "NewYork-Presbyterian",
            status: DoctorStatus::Active,
            rating: 4.2,
            consults: 538,
            joined: (2023, 8, 5),
            last_active: (2024, 6, 14, 7, 55),
            experience: 10,
            fee: 155.0,
            verified: true,
        },
        Seed {
            n: 10,
            name: "Dr. Omar Hassan",
            email: "omar.hassan@telehealth.example",
            phone: "+1 (555) 278-6614",
            license: "MD-2014-02265",
            specialty: "Gastroenterology",
            sub_specialty: "Hepatology",
            city: "Boston",
            hospital: "Brigham and Women's Hospital",
            status: DoctorStatus::Suspended,
            rating: 3.8,
            consults: 299,
            joined: (2023, 1, 27),
            last_active: (2024, 4, 21, 13, 5),
            experience: 16,
            fee: 180.0,
            verified: true,
        },
        Seed {
            n: 11,
            name: "Dr. Grace Lee",
            email: "grace.lee@telehealth.example",
            phone: "+1 (555) 389-4407",
            license: "MD-2023-05581",
            specialty: "Pediatrics",
            sub_specialty: "Pediatric Allergy",
            city: "Seattle",
            hospital: "Seattle Children's",
            status: DoctorStatus::Pending,
            rating: 0.0,
            consults: 0,
            joined: (2024, 6, 1),
            last_active: (2024, 6, 1, 12, 0),
            experience: 3,
            fee: 110.0,
            verified: false,
        },
        Seed {
            n: 12,
            name: "Dr. Thomas Anderson",
            email: "thomas.anderson@telehealth.example",
            phone: "+1 (555) 490-1123",
            license: "MD-2011-03390",
            specialty: "Oncology",
            sub_specialty: "Radiation Oncology",
            city: "San Francisco",
            hospital: "Stanford Health Care",
            status: DoctorStatus::Blocked,
            rating: 2.9,
            consults: 344,
            joined: (2022, 10, 14),
            last_active: (2024, 2, 18, 15, 30),
            experience: 20,
            fee: 210.0,
            verified: true,
        },
    ]
    .into_iter()
    .map(Seed::into_doctor)
    .collect()
}
