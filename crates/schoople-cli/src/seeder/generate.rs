//! Fake record generation. Pure functions; nothing here touches the database.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use fake::Fake;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const SLOTS: [&str; 6] = [
    "09:00-09:45",
    "09:45-10:30",
    "10:45-11:30",
    "11:30-12:15",
    "13:00-13:45",
    "13:45-14:30",
];
pub const SUBJECTS: [&str; 6] = [
    "Mathematics",
    "English",
    "Science",
    "Social Studies",
    "Computer Science",
    "Physical Education",
];
pub const SECTIONS: [&str; 2] = ["A", "B"];

#[derive(Debug, Clone)]
pub struct SchoolSeed {
    pub code: String,
    pub title: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct PersonSeed {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct StudentSeed {
    pub person: PersonSeed,
    pub student_code: String,
    pub admission_number: String,
    pub dob: NaiveDate,
    pub father_name: String,
    pub mother_name: String,
    pub blood_group: &'static str,
}

#[derive(Debug, Clone)]
pub struct EventSeed {
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Copy)]
pub struct AttendanceSeed {
    pub date: NaiveDate,
    pub morning: bool,
    pub afternoon: bool,
}

pub fn generate_school() -> SchoolSeed {
    let city: String = CityName().fake();
    let street: String = StreetName().fake();
    let number = rand::thread_rng().gen_range(1000..10000);

    SchoolSeed {
        code: format!("SCH-{number}"),
        title: format!("{city} Public School"),
        address: format!("{number} {street}, {city}"),
        phone: PhoneNumber().fake(),
    }
}

pub fn generate_person() -> PersonSeed {
    PersonSeed {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
    }
}

pub fn generate_students(count: usize, today: NaiveDate) -> Vec<StudentSeed> {
    const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let person = generate_person();
            let age_days = rng.gen_range(6 * 365..17 * 365);
            StudentSeed {
                father_name: format!("{} {}", FirstName().fake::<String>(), person.last_name),
                mother_name: format!("{} {}", FirstName().fake::<String>(), person.last_name),
                person,
                student_code: format!("STU{:05}", i + 1),
                admission_number: format!("ADM{:05}", i + 1),
                dob: today - Duration::days(age_days),
                blood_group: BLOOD_GROUPS[rng.gen_range(0..BLOOD_GROUPS.len())],
            }
        })
        .collect()
}

/// Half the events lie in the past, half ahead of `now`.
pub fn generate_events(count: usize, now: NaiveDateTime) -> Vec<EventSeed> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let offset = Duration::days(rng.gen_range(1..60));
            let date = if i % 2 == 0 { now + offset } else { now - offset };
            let company: String = CompanyName().fake();
            let word: String = Word().fake();
            EventSeed {
                title: format!("{company} {word} day"),
                description: Sentence(4..10).fake(),
                date: date.date().and_time(NaiveTime::MIN) + Duration::hours(10),
            }
        })
        .collect()
}

/// One row per weekday in the `days` days before `today`.
pub fn generate_attendance(days: i64, today: NaiveDate) -> Vec<AttendanceSeed> {
    use chrono::Datelike;
    let mut rng = rand::thread_rng();

    (1..=days)
        .map(|back| today - Duration::days(back))
        .filter(|date| date.weekday().number_from_monday() <= 5)
        .map(|date| AttendanceSeed {
            date,
            morning: rng.gen_bool(0.92),
            afternoon: rng.gen_bool(0.9),
        })
        .rev()
        .collect()
}
