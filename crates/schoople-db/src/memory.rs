//! In-memory backend mirroring the Postgres queries.
//!
//! Rows are plain vectors populated through the `with_*` builders. Joins and
//! ordering follow the SQL in `postgres.rs` so the two backends answer alike.

use std::cmp::Ordering;

use schoople_models::attendances::Attendance;
use schoople_models::events::Event;
use schoople_models::ids::{
    AcademicYearId, GradeSectionId, SchoolId, StaffId, StudentId, TimeTableId, UserId,
};
use schoople_models::schools::{AcademicYear, Grade, GradeSection, School, Section};
use schoople_models::staff::{Staff, Subject};
use schoople_models::students::{Enrollment, EnrollmentPlacement, Student};
use schoople_models::timetables::{TimeTable, TimeTableDetail, TimetableEntryRow};
use schoople_models::transports::{Transport, TransportRouteRow};
use schoople_models::users::{Role, User, UserRole};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    schools: Vec<School>,
    academic_years: Vec<AcademicYear>,
    grades: Vec<Grade>,
    sections: Vec<Section>,
    grade_sections: Vec<GradeSection>,
    students: Vec<Student>,
    enrollments: Vec<Enrollment>,
    users: Vec<User>,
    roles: Vec<Role>,
    user_roles: Vec<UserRole>,
    staff: Vec<Staff>,
    subjects: Vec<Subject>,
    timetables: Vec<TimeTable>,
    timetable_details: Vec<TimeTableDetail>,
    attendances: Vec<Attendance>,
    transports: Vec<Transport>,
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_school(mut self, school: School) -> Self {
        self.schools.push(school);
        self
    }

    pub fn with_academic_year(mut self, year: AcademicYear) -> Self {
        self.academic_years.push(year);
        self
    }

    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grades.push(grade);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_grade_section(mut self, grade_section: GradeSection) -> Self {
        self.grade_sections.push(grade_section);
        self
    }

    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    pub fn with_enrollment(mut self, enrollment: Enrollment) -> Self {
        self.enrollments.push(enrollment);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    pub fn with_user_role(mut self, user_role: UserRole) -> Self {
        self.user_roles.push(user_role);
        self
    }

    pub fn with_staff(mut self, staff: Staff) -> Self {
        self.staff.push(staff);
        self
    }

    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    pub fn with_timetable(mut self, timetable: TimeTable) -> Self {
        self.timetables.push(timetable);
        self
    }

    pub fn with_timetable_detail(mut self, detail: TimeTableDetail) -> Self {
        self.timetable_details.push(detail);
        self
    }

    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendances.push(attendance);
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transports.push(transport);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub(crate) fn find_login_user(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.is_active)
            .cloned()
    }

    pub(crate) fn find_user(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    pub(crate) fn find_student(&self, id: StudentId) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    pub(crate) fn find_school(&self, id: SchoolId) -> Option<School> {
        self.schools.iter().find(|s| s.id == id).cloned()
    }

    pub(crate) fn active_academic_years(&self) -> Vec<AcademicYear> {
        let mut years: Vec<AcademicYear> = self
            .academic_years
            .iter()
            .filter(|y| y.active)
            .cloned()
            .collect();
        years.sort_by_key(|y| y.id);
        years
    }

    pub(crate) fn find_enrollment(
        &self,
        student_id: StudentId,
        academic_year_id: AcademicYearId,
    ) -> Option<EnrollmentPlacement> {
        self.enrollments
            .iter()
            .filter(|e| {
                e.student_id == student_id && e.academic_year_id == academic_year_id && e.status
            })
            .filter_map(|e| {
                let gs_id = e.school_grade_section_id?;
                let gs = self.grade_sections.iter().find(|gs| gs.id == gs_id)?;
                Some(EnrollmentPlacement {
                    enrollment_id: e.id,
                    school_grade_section_id: gs.id,
                    school_id: gs.school_id,
                    grade: self
                        .grades
                        .iter()
                        .find(|g| g.id == gs.grade_id)
                        .map(|g| g.title.clone()),
                    section: self
                        .sections
                        .iter()
                        .find(|s| s.id == gs.section_id)
                        .map(|s| s.title.clone()),
                    roll_number: e.roll_number.clone(),
                })
            })
            .max_by_key(|p| p.enrollment_id)
    }

    pub(crate) fn roles_for_user(&self, user_id: UserId) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .roles
            .iter()
            .filter(|r| {
                self.user_roles
                    .iter()
                    .any(|ur| ur.user_id == user_id && ur.role_id == r.id)
            })
            .cloned()
            .collect();
        roles.sort_by_key(|r| r.id);
        roles
    }

    pub(crate) fn role_assignments(&self, user_id: UserId) -> Vec<UserRole> {
        let mut rows: Vec<UserRole> = self
            .user_roles
            .iter()
            .filter(|ur| ur.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|ur| ur.id);
        rows
    }

    pub(crate) fn find_timetable(
        &self,
        school_id: SchoolId,
        academic_year_id: AcademicYearId,
        grade_section_id: GradeSectionId,
    ) -> Option<TimeTable> {
        self.timetables
            .iter()
            .filter(|t| {
                t.school_id == school_id
                    && t.academic_year_id == academic_year_id
                    && t.schools_grades_sections_id == grade_section_id
            })
            .min_by_key(|t| t.id)
            .cloned()
    }

    pub(crate) fn timetable_entries(&self, time_table_id: TimeTableId) -> Vec<TimetableEntryRow> {
        let mut rows: Vec<TimetableEntryRow> = self
            .timetable_details
            .iter()
            .filter(|d| d.time_table_id == time_table_id)
            .map(|d| {
                let staff = self.staff_by_id(d.staff_id);
                TimetableEntryRow {
                    id: d.id,
                    day_name: d.day_name.clone(),
                    order_number: d.order_number,
                    time_slot: d.time_slot.clone(),
                    subject_title: self
                        .subjects
                        .iter()
                        .find(|s| s.id == d.subject_id)
                        .map(|s| s.title.clone()),
                    staff_first_name: staff.map(|s| s.first_name.clone()),
                    staff_last_name: staff.map(|s| s.last_name.clone()),
                }
            })
            .collect();
        rows.sort_by(|a, b| order_nulls_last(a.order_number, b.order_number).then(a.id.cmp(&b.id)));
        rows
    }

    pub(crate) fn attendances_for_student(&self, student_id: StudentId) -> Vec<Attendance> {
        let mut rows: Vec<Attendance> = self
            .attendances
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.attendence_date
                .cmp(&b.attendence_date)
                .then(a.id.cmp(&b.id))
        });
        rows
    }

    pub(crate) fn transports_for_school(&self, school_id: SchoolId) -> Vec<TransportRouteRow> {
        let mut rows: Vec<TransportRouteRow> = self
            .transports
            .iter()
            .filter(|t| t.school_id == school_id)
            .map(|t| {
                let driver = self.staff_by_id(t.driver_id);
                let in_charge = self.staff_by_id(t.in_charge_id);
                TransportRouteRow {
                    id: t.id,
                    driver_code: t.driver_code.clone(),
                    vehicle_number: t.vehicle_number.clone(),
                    route_number: t.route_number.clone(),
                    route_name: t.route_name.clone(),
                    vehicle_gps_device_id: t.vehicle_gps_device_id.clone(),
                    vehicle_tracking_url: t.vehicle_tracking_url.clone(),
                    driver_first_name: driver.map(|s| s.first_name.clone()),
                    driver_last_name: driver.map(|s| s.last_name.clone()),
                    in_charge_first_name: in_charge.map(|s| s.first_name.clone()),
                    in_charge_last_name: in_charge.map(|s| s.last_name.clone()),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.route_number.cmp(&b.route_number).then(a.id.cmp(&b.id)));
        rows
    }

    pub(crate) fn events_for_school(&self, school_id: SchoolId) -> Vec<Event> {
        let mut rows: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.school_id == school_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows
    }

    fn staff_by_id(&self, id: StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }
}

/// `ASC NULLS LAST`.
fn order_nulls_last(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
