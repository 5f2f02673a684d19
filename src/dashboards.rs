use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{
    Availability, ClassStatus, CreateClassRequest, FilterOption, MentorClass,
    MentorDashboardStats, MentorProfile, StudentClass, StudentDashboardStats,
    StudentFilterOptions, User,
};

// Seed literals are static and known-valid.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time")
}

/// MentorBoard
///
/// The mentor dashboard's view-model: an owned class list plus the filter and
/// mutation operations the dashboard exposes. The filtered view is derived on
/// demand from the list — the list itself is the only source of truth, and
/// the stats are recomputed from it rather than tracked as counters.
pub struct MentorBoard {
    classes: Vec<MentorClass>,
    // Monotonic id source for new classes.
    next_id: u64,
}

/// MentorBoardState
///
/// Shared handle used by the application state.
pub type MentorBoardState = Arc<RwLock<MentorBoard>>;

impl MentorBoard {
    /// The dashboard's fixture: three classes, two active, 92 students
    /// enrolled across them.
    pub fn seeded() -> Self {
        let classes = vec![
            MentorClass {
                id: 1,
                title: "Calligraphy".to_string(),
                category: "Art".to_string(),
                date: ymd(2025, 9, 12),
                time: hm(10, 0),
                duration_minutes: 120,
                max_students: 50,
                current_students: 35,
                description: "With over 15 years of teaching experience, this award-winning artist and passionate educator brings expert guidance to every calligraphy class. Designed for all skill levels, the sessions focus on mastering technique, fostering creativity, and building confidence in lettering. Join to explore the timeless art of calligraphy in a supportive and inspiring environment.".to_string(),
                image_url: "/assets/images/mentor-dashboard/010dd8a8ed27fe629d69e6bf6074307dbb15720c.png".to_string(),
                status: ClassStatus::Active,
            },
            MentorClass {
                id: 2,
                title: "Pottery".to_string(),
                category: "Art".to_string(),
                date: ymd(2025, 9, 22),
                time: hm(12, 0),
                duration_minutes: 160,
                max_students: 55,
                current_students: 42,
                description: "With over 15 years of teaching experience, this award-winning artist and passionate educator offers expert guidance in pottery. Classes are designed for all skill levels, focusing on hands-on techniques, creativity, and developing confidence with clay. Students will explore various pottery methods in a supportive and inspiring environment.".to_string(),
                image_url: "/assets/images/mentor-dashboard/64be93649b9709f55ed5e5c60c86a5b3d2a46b5f.png".to_string(),
                status: ClassStatus::Active,
            },
            MentorClass {
                id: 3,
                title: "Photography".to_string(),
                category: "Art".to_string(),
                date: ymd(2025, 10, 15),
                time: hm(14, 0),
                duration_minutes: 90,
                max_students: 20,
                current_students: 15,
                description: "Learn the fundamentals of digital photography with hands-on practice. This course covers composition, lighting, and basic editing techniques. Perfect for beginners who want to improve their photography skills.".to_string(),
                image_url: "/assets/images/mentor-dashboard/010dd8a8ed27fe629d69e6bf6074307dbb15720c.png".to_string(),
                status: ClassStatus::Inactive,
            },
        ];
        let next_id = classes.len() as u64 + 1;
        Self { classes, next_id }
    }

    /// matches
    ///
    /// The dashboard's filter predicate: case-insensitive substring match on
    /// title or category, AND status equality. A missing, empty, or "all"
    /// status places no constraint; an unrecognized status value matches
    /// nothing, exactly like a select stuck on a bogus option. Pure — calling
    /// it never changes what it will return next time.
    fn matches(class: &MentorClass, search: Option<&str>, status: Option<&str>) -> bool {
        let matches_search = search.map_or(true, |term| {
            if term.is_empty() {
                return true;
            }
            let needle = term.to_lowercase();
            class.title.to_lowercase().contains(&needle)
                || class.category.to_lowercase().contains(&needle)
        });

        let matches_status = match status {
            None => true,
            Some(s) if s.is_empty() || s == "all" => true,
            Some(s) => ClassStatus::parse(s).map_or(false, |st| class.status == st),
        };

        matches_search && matches_status
    }

    /// Derived filtered view over the class list.
    pub fn filter(&self, search: Option<&str>, status: Option<&str>) -> Vec<MentorClass> {
        self.classes
            .iter()
            .filter(|c| Self::matches(c, search, status))
            .cloned()
            .collect()
    }

    /// Adds a class. New classes always start with zero enrolled students.
    pub fn add(&mut self, req: CreateClassRequest) -> MentorClass {
        let class = MentorClass {
            id: self.next_id,
            title: req.title,
            category: req.category,
            date: req.date,
            time: req.time,
            duration_minutes: req.duration_minutes,
            max_students: req.max_students,
            current_students: 0,
            description: req.description,
            image_url: req.image_url,
            status: req.status,
        };
        self.next_id += 1;
        self.classes.push(class.clone());
        class
    }

    /// Removes a class. True iff the id existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c.id != id);
        self.classes.len() < before
    }

    /// Marks a class active. Idempotent; None only for an unknown id.
    pub fn activate(&mut self, id: u64) -> Option<MentorClass> {
        self.set_status(id, ClassStatus::Active)
    }

    /// Marks a class inactive. Idempotent; None only for an unknown id.
    pub fn deactivate(&mut self, id: u64) -> Option<MentorClass> {
        self.set_status(id, ClassStatus::Inactive)
    }

    fn set_status(&mut self, id: u64, status: ClassStatus) -> Option<MentorClass> {
        let class = self.classes.iter_mut().find(|c| c.id == id)?;
        class.status = status;
        Some(class.clone())
    }

    /// stats
    ///
    /// Recomputed from the class list on every call. The counters can never
    /// drift from the list because they have no storage of their own.
    pub fn stats(&self) -> MentorDashboardStats {
        MentorDashboardStats {
            total_classes: self.classes.len() as u64,
            active_classes: self
                .classes
                .iter()
                .filter(|c| c.status == ClassStatus::Active)
                .count() as u64,
            students_enrolled: self
                .classes
                .iter()
                .map(|c| u64::from(c.current_students))
                .sum(),
        }
    }
}

/// StudentBoard
///
/// The student dashboard's view-model: the browsable class list with its
/// three-way filter and the enroll action.
pub struct StudentBoard {
    classes: Vec<StudentClass>,
}

/// StudentBoardState
///
/// Shared handle used by the application state.
pub type StudentBoardState = Arc<RwLock<StudentBoard>>;

impl StudentBoard {
    pub fn seeded() -> Self {
        let classes = vec![
            StudentClass {
                id: 1,
                name: "Oil Painting class".to_string(),
                category: "art".to_string(),
                date: ymd(2025, 9, 12),
                time: hm(10, 0),
                availability: Availability::Available,
                mentor_name: "Sarah Johnson".to_string(),
                description: "Learn the fundamentals of oil painting with professional techniques"
                    .to_string(),
                enrolled: false,
            },
            StudentClass {
                id: 2,
                name: "Jazz with Jazz".to_string(),
                category: "music".to_string(),
                date: ymd(2025, 9, 12),
                time: hm(10, 0),
                availability: Availability::Offline,
                mentor_name: "Jazz Martinez".to_string(),
                description: "Explore the world of jazz music and improvisation".to_string(),
                enrolled: false,
            },
            StudentClass {
                id: 3,
                name: "Dance it out".to_string(),
                category: "dance".to_string(),
                date: ymd(2025, 9, 12),
                time: hm(10, 0),
                availability: Availability::Busy,
                mentor_name: "Emma Wilson".to_string(),
                description: "Express yourself through contemporary dance movements".to_string(),
                enrolled: false,
            },
        ];
        Self { classes }
    }

    /// matches
    ///
    /// Conjunction of specialization equality (case-insensitive on category),
    /// availability equality, and a substring search over class name or
    /// mentor name. "all"/absent disables a constraint; an unrecognized value
    /// matches nothing. Pure.
    fn matches(
        class: &StudentClass,
        specialization: Option<&str>,
        availability: Option<&str>,
        search: Option<&str>,
    ) -> bool {
        let matches_specialization = match specialization {
            None => true,
            Some(s) if s.is_empty() || s == "all" => true,
            Some(s) => class.category.to_lowercase() == s.to_lowercase(),
        };

        let matches_availability = match availability {
            None => true,
            Some(a) if a.is_empty() || a == "all" => true,
            Some(a) => Availability::parse(a).map_or(false, |av| class.availability == av),
        };

        let matches_search = search.map_or(true, |term| {
            if term.is_empty() {
                return true;
            }
            let needle = term.to_lowercase();
            class.name.to_lowercase().contains(&needle)
                || class.mentor_name.to_lowercase().contains(&needle)
        });

        matches_specialization && matches_availability && matches_search
    }

    pub fn filter(
        &self,
        specialization: Option<&str>,
        availability: Option<&str>,
        search: Option<&str>,
    ) -> Vec<StudentClass> {
        self.classes
            .iter()
            .filter(|c| Self::matches(c, specialization, availability, search))
            .cloned()
            .collect()
    }

    /// Marks a class as enrolled. Idempotent; None only for an unknown id.
    pub fn enroll(&mut self, id: u64) -> Option<StudentClass> {
        let class = self.classes.iter_mut().find(|c| c.id == id)?;
        class.enrolled = true;
        Some(class.clone())
    }

    /// stats
    ///
    /// `matching_search` is computed for the supplied filter parameters so
    /// the headline matches the list the student is looking at.
    pub fn stats(
        &self,
        specialization: Option<&str>,
        availability: Option<&str>,
        search: Option<&str>,
    ) -> StudentDashboardStats {
        StudentDashboardStats {
            total_classes: self.classes.len() as u64,
            available_now: self
                .classes
                .iter()
                .filter(|c| c.availability == Availability::Available)
                .count() as u64,
            matching_search: self
                .classes
                .iter()
                .filter(|c| Self::matches(c, specialization, availability, search))
                .count() as u64,
        }
    }

    /// The select-box option lists shown above the class grid.
    pub fn filter_options() -> StudentFilterOptions {
        let option = |value: &str, label: &str| FilterOption {
            value: value.to_string(),
            label: label.to_string(),
        };
        StudentFilterOptions {
            specializations: vec![
                option("all", "All Specializations"),
                option("art", "Art"),
                option("music", "Music"),
                option("dance", "Dance"),
                option("cooking", "Cooking"),
                option("technology", "Technology"),
            ],
            mentor_filters: vec![
                option("all", "All Mentors"),
                option("available", "Available Now"),
                option("top-rated", "Top Rated"),
            ],
        }
    }
}

/// mentor_profile_for
///
/// Builds the mentor profile page data: fixed presentation copy with the
/// display name taken from the authenticated mentor.
pub fn mentor_profile_for(user: &User) -> MentorProfile {
    MentorProfile {
        name: user.name.clone(),
        title: "Master Calligrapher".to_string(),
        description: "With over 15 years of teaching experience, this award-winning artist and passionate educator brings expert guidance to every calligraphy class. Designed for all skill levels, the sessions focus on mastering technique, fostering creativity, and building confidence in lettering. Join to explore the timeless art of calligraphy in a supportive and inspiring environment.".to_string(),
        profile_image: "/assets/images/mentor-profile/1dd129badf9c1651a9b414b74aec0b7405d07b38.png"
            .to_string(),
        work_image: "/assets/images/mentor-profile/a8948bee51d6cac38fd1447c50ed8607a4011031.png"
            .to_string(),
    }
}
