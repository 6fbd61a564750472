use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub is_authenticated: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Instructor {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Zero means the offering is free (consultations).
    pub price: u32,
    pub duration: String,
    pub students: u32,
    pub rating: f32,
    pub category: String,
    pub modules: Vec<String>,
    pub instructor: Instructor,
}

impl Service {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
    pub course: String,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub students: u32,
    pub courses: u32,
    pub certificates: u32,
    pub instructors: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConsultationBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub topic: String,
    pub message: String,
}

/// First character of a display name, used for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
