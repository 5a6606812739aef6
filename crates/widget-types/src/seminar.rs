//! Seminar listing and registration payloads.
//! Used by the seminar client in widget-platform; the chat core never touches these.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seminar {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    /// ISO 8601 start time
    pub date: Option<String>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub location_details: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub registered_count: u32,
    #[serde(default)]
    pub status: Option<String>,
}

impl Seminar {
    pub fn available_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }

    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }
}

/// Body of `GET /api/seminars/upcoming`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeminarList {
    #[serde(default)]
    pub seminars: Vec<Seminar>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderPreference {
    #[default]
    Email,
    Sms,
    Both,
}

/// Body of `POST /api/seminars/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeminarRegistration {
    pub seminar_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub reminder_preference: ReminderPreference,
}

impl SeminarRegistration {
    pub fn guest(
        seminar_id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            seminar_id,
            guest_name: name.into(),
            guest_email: email.into(),
            guest_phone: phone.into(),
            reminder_preference: ReminderPreference::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub success: bool,
    pub registration_id: i64,
    #[serde(default)]
    pub message: String,
}
