use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenderRole {
    Founder,
    HR,
    Other,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryKind {
    #[serde(rename = "Job Offer")]
    #[display("Job Offer")]
    JobOffer,
    Freelance,
    Connect,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingPlatform {
    #[serde(rename = "Google Meet")]
    #[display("Google Meet")]
    GoogleMeet,
    Zoom,
}

/// Recorded but never transitioned by this core beyond the initial
/// `Pending` stamp.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[display("pending")]
    Pending,
    #[display("replied")]
    Replied,
    #[display("ignored")]
    Ignored,
}

/// A completed contact/booking submission before intake stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub role: SenderRole,

    pub inquiry: InquiryKind,

    /// Requested meeting date.
    pub date: NaiveDate,

    /// Free-text slot, e.g. "10:30 AM".
    #[validate(length(min = 1, message = "Time slot cannot be empty"))]
    pub time: String,

    pub platform: MeetingPlatform,

    #[validate(length(min = 1, max = 100, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub country_code: String,

    #[serde(default)]
    pub phone: String,

    #[validate(length(min = 1, message = "Agenda cannot be empty"))]
    pub agenda: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,

    pub submitted_at: DateTime<Utc>,

    pub role: SenderRole,

    pub inquiry: InquiryKind,

    pub date: NaiveDate,

    pub time: String,

    pub platform: MeetingPlatform,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub country_code: String,

    #[serde(default)]
    pub phone: String,

    pub agenda: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub status: MessageStatus,
}

impl NewContactMessage {
    /// Stamps the submission with its system-assigned metadata.
    pub fn into_message(self, id: String, submitted_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            submitted_at,
            role: self.role,
            inquiry: self.inquiry,
            date: self.date,
            time: self.time,
            platform: self.platform,
            name: self.name,
            email: self.email,
            country_code: self.country_code,
            phone: self.phone,
            agenda: self.agenda,
            message: self.message,
            status: MessageStatus::Pending,
        }
    }
}
