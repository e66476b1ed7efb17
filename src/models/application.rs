use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Review status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student's mentorship request, as returned by `GET student/applications/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub consultation_date: Option<String>,
    /// Assigned mentor's display name
    #[serde(default)]
    pub mentor: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Application {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Mentor name when one is assigned (blank counts as none)
    pub fn mentor_name(&self) -> Option<&str> {
        self.mentor.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }

    /// "Ada Lovelace" -> "AL"
    pub fn mentor_initials(&self) -> Option<String> {
        self.mentor_name().map(|name| {
            name.split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect()
        })
    }

    /// Creation date as M/D/YYYY; raw value when it can't be parsed
    pub fn applied_on(&self) -> String {
        if let Ok(created) = DateTime::parse_from_rfc3339(&self.created_at) {
            return created.format("%-m/%-d/%Y").to_string();
        }
        if let Ok(created) = NaiveDate::parse_from_str(&self.created_at, "%Y-%m-%d") {
            return created.format("%-m/%-d/%Y").to_string();
        }
        self.created_at.clone()
    }

    pub fn feedback_text(&self) -> &str {
        self.feedback
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or("No feedback yet")
    }

    pub fn consultation_text(&self) -> &str {
        self.consultation_date
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .unwrap_or("Not scheduled")
    }
}

/// Body of `POST student/applications/{id}/update_status/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
    /// Serialized as null when absent
    pub consultation_date: Option<String>,
}

impl StatusUpdateRequest {
    /// Approve and schedule the consultation at `pressed_at`
    pub fn approve(pressed_at: DateTime<Utc>) -> Self {
        Self {
            status: ApplicationStatus::Approved,
            consultation_date: Some(pressed_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn reject() -> Self {
        Self {
            status: ApplicationStatus::Rejected,
            consultation_date: None,
        }
    }
}

/// Body of `POST student/applications/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewApplication {
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub course: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Application {
        serde_json::from_str(
            r#"{
                "id": 7,
                "first_name": "Amina",
                "last_name": "Yusuf",
                "program": "Software Engineering Mentorship",
                "course": "Computer Science",
                "status": "Pending",
                "feedback": null,
                "consultation_date": null,
                "mentor": "Ada Lovelace",
                "created_at": "2025-01-15T09:30:00.000000Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_backend_record() {
        let app = sample();
        assert_eq!(app.id, 7);
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.full_name(), "Amina Yusuf");
        assert_eq!(app.applied_on(), "1/15/2025");
        assert_eq!(app.feedback_text(), "No feedback yet");
        assert_eq!(app.consultation_text(), "Not scheduled");
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let app: Application = serde_json::from_str(r#"{"id": 1, "status": "Withdrawn"}"#).unwrap();
        assert_eq!(app.status, ApplicationStatus::Unknown);
        assert_eq!(app.mentor_name(), None);
    }

    #[test]
    fn mentor_name_ignores_blank_values() {
        let mut app = sample();
        assert_eq!(app.mentor_name(), Some("Ada Lovelace"));
        assert_eq!(app.mentor_initials().as_deref(), Some("AL"));

        app.mentor = Some("   ".into());
        assert_eq!(app.mentor_name(), None);
        assert_eq!(app.mentor_initials(), None);
    }

    #[test]
    fn approve_carries_millisecond_timestamp() {
        let pressed = Utc.with_ymd_and_hms(2025, 1, 25, 10, 0, 0).unwrap();
        let body = serde_json::to_value(StatusUpdateRequest::approve(pressed)).unwrap();
        assert_eq!(body["status"], "Approved");
        assert_eq!(body["consultation_date"], "2025-01-25T10:00:00.000Z");
    }

    #[test]
    fn reject_sends_explicit_null() {
        let body = serde_json::to_value(StatusUpdateRequest::reject()).unwrap();
        assert_eq!(body["status"], "Rejected");
        assert!(body.get("consultation_date").unwrap().is_null());
    }
}
