//! Registered users and their application status.

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::table::{Record, coerce_json};

/// Status shown when the status lookup failed or returned nothing.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Reads a user field that the API may send as a string, a number, `null`, or not at all.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_json).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub campus: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub program: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub specialization: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(
        rename = "applicationStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub application_status: Option<String>,
    #[serde(
        rename = "applicationID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub application_id: Option<String>,
    /// Last onboarding step reached, looked up for applicants without a known status.
    #[serde(skip)]
    pub last_step: Option<LastStep>,
}

impl Applicant {
    /// Copies the looked-up status onto the applicant.
    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.application_status = Some(status.status);
        self.application_id = status.application_id;
        self
    }

    pub fn with_last_step(mut self, last_step: Option<LastStep>) -> Self {
        self.last_step = last_step;
        self
    }

    pub fn is_status_unknown(&self) -> bool {
        self.application_status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case(UNKNOWN_STATUS))
    }

    /// The last step, shown in place of an unknown status.
    fn step_override(&self) -> Option<&LastStep> {
        self.last_step.as_ref().filter(|_| self.is_status_unknown())
    }

    /// Status as displayed: first letter capitalized, or the last step's label
    /// when the status is unknown.
    pub fn display_status(&self) -> String {
        if let Some(step) = self.step_override() {
            return step.label();
        }
        let status = self.application_status.as_deref().unwrap_or(UNKNOWN_STATUS);
        let mut chars = status.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => UNKNOWN_STATUS.to_owned(),
        }
    }

    pub fn status_color(&self) -> Color32 {
        if self.step_override().is_some() {
            return STEP_COLOR;
        }
        let status = self
            .application_status
            .as_deref()
            .unwrap_or(UNKNOWN_STATUS)
            .to_lowercase();
        match status.as_str() {
            "approved" => Color32::from_rgb(22, 163, 74),
            "pending" => Color32::from_rgb(202, 138, 4),
            "rejected" => Color32::from_rgb(220, 38, 38),
            "submitted" => STEP_COLOR,
            _ => Color32::from_rgb(107, 114, 128),
        }
    }
}

const STEP_COLOR: Color32 = Color32::from_rgb(37, 99, 235);

impl Record for Applicant {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "campus" => Some(self.campus.clone()),
            "program" => Some(self.program.clone()),
            "specialization" => Some(self.specialization.clone()),
            "role" => Some(self.role.clone()),
            "applicationStatus" => self.application_status.clone(),
            "applicationID" => self.application_id.clone(),
            _ => None,
        }
    }
}

/// Body of `GET /users/`.
#[derive(Debug, Deserialize)]
pub struct ListApplicantsResponse {
    #[serde(default)]
    pub users: Vec<Applicant>,
}

/// Body of `GET /application/status/`.
#[derive(Debug, Deserialize)]
pub struct ApplicationStatusResponse {
    #[serde(default)]
    pub student_details: Option<Map<String, Value>>,
}

/// Result of an application status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStatus {
    pub status: String,
    pub application_id: Option<String>,
}

impl ApplicationStatus {
    pub fn unknown() -> Self {
        Self {
            status: UNKNOWN_STATUS.to_owned(),
            application_id: None,
        }
    }

    /// Reads `approval_status` and the student id out of `student_details`.
    ///
    /// Empty values fall through: a blank status is unknown, and a blank
    /// `student_id` defers to `generated_student_id`.
    pub fn from_details(details: &Map<String, Value>) -> Self {
        let non_empty = |key: &str| details.field(key).filter(|value| !value.is_empty());

        Self {
            status: non_empty("approval_status").unwrap_or_else(|| UNKNOWN_STATUS.to_owned()),
            application_id: non_empty("student_id").or_else(|| non_empty("generated_student_id")),
        }
    }
}

impl From<ApplicationStatusResponse> for ApplicationStatus {
    fn from(response: ApplicationStatusResponse) -> Self {
        response
            .student_details
            .as_ref()
            .map_or_else(Self::unknown, Self::from_details)
    }
}

/// Body of `GET /step-cache/last/`.
#[derive(Debug, Deserialize)]
pub struct LastStepResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub step_name: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// The furthest onboarding step a user reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastStep {
    pub step_name: String,
    pub session_id: Option<String>,
}

impl LastStep {
    /// `"upload_documents"` -> `"UPLOAD DOCUMENTS"`.
    pub fn label(&self) -> String {
        self.step_name.replace('_', " ").to_uppercase()
    }
}

impl LastStepResponse {
    /// The step, when the lookup succeeded and named one.
    pub fn into_last_step(self) -> Option<LastStep> {
        if !self.success {
            return None;
        }
        self.step_name
            .filter(|name| !name.is_empty())
            .map(|step_name| LastStep {
                step_name,
                session_id: self.session_id,
            })
    }
}

/// Where activating an applicant's row leads. Empty means the row does nothing.
pub fn application_url(applicant: &Applicant) -> String {
    if applicant.is_status_unknown() {
        return String::new();
    }
    match applicant.application_id.as_deref() {
        Some(id) if !id.is_empty() => format!("/admin/application/view/{id}"),
        _ => String::new(),
    }
}
