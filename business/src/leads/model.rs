//! Lead records as served by `/api/leads/`.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use egui::Color32;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::table::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Converted,
        Self::Lost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::New => Color32::from_rgb(59, 130, 246),
            Self::Contacted => Color32::from_rgb(245, 158, 11),
            Self::Qualified => Color32::from_rgb(139, 92, 246),
            Self::Converted => Color32::from_rgb(16, 185, 129),
            Self::Lost => Color32::from_rgb(239, 68, 68),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestLevel {
    Hot,
    Warm,
    Cold,
}

impl InterestLevel {
    pub const ALL: [Self; 3] = [Self::Hot, Self::Warm, Self::Cold];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::Hot => Color32::from_rgb(239, 68, 68),
            Self::Warm => Color32::from_rgb(245, 158, 11),
            Self::Cold => Color32::from_rgb(59, 130, 246),
        }
    }
}

impl fmt::Display for InterestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub status: LeadStatus,
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub interest_level: InterestLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<DateTime<Utc>>,
    /// Percentage, possibly fractional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_probability: Option<f64>,
}

impl Lead {
    /// Conversion probability as a whole percentage, 0 when unknown.
    pub fn probability_percent(&self) -> i64 {
        self.conversion_probability.map_or(0, |p| p.round() as i64)
    }
}

/// `/api/leads/` answers either with a bare list or wrapped in `leads`.
#[derive(Debug)]
pub enum ListLeadsResponse {
    Wrapped { leads: Vec<Lead> },
    Bare(Vec<Lead>),
}

// Picks the shape first so a bad lead reports its own error.
impl<'de> Deserialize<'de> for ListLeadsResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            list @ Value::Array(_) => Vec::<Lead>::deserialize(list)
                .map(Self::Bare)
                .map_err(D::Error::custom),
            Value::Object(mut object) => {
                let leads = object
                    .remove("leads")
                    .ok_or_else(|| D::Error::missing_field("leads"))?;
                Vec::<Lead>::deserialize(leads)
                    .map(|leads| Self::Wrapped { leads })
                    .map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!(
                "expected a list of leads or an object with `leads`, found {other}"
            ))),
        }
    }
}

impl ListLeadsResponse {
    pub fn into_leads(self) -> Vec<Lead> {
        match self {
            Self::Wrapped { leads } | Self::Bare(leads) => leads,
        }
    }
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Record for Lead {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "source" => Some(self.source.clone()),
            "status" => Some(self.status.as_str().to_owned()),
            "assignedTo" => self.assigned_to.clone(),
            "campus" => self.campus.clone(),
            "program" => self.program.clone(),
            "interest_level" => Some(self.interest_level.as_str().to_owned()),
            "notes" => self.notes.clone(),
            "created_at" => Some(timestamp(&self.created_at)),
            "last_contacted" => self.last_contacted.as_ref().map(timestamp),
            "next_follow_up" => self.next_follow_up.as_ref().map(timestamp),
            "conversion_probability" => self.conversion_probability.map(|p| p.to_string()),
            _ => None,
        }
    }
}
