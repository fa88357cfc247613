use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "APM Program")]
    ApmProgram,
    #[serde(rename = "RPM Program")]
    RpmProgram,
    #[serde(rename = "Entry Level")]
    EntryLevel,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    #[serde(rename = "Closing Soon")]
    ClosingSoon,
    Closed,
    Paused,
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobStatus::Open => "Open",
            JobStatus::ClosingSoon => "Closing Soon",
            JobStatus::Closed => "Closed",
            JobStatus::Paused => "Paused",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: JobType,
    pub deadline: NaiveDate,
    pub posted: NaiveDate,
    pub status: JobStatus,
    pub description: String,
    pub requirements: Vec<String>,
    pub application_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineState {
    Expired,
    Urgent,
    Active,
}

/// Derived on every read, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    #[serde(flatten)]
    pub job: JobPosting,
    pub days_left: i64,
    pub deadline_state: DeadlineState,
}

pub fn deadline_state(today: NaiveDate, deadline: NaiveDate) -> (i64, DeadlineState) {
    let days = (deadline - today).num_days();
    let state = if days < 0 {
        DeadlineState::Expired
    } else if days <= 7 {
        DeadlineState::Urgent
    } else {
        DeadlineState::Active
    };
    (days, state)
}

pub fn split_requirements(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
