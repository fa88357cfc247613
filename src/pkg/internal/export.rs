use chrono::{DateTime, Utc};
use serde::Serialize;
use standard_error::StandardError;

use crate::pkg::internal::adaptors::{
    jobs::spec::JobPosting, links::spec::LinkSettings, mentors::spec::MentorRecord,
};
use crate::pkg::internal::store::ContentStore;
use crate::prelude::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub mentors: Vec<MentorRecord>,
    pub jobs: Vec<JobPosting>,
    pub settings: LinkSettings,
    pub subscribers: Vec<String>,
    pub export_date: DateTime<Utc>,
}

pub fn snapshot(store: &ContentStore) -> ExportBundle {
    ExportBundle {
        mentors: store.mentors.clone(),
        jobs: store.jobs.clone(),
        settings: store.links.clone(),
        subscribers: store.subscribers.clone(),
        export_date: Utc::now(),
    }
}

pub fn export_filename(exported: DateTime<Utc>) -> String {
    format!("pmory-data-{}.json", exported.format("%Y-%m-%d"))
}

// One collection, pretty-printed, plus the bundled file a human should
// paste it into to make the change permanent.
#[derive(Debug, Serialize)]
pub struct Promotion {
    pub file: String,
    pub json: String,
}

pub fn serialize_for_promotion(store: &ContentStore, collection: &str) -> Result<Promotion> {
    let (file, json) = match collection {
        "mentors" => (
            "defaults/mentors.json",
            serde_json::to_string_pretty(&store.mentors)?,
        ),
        "jobs" => (
            "defaults/jobs.json",
            serde_json::to_string_pretty(&store.jobs)?,
        ),
        "settings" => (
            "defaults/settings.json",
            serde_json::to_string_pretty(&store.links)?,
        ),
        _ => {
            return Err(StandardError::new(
                "ERR-EXPORT-001: unknown collection, expected mentors, jobs or settings",
            ))
        }
    };
    Ok(Promotion {
        file: file.to_string(),
        json,
    })
}
