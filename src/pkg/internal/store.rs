use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::pkg::internal::adaptors::{
    jobs::spec::JobPosting, links::spec::LinkSettings, mentors::spec::MentorRecord,
};
use crate::prelude::Result;

#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Absent,
    Corrupt,
}

// One JSON document per collection under the data directory, overriding
// the bundled defaults when present.
#[derive(Debug, Clone)]
pub struct Shadow {
    dir: PathBuf,
}

impl Shadow {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Shadow { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> LoadOutcome<T> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(value) => LoadOutcome::Loaded(value),
                Err(e) => {
                    tracing::warn!("discarding corrupt {} shadow: {}", key, e);
                    LoadOutcome::Corrupt
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => LoadOutcome::Absent,
            Err(e) => {
                tracing::warn!("unable to read {} shadow: {}", key, e);
                LoadOutcome::Corrupt
            }
        }
    }

    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.ensure_dir().await?;
        let raw = serde_json::to_string_pretty(value)?;
        tokio::fs::write(self.path(key), raw).await?;
        tracing::debug!("persisted {} shadow", key);
        Ok(())
    }

    pub async fn load_raw(&self, key: &str) -> LoadOutcome<String> {
        match tokio::fs::read_to_string(self.dir.join(key)).await {
            Ok(raw) => LoadOutcome::Loaded(raw.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => LoadOutcome::Absent,
            Err(e) => {
                tracing::warn!("unable to read {}: {}", key, e);
                LoadOutcome::Corrupt
            }
        }
    }

    pub async fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir().await?;
        tokio::fs::write(self.dir.join(key), value).await?;
        Ok(())
    }
}

pub fn default_mentors() -> Vec<MentorRecord> {
    serde_json::from_str(include_str!("../../../defaults/mentors.json"))
        .expect("bundled mentors.json is malformed")
}

pub fn default_jobs() -> Vec<JobPosting> {
    serde_json::from_str(include_str!("../../../defaults/jobs.json"))
        .expect("bundled jobs.json is malformed")
}

pub fn default_links() -> LinkSettings {
    serde_json::from_str(include_str!("../../../defaults/settings.json"))
        .expect("bundled settings.json is malformed")
}

pub struct ContentStore {
    shadow: Shadow,
    pub mentors: Vec<MentorRecord>,
    pub jobs: Vec<JobPosting>,
    pub links: LinkSettings,
    pub subscribers: Vec<String>,
    pub user_email: Option<String>,
}

impl ContentStore {
    // Shadows win when present; absent or corrupt shadows fall back to the
    // bundled defaults. Corruption is logged, never surfaced.
    pub async fn load(shadow: Shadow) -> Self {
        let mentors = match shadow.load("mentors").await {
            LoadOutcome::Loaded(mentors) => mentors,
            LoadOutcome::Absent => default_mentors(),
            LoadOutcome::Corrupt => {
                tracing::warn!("falling back to bundled mentors");
                default_mentors()
            }
        };
        let jobs = match shadow.load("jobs").await {
            LoadOutcome::Loaded(jobs) => jobs,
            LoadOutcome::Absent => default_jobs(),
            LoadOutcome::Corrupt => {
                tracing::warn!("falling back to bundled jobs");
                default_jobs()
            }
        };
        let links = match shadow.load("settings").await {
            LoadOutcome::Loaded(links) => links,
            LoadOutcome::Absent => default_links(),
            LoadOutcome::Corrupt => {
                tracing::warn!("falling back to bundled settings");
                default_links()
            }
        };
        let subscribers = match shadow.load("subscribers").await {
            LoadOutcome::Loaded(subscribers) => subscribers,
            _ => vec![],
        };
        let user_email = match shadow.load_raw("user_email").await {
            LoadOutcome::Loaded(email) if !email.is_empty() => Some(email),
            _ => None,
        };
        ContentStore {
            shadow,
            mentors,
            jobs,
            links,
            subscribers,
            user_email,
        }
    }

    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    pub async fn persist_mentors(&self) -> Result<()> {
        self.shadow.save("mentors", &self.mentors).await
    }

    pub async fn persist_jobs(&self) -> Result<()> {
        self.shadow.save("jobs", &self.jobs).await
    }

    pub async fn persist_links(&self) -> Result<()> {
        self.shadow.save("settings", &self.links).await
    }

    pub async fn persist_subscribers(&self) -> Result<()> {
        self.shadow.save("subscribers", &self.subscribers).await
    }

    pub async fn persist_user_email(&self) -> Result<()> {
        match &self.user_email {
            Some(email) => self.shadow.save_raw("user_email", email).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use tempfile::TempDir;
    use tracing_test::traced_test;

    use super::*;
    use crate::prelude::Result;

    pub async fn test_store() -> (TempDir, ContentStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::load(Shadow::new(dir.path())).await;
        (dir, store)
    }

    #[tokio::test]
    #[traced_test]
    async fn test_absent_shadows_use_bundled_defaults() {
        let (_dir, store) = test_store().await;
        assert_eq!(store.mentors, default_mentors());
        assert_eq!(store.jobs, default_jobs());
        assert_eq!(store.links, default_links());
        assert!(store.subscribers.is_empty());
        assert!(store.user_email.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_corrupt_shadow_falls_back() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        tokio::fs::write(dir.path().join("mentors.json"), "{not json").await?;
        let store = ContentStore::load(Shadow::new(dir.path())).await;
        assert_eq!(store.mentors, default_mentors());
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_persisted_shadow_overrides_defaults() -> Result<()> {
        let (dir, mut store) = test_store().await;
        store.jobs.retain(|job| job.id == 1);
        store.persist_jobs().await?;
        let reloaded = ContentStore::load(Shadow::new(dir.path())).await;
        assert_eq!(reloaded.jobs.len(), 1);
        assert_eq!(reloaded.jobs[0].id, 1);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_user_email_raw_roundtrip() -> Result<()> {
        let (dir, mut store) = test_store().await;
        store.user_email = Some("student@emory.edu".into());
        store.persist_user_email().await?;
        let reloaded = ContentStore::load(Shadow::new(dir.path())).await;
        assert_eq!(reloaded.user_email.as_deref(), Some("student@emory.edu"));
        Ok(())
    }
}
