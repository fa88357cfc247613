use chrono::{Days, NaiveDate, Utc};

use super::spec::{JobPosting, JobStatus, JobType};
use crate::pkg::internal::notify::{NotifyEvent, NotifyKind};
use crate::pkg::internal::store::ContentStore;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    store: &'a mut ContentStore,
}

impl<'a> JobMutator<'a> {
    pub fn new(store: &'a mut ContentStore) -> Self {
        JobMutator { store }
    }

    // Draft records are handed back to the caller and only enter the
    // committed collection through save().
    pub fn draft(&self) -> JobPosting {
        Self::draft_at(&self.store.jobs, Utc::now().date_naive())
    }

    fn draft_at(jobs: &[JobPosting], today: NaiveDate) -> JobPosting {
        let id = jobs.iter().map(|job| job.id).max().map_or(1, |max| max + 1);
        JobPosting {
            id,
            title: String::new(),
            company: String::new(),
            location: String::new(),
            kind: JobType::EntryLevel,
            deadline: today + Days::new(30),
            posted: today,
            status: JobStatus::Open,
            description: String::new(),
            requirements: vec![],
            application_link: String::new(),
        }
    }

    pub async fn save(&mut self, draft: JobPosting) -> Result<(JobPosting, Option<NotifyEvent>)> {
        let kind = match self.store.jobs.iter_mut().find(|job| job.id == draft.id) {
            Some(slot) => {
                *slot = draft.clone();
                NotifyKind::Updated
            }
            None => {
                self.store.jobs.push(draft.clone());
                NotifyKind::New
            }
        };
        self.store.persist_jobs().await?;
        tracing::info!("saved job {} ({:?})", draft.id, kind);
        let event = NotifyEvent::for_subscribers(&self.store.subscribers, draft.clone(), kind);
        Ok((draft, event))
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let before = self.store.jobs.len();
        self.store.jobs.retain(|job| job.id != id);
        if self.store.jobs.len() == before {
            return Ok(false);
        }
        self.store.persist_jobs().await?;
        tracing::info!("deleted job {}", id);
        Ok(true)
    }

    pub async fn set_status(
        &mut self,
        id: i32,
        status: JobStatus,
    ) -> Result<Option<(JobPosting, Option<NotifyEvent>)>> {
        let Some(job) = self.store.jobs.iter_mut().find(|job| job.id == id) else {
            tracing::warn!("status update for unknown job {}, ignoring", id);
            return Ok(None);
        };
        job.status = status;
        let job = job.clone();
        self.store.persist_jobs().await?;
        tracing::info!("job {} status set to {}", id, status);
        let event = NotifyEvent::for_subscribers(
            &self.store.subscribers,
            job.clone(),
            NotifyKind::StatusChange,
        );
        Ok(Some((job, event)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::store::tests::test_store;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_draft_defaults() {
        let today = date(2026, 8, 1);
        let draft = JobMutator::draft_at(&[], today);
        assert_eq!(draft.id, 1);
        assert_eq!(draft.kind, JobType::EntryLevel);
        assert_eq!(draft.status, JobStatus::Open);
        assert_eq!(draft.posted, today);
        assert_eq!(draft.deadline, date(2026, 8, 31));
        assert!(draft.requirements.is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_draft_id_exceeds_existing_ids() {
        let (_dir, store) = test_store().await;
        let max = store.jobs.iter().map(|job| job.id).max().unwrap();
        let draft = JobMutator::draft_at(&store.jobs, date(2026, 8, 1));
        assert!(store.jobs.iter().all(|job| draft.id > job.id));
        assert_eq!(draft.id, max + 1);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_draft_id_not_reused_after_deleting_lower_id() -> crate::prelude::Result<()> {
        let (_dir, mut store) = test_store().await;
        let mut mutator = JobMutator::new(&mut store);
        assert!(mutator.delete(2).await?);
        let draft = mutator.draft();
        assert!(store.jobs.iter().all(|job| job.id != 2));
        assert_eq!(draft.id, 4);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_save_new_job_notifies_subscribers() -> crate::prelude::Result<()> {
        let (_dir, mut store) = test_store().await;
        store.subscribers.push("student@emory.edu".to_string());
        let mut mutator = JobMutator::new(&mut store);
        let mut draft = mutator.draft();
        draft.title = "APM Intern".into();
        draft.company = "Acme".into();
        let before = mutator.store.jobs.len();
        let (saved, event) = mutator.save(draft).await?;
        assert_eq!(store.jobs.len(), before + 1);
        let event = event.expect("event");
        assert_eq!(event.kind, NotifyKind::New);
        assert_eq!(event.recipients, vec!["student@emory.edu".to_string()]);
        assert_eq!(event.job.id, saved.id);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_save_existing_job_is_an_update() -> crate::prelude::Result<()> {
        let (_dir, mut store) = test_store().await;
        store.subscribers.push("student@emory.edu".to_string());
        let mut draft = store.jobs[0].clone();
        draft.title = "Renamed role".into();
        let before = store.jobs.len();
        let (saved, event) = JobMutator::new(&mut store).save(draft).await?;
        assert_eq!(store.jobs.len(), before);
        assert_eq!(saved.title, "Renamed role");
        assert_eq!(store.jobs[0].title, "Renamed role");
        assert_eq!(event.expect("event").kind, NotifyKind::Updated);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_save_without_subscribers_skips_notification() -> crate::prelude::Result<()> {
        let (_dir, mut store) = test_store().await;
        let mut mutator = JobMutator::new(&mut store);
        let draft = mutator.draft();
        let (_, event) = mutator.save(draft).await?;
        assert!(event.is_none());
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_set_status_replaces_only_status() -> crate::prelude::Result<()> {
        let (_dir, mut store) = test_store().await;
        store.subscribers.push("student@emory.edu".to_string());
        let original = store.jobs[0].clone();
        let outcome = JobMutator::new(&mut store)
            .set_status(original.id, JobStatus::Closed)
            .await?
            .expect("job found");
        assert_eq!(outcome.0.status, JobStatus::Closed);
        assert_eq!(outcome.0.title, original.title);
        assert_eq!(outcome.1.expect("event").kind, NotifyKind::StatusChange);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_set_status_unknown_id_is_a_noop() -> crate::prelude::Result<()> {
        let (_dir, mut store) = test_store().await;
        store.subscribers.push("student@emory.edu".to_string());
        let before = store.jobs.clone();
        let outcome = JobMutator::new(&mut store)
            .set_status(999, JobStatus::Closed)
            .await?;
        assert!(outcome.is_none());
        assert_eq!(store.jobs, before);
        Ok(())
    }
}
