use chrono::NaiveDate;

use super::spec::{deadline_state, JobPosting, JobView};
use crate::pkg::internal::store::ContentStore;

pub struct JobSelector<'a> {
    store: &'a ContentStore,
}

impl<'a> JobSelector<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        JobSelector { store }
    }

    pub fn get_by_id(&self, id: i32) -> Option<&JobPosting> {
        self.store.jobs.iter().find(|job| job.id == id)
    }

    pub fn get_all(&self, today: NaiveDate) -> Vec<JobView> {
        self.store
            .jobs
            .iter()
            .map(|job| {
                let (days_left, state) = deadline_state(today, job.deadline);
                JobView {
                    job: job.clone(),
                    days_left,
                    deadline_state: state,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::adaptors::jobs::spec::DeadlineState;
    use crate::pkg::internal::store::tests::test_store;

    #[tokio::test]
    #[traced_test]
    async fn test_get_all_derives_deadline_state() {
        let (_dir, store) = test_store().await;
        let today = NaiveDate::from_ymd_opt(2026, 8, 18).unwrap();
        let views = JobSelector::new(&store).get_all(today);
        assert_eq!(views.len(), store.jobs.len());
        let intern = views.iter().find(|v| v.job.id == 3).expect("job 3");
        assert_eq!(intern.days_left, 2);
        assert_eq!(intern.deadline_state, DeadlineState::Urgent);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_by_id() {
        let (_dir, store) = test_store().await;
        let selector = JobSelector::new(&store);
        assert!(selector.get_by_id(1).is_some());
        assert!(selector.get_by_id(999).is_none());
    }
}
