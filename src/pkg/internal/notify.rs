use serde::Serialize;
use tokio::sync::mpsc;

use crate::pkg::internal::adaptors::jobs::spec::JobPosting;
use crate::pkg::internal::email::{jobalert::JobAlertTemplate, SendEmail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyKind {
    New,
    Updated,
    StatusChange,
}

// Recipients are snapshotted at trigger time so a subscribe landing
// mid-dispatch never changes an in-flight event.
#[derive(Debug, Clone)]
pub struct NotifyEvent {
    pub job: JobPosting,
    pub kind: NotifyKind,
    pub recipients: Vec<String>,
}

impl NotifyEvent {
    pub fn for_subscribers(
        subscribers: &[String],
        job: JobPosting,
        kind: NotifyKind,
    ) -> Option<Self> {
        if subscribers.is_empty() {
            return None;
        }
        Some(NotifyEvent {
            job,
            kind,
            recipients: subscribers.to_vec(),
        })
    }
}

// The queue decouples the triggering handler from delivery; the job
// mutation is already committed by the time an event is enqueued, so a
// failed send never rolls anything back.
pub fn spawn_dispatcher() -> mpsc::UnboundedSender<NotifyEvent> {
    let (tx, mut rx) = mpsc::unbounded_channel::<NotifyEvent>();
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let template = JobAlertTemplate {
                job: &event.job,
                kind: event.kind,
            };
            drain_event(&template, &event.recipients).await;
            tracing::info!(
                "notified {} subscribers about {:?} for job: {}",
                event.recipients.len(),
                event.kind,
                &event.job.title
            );
        }
        tracing::warn!("notification queue closed");
    });
    tx
}

// Sequential, best-effort: one send per recipient in registry insertion
// order, each awaited before the next, failures logged and skipped.
pub async fn drain_event<T: SendEmail + Sync>(template: &T, recipients: &[String]) {
    for email in recipients {
        if let Err(e) = template.send(email).await {
            tracing::error!("failed to notify {}: {}", email, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tracing_test::traced_test;

    use super::*;
    use crate::prelude::{Result, StandardError};

    struct RecordingSender {
        sent: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    #[async_trait::async_trait]
    impl SendEmail for RecordingSender {
        async fn send(&self, email: &str) -> Result<()> {
            self.sent.lock().expect("lock").push(email.to_string());
            if self.fail_on.as_deref() == Some(email) {
                return Err(StandardError::new("ERR-MAIL-001"));
            }
            Ok(())
        }
    }

    fn job() -> JobPosting {
        crate::pkg::internal::store::default_jobs().remove(0)
    }

    #[test]
    fn test_no_event_without_subscribers() {
        assert!(NotifyEvent::for_subscribers(&[], job(), NotifyKind::New).is_none());
    }

    #[test]
    fn test_event_snapshots_recipients() {
        let subscribers = vec!["a@emory.edu".to_string(), "b@emory.edu".to_string()];
        let event = NotifyEvent::for_subscribers(&subscribers, job(), NotifyKind::Updated)
            .expect("event");
        assert_eq!(event.recipients, subscribers);
        assert_eq!(event.kind, NotifyKind::Updated);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_drain_continues_past_failed_send() {
        let sender = RecordingSender {
            sent: Mutex::new(vec![]),
            fail_on: Some("b@emory.edu".to_string()),
        };
        let recipients = vec![
            "a@emory.edu".to_string(),
            "b@emory.edu".to_string(),
            "c@emory.edu".to_string(),
        ];
        drain_event(&sender, &recipients).await;
        assert_eq!(*sender.sent.lock().expect("lock"), recipients);
    }
}
