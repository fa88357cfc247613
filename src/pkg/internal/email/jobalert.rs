use std::fmt::{self, Display};

use super::{send_email, SendEmail};
use crate::pkg::internal::{adaptors::jobs::spec::JobPosting, notify::NotifyKind};
use crate::prelude::Result;

pub struct JobAlertTemplate<'a> {
    pub job: &'a JobPosting,
    pub kind: NotifyKind,
}

impl<'a> JobAlertTemplate<'a> {
    pub fn subject(&self) -> String {
        match self.kind {
            NotifyKind::New => format!(
                "New PM Job Alert: {} at {}",
                self.job.title, self.job.company
            ),
            NotifyKind::Updated => {
                format!("Job Updated: {} at {}", self.job.title, self.job.company)
            }
            NotifyKind::StatusChange => format!(
                "Job Status Update: {} at {}",
                self.job.title, self.job.company
            ),
        }
    }
}

impl<'a> Display for JobAlertTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deadline = self.job.deadline.format("%m/%d/%Y");
        match self.kind {
            NotifyKind::New => write!(
                f,
                "A new Product Manager position has been posted!\n\n\
                 {} at {}\nLocation: {}\nDeadline: {}\n\n{}\n\nApply now: {}",
                self.job.title,
                self.job.company,
                self.job.location,
                deadline,
                self.job.description,
                self.job.application_link
            ),
            NotifyKind::StatusChange => write!(
                f,
                "The status for {} at {} has been updated to: {}\n\n\
                 Deadline: {}\n\nApply now: {}",
                self.job.title,
                self.job.company,
                self.job.status,
                deadline,
                self.job.application_link
            ),
            NotifyKind::Updated => write!(
                f,
                "The job posting for {} at {} has been updated.\n\n\
                 Check out the latest details and apply: {}",
                self.job.title, self.job.company, self.job.application_link
            ),
        }
    }
}

#[async_trait::async_trait]
impl<'a> SendEmail for JobAlertTemplate<'a> {
    async fn send(&self, email: &str) -> Result<()> {
        send_email(email, &self.subject(), &format!("{}", &self)).await
    }
}
