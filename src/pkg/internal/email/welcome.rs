use std::fmt::{self, Display};

use super::{send_email, SendEmail};
use crate::prelude::Result;

pub struct WelcomeTemplate;

impl Display for WelcomeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Thank you for subscribing to PMory job alerts!\n\n\
             You'll now receive weekly updates about:\n\
             - New APM and RPM program openings\n\
             - Entry-level PM positions\n\
             - Application deadlines and tips\n\
             - Exclusive opportunities for Emory students\n\n\
             We're excited to help you on your PM journey!\n\n\
             Best regards,\n\
             The PMory Team\n\n\
             ---\n\
             To unsubscribe, simply reply to any of our emails with \"UNSUBSCRIBE\" in the subject line."
        )
    }
}

#[async_trait::async_trait]
impl SendEmail for WelcomeTemplate {
    async fn send(&self, email: &str) -> Result<()> {
        send_email(email, "Welcome to PMory Job Alerts!", &format!("{}", &self)).await
    }
}
