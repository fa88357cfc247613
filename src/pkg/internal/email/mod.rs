use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use standard_error::{Interpolate, StandardError};

pub mod jobalert;
pub mod welcome;

use crate::{conf::settings, prelude::Result};

#[async_trait::async_trait]
pub trait SendEmail {
    async fn send(&self, email: &str) -> Result<()>;
}

// Awaited end to end: subscription is gated on the outcome and the
// dispatcher sends strictly one at a time.
pub async fn send_email(email: &str, subject: &str, body: &str) -> Result<()> {
    let (name, _) = email.split_once('@').unwrap_or(("unknown", ""));
    let name = name.to_string();
    let email = email.to_string();
    let subject = subject.to_string();
    let body = body.to_string();
    tracing::debug!("sending email to {}", &email);
    tokio::task::spawn_blocking(move || -> Result<()> {
        let message = Message::builder()
            .from(
                format!("{} <{}>", &settings.service_name, &settings.from_email)
                    .parse()
                    .map_err(|e: lettre::address::AddressError| {
                        StandardError::new("ERR-MAIL-001").interpolate_err(e.to_string())
                    })?,
            )
            .to(format!("{} <{}>", &name, &email).parse().map_err(
                |e: lettre::address::AddressError| {
                    StandardError::new("ERR-MAIL-001").interpolate_err(e.to_string())
                },
            )?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| StandardError::new("ERR-MAIL-002").interpolate_err(e.to_string()))?;

        let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());

        let mailer = SmtpTransport::relay(&settings.smtp_server)
            .map_err(|e| StandardError::new("ERR-MAIL-003").interpolate_err(e.to_string()))?
            .port(settings.smtp_port)
            .credentials(creds)
            .build();

        mailer
            .send(&message)
            .map_err(|e| StandardError::new("ERR-MAIL-004").interpolate_err(e.to_string()))?;
        Ok(())
    })
    .await
    .map_err(|e| StandardError::new("ERR-MAIL-005").interpolate_err(e.to_string()))?
}
