//! SMTP delivery of verification emails using lettre.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use ottb_core::errors::{AuthError, DomainError};
use ottb_core::services::mailer::{Mailer, VerificationEmail};
use ottb_shared::SmtpConfig;

use crate::InfrastructureError;

/// Mailer backed by an SMTP relay (STARTTLS on the submission port)
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Create a mailer from SMTP configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Email(format!("Invalid SMTP relay: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .timeout(Some(Duration::from_secs(config.send_timeout)))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &VerificationEmail) -> Result<(), DomainError> {
        let message = Message::builder()
            .from(self.from.parse().map_err(|_| {
                DomainError::Internal {
                    message: format!("Invalid sender address: {}", self.from),
                }
            })?)
            .to(email
                .to
                .parse()
                .map_err(|_| DomainError::from(AuthError::EmailDeliveryFailed))?)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| {
                error!("failed to build email message: {}", e);
                DomainError::from(AuthError::EmailDeliveryFailed)
            })?;

        match self.transport.send(message).await {
            Ok(_) => {
                info!(to = %email.to, "verification email sent");
                Ok(())
            }
            Err(e) => {
                error!(to = %email.to, "failed to send email: {}", e);
                Err(AuthError::EmailDeliveryFailed.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            user: "mailer".to_string(),
            pass: "secret".to_string(),
            from: "OTTB <noreply@example.com>".to_string(),
            send_timeout: 10,
        }
    }

    #[tokio::test]
    async fn test_mailer_builds_from_config() {
        assert!(SmtpMailer::new(&config()).is_ok());
    }

    #[tokio::test]
    async fn test_bad_recipient_is_delivery_failure() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let email = VerificationEmail {
            to: "not an address".to_string(),
            subject: "s".to_string(),
            html_body: "<p>b</p>".to_string(),
        };

        let err = mailer.send(&email).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailDeliveryFailed)
        ));
    }
}
