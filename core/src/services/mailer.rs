//! Outbound email abstraction.
//!
//! The core crate only knows how to compose the verification message;
//! actual delivery lives behind the `Mailer` trait so the SMTP client
//! stays in the infrastructure layer and tests can swap in a mock.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// A composed verification email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_body: String,
}

impl VerificationEmail {
    /// Composes the account verification message for a new signup
    pub fn for_signup(email: &str, server_origin: &str, user_id: Uuid) -> Self {
        let link = verification_link(server_origin, user_id);
        let html_body = format!(
            r#"
    <html>
    <head>
        <title>Verify Your OTTB Account</title>
    </head>
    <body>
        <p>Hello,</p>
        <p>Please click the following link to verify your OTTB account:</p>
        <p><a href="{link}">Verify Email</a></p>
        <p>If you didn't request this, please ignore this email.</p>
        <p>Thank you!</p>
    </body>
    </html>
    "#
        );

        Self {
            to: email.to_string(),
            subject: "Verify your OTTB account".to_string(),
            html_body,
        }
    }
}

/// Builds the clickable verification URL for an account
pub fn verification_link(server_origin: &str, user_id: Uuid) -> String {
    format!("{server_origin}/api/auth/verifyemail/{user_id}")
}

/// Trait for delivering composed emails
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers the message
    ///
    /// # Returns
    /// * `Ok(())` - Message accepted by the transport
    /// * `Err(DomainError::Auth(AuthError::EmailDeliveryFailed))` - Delivery failed
    async fn send(&self, email: &VerificationEmail) -> Result<(), DomainError>;
}

/// Mailer that records messages instead of delivering them.
///
/// Lives outside `#[cfg(test)]` so integration tests in other crates
/// can drive the full signup flow without an SMTP server.
#[derive(Default)]
pub struct MockMailer {
    sent: tokio::sync::RwLock<Vec<VerificationEmail>>,
    fail_next: std::sync::atomic::AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail
    pub fn simulate_failure(&self) {
        self.fail_next
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }

    /// Messages accepted so far
    pub async fn sent(&self) -> Vec<VerificationEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &VerificationEmail) -> Result<(), DomainError> {
        if self.fail_next.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(crate::errors::AuthError::EmailDeliveryFailed.into());
        }
        self.sent.write().await.push(email.clone());
        Ok(())
    }
}
