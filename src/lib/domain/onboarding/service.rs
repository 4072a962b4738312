//! Welcome email service

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    communication::{
        email_address::EmailAddress,
        mailer::{message::OutboundMessage, Mailer},
        senders::SenderIdentity,
    },
    onboarding::{errors::WelcomeEmailError, members::Member, welcome_email::WelcomeEmail},
};

/// Everything needed to compose one welcome email.
#[derive(Debug)]
pub struct WelcomeEmailRequest {
    /// Recipient address
    pub to: EmailAddress,

    /// Recipient display name
    pub to_name: String,

    /// Username of the new account
    pub account_username: String,

    /// Password of the new account
    pub account_password: String,

    /// Subscription plan identifier
    pub plan: String,

    /// Application base URL for the login link
    pub base_url: String,

    /// Household member credentials, in the order they should appear
    pub members: Vec<Member>,

    /// Registration identifier, when one should be shown
    pub registration_id: Option<String>,
}

/// Composes welcome emails and hands them to a [`Mailer`].
#[derive(Debug, Clone)]
pub struct OnboardingService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    sender: SenderIdentity,
}

impl<M> OnboardingService<M>
where
    M: Mailer,
{
    /// Creates a new onboarding service sending as the given identity.
    ///
    /// The identity is expected to be resolved already; misconfiguration
    /// surfaces at resolution time, not here.
    pub fn new(mailer: Arc<M>, sender: SenderIdentity) -> Self {
        Self { mailer, sender }
    }

    /// Composes and sends the welcome email for a new account.
    ///
    /// Renders both body variants, assembles the message and performs a
    /// single synchronous delivery through the mailer. Exactly one
    /// transmission happens on success.
    pub async fn send_welcome_email(
        &self,
        request: &WelcomeEmailRequest,
    ) -> Result<(), WelcomeEmailError> {
        let email = WelcomeEmail::new(
            &request.to_name,
            &request.account_username,
            &request.account_password,
            &request.plan,
            &request.base_url,
            request.members.clone(),
            request.registration_id.clone(),
        );

        let message = OutboundMessage {
            from_name: self.sender.display_name.clone(),
            from_mailbox: self.sender.mailbox.clone(),
            to: request.to.clone(),
            to_name: request.to_name.clone(),
            subject: WelcomeEmail::SUBJECT.to_string(),
            plain_body: email.render_plain(),
            html_body: email.render_html(),
        };

        self.mailer.send(&message).await?;

        info!(
            "welcome email sent to {} from {}",
            request.to, self.sender.mailbox
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::{
        mailer::{
            errors::{FailedAttempt, MailerError, TransportMode},
            tests::MockMailer,
        },
        senders::SenderIdentityName,
    };

    use super::*;

    fn sender() -> SenderIdentity {
        SenderIdentity {
            name: SenderIdentityName::Hello,
            mailbox: "hello@cube-ai.fr".to_string(),
            display_name: "CubeAI - Équipe".to_string(),
            smtp_host: "smtp.ionos.fr".to_string(),
            smtp_port: 465,
            password: "secret".to_string(),
        }
    }

    fn request() -> WelcomeEmailRequest {
        WelcomeEmailRequest {
            to: EmailAddress::new_unchecked("parent@example.com"),
            to_name: "Jean Dupont".to_string(),
            account_username: "jean.dupont".to_string(),
            account_password: "TempPass123".to_string(),
            plan: "PREMIUM".to_string(),
            base_url: "https://cube-ai.fr".to_string(),
            members: vec![],
            registration_id: None,
        }
    }

    #[tokio::test]
    async fn test_send_welcome_email_builds_both_bodies() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|message| {
                message.subject == WelcomeEmail::SUBJECT
                    && message.from_mailbox == "hello@cube-ai.fr"
                    && message.plain_body.contains("TempPass123")
                    && message.html_body.contains("TempPass123")
                    && message.html_body.contains("<!doctype html>")
            })
            .returning(|_| Ok(()));

        let service = OnboardingService::new(Arc::new(mailer), sender());

        service.send_welcome_email(&request()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_welcome_email_surfaces_delivery_failure() {
        let mut mailer = MockMailer::new();

        mailer.expect_send().times(1).returning(|_| {
            Err(MailerError::TransportsExhausted(vec![FailedAttempt {
                mode: TransportMode::ImplicitTls,
                cause: anyhow::anyhow!("connection refused"),
            }]))
        });

        let service = OnboardingService::new(Arc::new(mailer), sender());

        let result = service.send_welcome_email(&request()).await;

        assert!(matches!(
            result.unwrap_err(),
            WelcomeEmailError::CouldNotSend(_)
        ));
    }
}
