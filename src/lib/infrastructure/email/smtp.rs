//! SMTP delivery engine with transport fallback.
//!
//! Delivery tries an implicit-TLS session on the identity's configured port
//! first, then falls back to a plaintext connection upgraded via STARTTLS on
//! port 587. The first success stops the sequence; exhaustion surfaces both
//! captured causes.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use tracing::{info, warn};

use crate::domain::communication::{
    mailer::{
        errors::{FailedAttempt, MailerError, TransportMode},
        message::OutboundMessage,
        Mailer,
    },
    senders::SenderIdentity,
};

/// Conventional port for the opportunistic-TLS fallback.
const STARTTLS_PORT: u16 = 587;

/// Bound on each transport attempt. The session would otherwise block on
/// the OS connection timeout.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP mailer bound to one resolved sender identity.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    identity: SenderIdentity,
}

impl SmtpMailer {
    /// Creates a mailer sending as `identity`.
    pub fn new(identity: SenderIdentity) -> Self {
        Self { identity }
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(
            self.identity.mailbox.clone(),
            self.identity.password.clone(),
        )
    }

    /// Primary transport: TLS from connection start on the configured port,
    /// full certificate validation.
    fn implicit_tls_transport(&self) -> Result<SmtpTransport, MailerError> {
        Ok(SmtpTransport::relay(&self.identity.smtp_host)
            .map_err(|e| MailerError::UnknownError(e.into()))?
            .port(self.identity.smtp_port)
            .credentials(self.credentials())
            .timeout(Some(ATTEMPT_TIMEOUT))
            .build())
    }

    /// Fallback transport: plaintext connection upgraded via STARTTLS.
    fn starttls_transport(&self) -> Result<SmtpTransport, MailerError> {
        Ok(SmtpTransport::starttls_relay(&self.identity.smtp_host)
            .map_err(|e| MailerError::UnknownError(e.into()))?
            .port(STARTTLS_PORT)
            .credentials(self.credentials())
            .timeout(Some(ATTEMPT_TIMEOUT))
            .build())
    }

    fn assemble(&self, message: &OutboundMessage) -> Result<Message, MailerError> {
        let from = Mailbox::new(
            Some(message.from_name.clone()),
            message.from_mailbox.parse()?,
        );
        let to = Mailbox::new(Some(message.to_name.clone()), message.to.as_str().parse()?);

        // Text first so clients without HTML support fall back to it.
        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.plain_body.clone(),
                message.html_body.clone(),
            ))?)
    }

    /// Tries each transport in order, stopping at the first success.
    ///
    /// Each session is opened and closed within its `send` call, on every
    /// exit path. Returns the mode that succeeded, or every captured
    /// failure once the list is exhausted.
    fn deliver<T>(
        transports: Vec<(TransportMode, T)>,
        email: &Message,
    ) -> Result<TransportMode, MailerError>
    where
        T: Transport,
        T::Error: std::error::Error + Send + Sync + 'static,
    {
        let mut attempts = Vec::new();

        for (mode, transport) in transports {
            match transport.send(email) {
                Ok(_) => return Ok(mode),
                Err(cause) => {
                    warn!("delivery over {mode} failed: {cause}");

                    attempts.push(FailedAttempt {
                        mode,
                        cause: anyhow::Error::new(cause),
                    });
                }
            }
        }

        Err(MailerError::TransportsExhausted(attempts))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        let email = self.assemble(message)?;

        let transports = vec![
            (TransportMode::ImplicitTls, self.implicit_tls_transport()?),
            (TransportMode::StartTls, self.starttls_transport()?),
        ];

        let mode = Self::deliver(transports, &email)?;

        info!("email to {} transmitted over {mode}", message.to);

        Ok(())
    }
}
