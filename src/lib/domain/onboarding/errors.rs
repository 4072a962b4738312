//! Onboarding errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::errors::MailerError;

/// Errors that can occur when sending a welcome email.
#[derive(Debug, Error)]
pub enum WelcomeEmailError {
    /// Delivery failed after every transport was tried
    #[error("could not send the welcome email")]
    CouldNotSend(#[source] MailerError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<MailerError> for WelcomeEmailError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> WelcomeEmailError");

        WelcomeEmailError::CouldNotSend(err)
    }
}
