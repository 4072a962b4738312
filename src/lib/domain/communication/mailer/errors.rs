//! Mailer errors

use std::fmt;

use thiserror::Error;

/// Connection-security mode of one transport attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// TLS from connection start
    ImplicitTls,

    /// Plaintext connection upgraded via STARTTLS
    StartTls,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImplicitTls => write!(f, "implicit TLS"),
            Self::StartTls => write!(f, "STARTTLS"),
        }
    }
}

/// One failed delivery attempt, with its captured cause.
#[derive(Debug)]
pub struct FailedAttempt {
    /// The transport mode that was tried
    pub mode: TransportMode,

    /// What went wrong: connection, TLS, authentication or protocol
    pub cause: anyhow::Error,
}

impl fmt::Display for FailedAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.mode, self.cause)
    }
}

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The message could not be assembled
    #[error("could not assemble the message")]
    InvalidMessage(#[from] lettre::error::Error),

    /// A mailbox address could not be parsed
    #[error("invalid mailbox address")]
    InvalidMailbox(#[from] lettre::address::AddressError),

    /// Every transport attempt failed; carries each cause in attempt order
    #[error("delivery failed on every transport ({})", summarize_attempts(.0))]
    TransportsExhausted(Vec<FailedAttempt>),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

fn summarize_attempts(attempts: &[FailedAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_exhausted_error_names_both_causes_in_order() {
        let error = MailerError::TransportsExhausted(vec![
            FailedAttempt {
                mode: TransportMode::ImplicitTls,
                cause: anyhow!("connection refused"),
            },
            FailedAttempt {
                mode: TransportMode::StartTls,
                cause: anyhow!("authentication failed"),
            },
        ]);

        let message = error.to_string();
        let implicit = message.find("implicit TLS: connection refused");
        let starttls = message.find("STARTTLS: authentication failed");

        assert!(implicit.is_some());
        assert!(starttls.is_some());
        assert!(implicit < starttls);
    }
}
