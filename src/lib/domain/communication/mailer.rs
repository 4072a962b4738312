//! Mailer seam between message composition and SMTP delivery.

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub mod errors;
pub mod message;

use errors::MailerError;
use message::OutboundMessage;

/// Delivers composed messages.
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an outbound message.
    ///
    /// # Arguments
    /// * `message` - The [`OutboundMessage`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure. Implementations report
    /// failure only once every transport they manage has been exhausted.
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &OutboundMessage) -> Result<(), MailerError>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::MockMailer;
}
