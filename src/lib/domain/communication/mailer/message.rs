//! Outbound message

use crate::domain::communication::email_address::EmailAddress;

/// A composed message ready for delivery.
///
/// Both body variants are always present; mail clients negotiate which one
/// to display. Constructed once per send and immutable afterwards.
#[derive(Debug)]
pub struct OutboundMessage {
    /// Display name shown in the `From` header
    pub from_name: String,

    /// Mailbox the message is sent from
    pub from_mailbox: String,

    /// The recipient of the message
    pub to: EmailAddress,

    /// The recipient's display name
    pub to_name: String,

    /// The subject of the message
    pub subject: String,

    /// The plain text body
    pub plain_body: String,

    /// The HTML body
    pub html_body: String,
}
