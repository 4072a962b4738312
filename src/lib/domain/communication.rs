//! Outbound communication: addresses, sender identities and the mailer seam.

pub mod email_address;
pub mod mailer;
pub mod senders;
