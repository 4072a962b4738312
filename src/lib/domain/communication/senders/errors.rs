//! Sender configuration errors

use thiserror::Error;

use super::SenderIdentityName;

/// Errors raised while resolving a sender identity.
///
/// These abort the operation before any network attempt.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The requested identity does not exist
    #[error("unknown sender identity `{given}`, valid identities: hello, support, noreply")]
    UnknownIdentity {
        /// The name that failed to resolve
        given: String,
    },

    /// The identity exists but its SMTP password is unset
    #[error("missing SMTP password for the `{identity}` identity, set {variable}")]
    MissingSecret {
        /// The identity missing its secret
        identity: SenderIdentityName,
        /// The environment variable to set
        variable: &'static str,
    },
}
