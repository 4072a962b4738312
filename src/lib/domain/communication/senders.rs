//! Logical sender identities and their SMTP configuration.
//!
//! Outbound mail goes through one of three personas: `hello` for general
//! communication, `support` for assistance, `noreply` for automated mail.
//! Each maps to its own mailbox and SMTP credentials, resolved from the
//! environment before any content is built or network I/O attempted.

use std::{fmt, str::FromStr};

use clap::{Parser, ValueEnum};

pub mod errors;

use errors::ConfigurationError;

/// Name of a logical sender identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SenderIdentityName {
    /// General communication (`hello@`)
    Hello,

    /// Assistance (`support@`)
    Support,

    /// Automated mail (`noreply@`)
    Noreply,
}

impl fmt::Display for SenderIdentityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hello => write!(f, "hello"),
            Self::Support => write!(f, "support"),
            Self::Noreply => write!(f, "noreply"),
        }
    }
}

impl FromStr for SenderIdentityName {
    type Err = ConfigurationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "support" => Ok(Self::Support),
            "noreply" => Ok(Self::Noreply),
            _ => Err(ConfigurationError::UnknownIdentity {
                given: raw.to_string(),
            }),
        }
    }
}

/// A fully resolved sender identity, ready to open an SMTP session.
#[derive(Debug, Clone)]
pub struct SenderIdentity {
    /// Identity name
    pub name: SenderIdentityName,

    /// Mailbox address mail is sent from
    pub mailbox: String,

    /// Display name shown in the `From` header
    pub display_name: String,

    /// SMTP host
    pub smtp_host: String,

    /// SMTP port for the implicit-TLS connection
    pub smtp_port: u16,

    /// SMTP password
    pub password: String,
}

/// Per-identity SMTP configuration, sourced from the environment.
///
/// Passwords are optional at parse time; [`SenderConfig::resolve`] enforces
/// presence for the identity actually selected.
#[derive(Debug, Clone, Parser)]
pub struct SenderConfig {
    /// Mailbox for the `hello` identity
    #[clap(long, env = "HELLO_EMAIL_USER", default_value = "hello@cube-ai.fr")]
    pub hello_user: String,

    /// SMTP password for the `hello` identity
    #[clap(long, env = "HELLO_EMAIL_PASSWORD", hide_env_values = true)]
    pub hello_password: Option<String>,

    /// SMTP host for the `hello` identity
    #[clap(long, env = "HELLO_SMTP_SERVER", default_value = "smtp.ionos.fr")]
    pub hello_smtp_server: String,

    /// SMTP port for the `hello` identity
    #[clap(long, env = "HELLO_SMTP_PORT", default_value = "465")]
    pub hello_smtp_port: u16,

    /// Mailbox for the `support` identity
    #[clap(long, env = "SUPPORT_EMAIL_USER", default_value = "support@cube-ai.fr")]
    pub support_user: String,

    /// SMTP password for the `support` identity
    #[clap(long, env = "SUPPORT_EMAIL_PASSWORD", hide_env_values = true)]
    pub support_password: Option<String>,

    /// SMTP host for the `support` identity
    #[clap(long, env = "SUPPORT_SMTP_SERVER", default_value = "smtp.ionos.fr")]
    pub support_smtp_server: String,

    /// SMTP port for the `support` identity
    #[clap(long, env = "SUPPORT_SMTP_PORT", default_value = "465")]
    pub support_smtp_port: u16,

    /// Mailbox for the `noreply` identity
    #[clap(long, env = "NOREPLY_EMAIL_USER", default_value = "noreply@cube-ai.fr")]
    pub noreply_user: String,

    /// SMTP password for the `noreply` identity
    #[clap(long, env = "NOREPLY_EMAIL_PASSWORD", hide_env_values = true)]
    pub noreply_password: Option<String>,

    /// SMTP host for the `noreply` identity
    #[clap(long, env = "NOREPLY_SMTP_SERVER", default_value = "smtp.ionos.fr")]
    pub noreply_smtp_server: String,

    /// SMTP port for the `noreply` identity
    #[clap(long, env = "NOREPLY_SMTP_PORT", default_value = "465")]
    pub noreply_smtp_port: u16,
}

impl SenderConfig {
    /// Resolves the configuration for a logical sender identity.
    ///
    /// The password check happens here, eagerly, so configuration mistakes
    /// surface before any message is composed or connection opened.
    pub fn resolve(
        &self,
        name: SenderIdentityName,
    ) -> Result<SenderIdentity, ConfigurationError> {
        let (user, password, host, port, display_name, password_var) = match name {
            SenderIdentityName::Hello => (
                &self.hello_user,
                &self.hello_password,
                &self.hello_smtp_server,
                self.hello_smtp_port,
                "CubeAI - Équipe",
                "HELLO_EMAIL_PASSWORD",
            ),
            SenderIdentityName::Support => (
                &self.support_user,
                &self.support_password,
                &self.support_smtp_server,
                self.support_smtp_port,
                "CubeAI - Support",
                "SUPPORT_EMAIL_PASSWORD",
            ),
            SenderIdentityName::Noreply => (
                &self.noreply_user,
                &self.noreply_password,
                &self.noreply_smtp_server,
                self.noreply_smtp_port,
                "CubeAI",
                "NOREPLY_EMAIL_PASSWORD",
            ),
        };

        let password = password
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigurationError::MissingSecret {
                identity: name,
                variable: password_var,
            })?;

        Ok(SenderIdentity {
            name,
            mailbox: user.clone(),
            display_name: display_name.to_string(),
            smtp_host: host.clone(),
            smtp_port: port,
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config_with_hello_password(password: Option<&str>) -> SenderConfig {
        SenderConfig {
            hello_user: "hello@cube-ai.fr".to_string(),
            hello_password: password.map(String::from),
            hello_smtp_server: "smtp.ionos.fr".to_string(),
            hello_smtp_port: 465,
            support_user: "support@cube-ai.fr".to_string(),
            support_password: None,
            support_smtp_server: "smtp.ionos.fr".to_string(),
            support_smtp_port: 465,
            noreply_user: "noreply@cube-ai.fr".to_string(),
            noreply_password: None,
            noreply_smtp_server: "smtp.ionos.fr".to_string(),
            noreply_smtp_port: 465,
        }
    }

    #[test]
    fn test_resolve_returns_populated_identity() -> TestResult {
        let config = config_with_hello_password(Some("secret"));

        let identity = config.resolve(SenderIdentityName::Hello)?;

        assert_eq!("hello@cube-ai.fr", identity.mailbox);
        assert_eq!("CubeAI - Équipe", identity.display_name);
        assert_eq!("smtp.ionos.fr", identity.smtp_host);
        assert_eq!(465, identity.smtp_port);
        assert_eq!("secret", identity.password);

        Ok(())
    }

    #[test]
    fn test_resolve_fails_when_secret_is_unset() {
        let config = config_with_hello_password(Some("secret"));

        let result = config.resolve(SenderIdentityName::Support);

        assert!(matches!(
            result.unwrap_err(),
            ConfigurationError::MissingSecret {
                identity: SenderIdentityName::Support,
                variable: "SUPPORT_EMAIL_PASSWORD",
            }
        ));
    }

    #[test]
    fn test_resolve_fails_when_secret_is_empty() {
        let config = config_with_hello_password(Some(""));

        let result = config.resolve(SenderIdentityName::Hello);

        assert!(matches!(
            result.unwrap_err(),
            ConfigurationError::MissingSecret { .. }
        ));
    }

    #[test]
    fn test_identity_name_parses_case_insensitively() -> TestResult {
        assert_eq!(SenderIdentityName::Hello, "Hello".parse()?);
        assert_eq!(SenderIdentityName::Noreply, "NOREPLY".parse()?);

        Ok(())
    }

    #[test]
    fn test_unknown_identity_name_lists_valid_ones() {
        let err = "marketing".parse::<SenderIdentityName>().unwrap_err();

        let message = err.to_string();
        assert!(message.contains("marketing"));
        assert!(message.contains("hello"));
        assert!(message.contains("support"));
        assert!(message.contains("noreply"));
    }
}
