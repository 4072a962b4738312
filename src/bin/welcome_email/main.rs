#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! One-shot sender for the CubeAI welcome email.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cubeai_ops::{
    domain::{
        communication::{
            email_address::EmailAddress,
            senders::{SenderConfig, SenderIdentityName},
        },
        onboarding::{
            members::Member,
            service::{OnboardingService, WelcomeEmailRequest},
        },
    },
    infrastructure::email::smtp::SmtpMailer,
};
use tracing::warn;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(about = "Send the CubeAI welcome email with login details and plan benefits")]
pub struct Args {
    /// Recipient email address
    #[clap(long)]
    pub to: EmailAddress,

    /// Recipient display name
    #[clap(long)]
    pub to_name: String,

    /// Username of the new CubeAI account
    #[clap(long)]
    pub account_username: String,

    /// Password of the new CubeAI account
    #[clap(long)]
    pub account_password: String,

    /// Subscription plan (STARTER, PRO or PREMIUM; anything else falls back
    /// to STARTER)
    #[clap(long)]
    pub plan: String,

    /// JSON array of member records (firstName, lastName,
    /// sessionId/username, password, userType)
    #[clap(long)]
    pub members_json: Option<String>,

    /// Registration identifier to include in the email
    #[clap(long)]
    pub registration_id: Option<String>,

    /// Sender identity to use
    #[clap(long, value_enum, default_value_t = SenderIdentityName::Hello)]
    pub email_type: SenderIdentityName,

    /// Application base URL used for the login link
    #[clap(long, env = "APP_BASE_URL", default_value = "https://cube-ai.fr")]
    pub app_base_url: String,

    /// The sender identity configuration
    #[clap(flatten)]
    pub senders: SenderConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Configuration mistakes must surface before any content is built or
    // connection opened.
    let sender = args.senders.resolve(args.email_type)?;

    let members = match args.members_json.as_deref() {
        Some(raw) => Member::parse_list(raw).unwrap_or_else(|| {
            warn!("could not decode the member list, sending without members");

            Vec::new()
        }),
        None => Vec::new(),
    };

    let service = OnboardingService::new(Arc::new(SmtpMailer::new(sender.clone())), sender);

    let request = WelcomeEmailRequest {
        to: args.to,
        to_name: args.to_name,
        account_username: args.account_username,
        account_password: args.account_password,
        plan: args.plan,
        base_url: args.app_base_url,
        members,
        registration_id: args.registration_id,
    };

    service.send_welcome_email(&request).await?;

    println!("Welcome email sent to {}", request.to);

    Ok(())
}
