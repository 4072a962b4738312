//! Account onboarding: welcome-email composition and dispatch.

pub mod errors;
pub mod members;
pub mod service;
pub mod welcome_email;
