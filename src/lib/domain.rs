//! Domain layer

pub mod communication;
pub mod onboarding;
pub mod plans;
