#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Back-office operational utilities for the CubeAI platform: the
//! welcome-email composer/sender and the daily-reports API client.

pub mod domain;
pub mod infrastructure;
