//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_text`] - Network fetching with timeout
//! - [`FetchError`] - Fetch failure categories
//! - [`dom`] - Browser API access and console logging

pub mod dom;
mod error;
mod fetch;

pub use error::FetchError;
pub use fetch::{fetch_json, fetch_text};
