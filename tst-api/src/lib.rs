//! # tst-api
//!
//! Client for the Tastien loyalty-program check-in API.
//!
//! ## Design
//!
//! - Every request goes through [`http::RetryingExecutor`]: up to three
//!   attempts, 2s then 4s backoff, any non-200 status counts as a failure
//! - The monthly campaign id is discovered from the banner listing, with a
//!   calendar-based fallback in [`activity::fallback_activity_id`]
//! - Response bodies are interpreted into a reward description or a typed
//!   [`ApiError`]
//! - [`CheckinApi`] is the seam callers stub to run offline
//!
//! ## Security
//!
//! - Account tokens are only sent as the `user-token` header
//! - Tokens never appear in log lines or error messages

pub mod activity;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod signin;
pub mod types;

pub use activity::{fallback_activity_id, find_activity_id};
pub use api::CheckinApi;
pub use client::TastienClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use signin::interpret_sign_response;
pub use types::ActivityId;
