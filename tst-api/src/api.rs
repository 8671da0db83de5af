//! Trait describing the two vendor calls a check-in needs.
//!
//! [`crate::client::TastienClient`] is the HTTP implementation; tests swap
//! in canned implementations to run the check-in flow offline.

use crate::error::ApiError;
use crate::types::ActivityId;

/// The vendor operations used by a daily check-in.
///
/// All implementations must be `Send + Sync`.
pub trait CheckinApi: Send + Sync {
    /// Discover the current campaign id for `token`.
    ///
    /// Returns `None` when the listing could not be fetched or parsed, or no
    /// check-in banner with a usable id was found. Never fails.
    fn resolve_activity_id(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Option<ActivityId>> + Send;

    /// Submit the check-in and return the raw response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::HttpStatus`] if no 200 response arrived within the
    ///   retry budget.
    /// - Any other variant if the response arrived but could not be read.
    fn sign(
        &self,
        token: &str,
        activity_id: &ActivityId,
    ) -> impl std::future::Future<Output = Result<String, ApiError>> + Send;
}
