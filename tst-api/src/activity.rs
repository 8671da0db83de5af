//! Discovery of the current check-in campaign id.
//!
//! The campaign id changes every month. It is normally read from the
//! banner listing; when that fails it is derived from the calendar.

use crate::error::ApiError;
use crate::types::{ActivityId, BannerEntry, BannerListResponse, JumpPara};
use chrono::Datelike;

/// Substrings identifying the check-in banner, checked in this order.
pub const CHECKIN_BANNER_MARKERS: &[&str] = &["每日签到", "签到"];

/// Campaign id in effect during [`ANCHOR_YEAR`]-[`ANCHOR_MONTH`].
pub const ANCHOR_ACTIVITY_ID: i64 = 59;
/// Year of the anchor campaign.
pub const ANCHOR_YEAR: i32 = 2025;
/// Month (1-based) of the anchor campaign.
pub const ANCHOR_MONTH: u32 = 5;

/// Extract the campaign id from a banner listing body.
///
/// Scans entries in order and stops at the first one whose name contains a
/// check-in marker. Entries after the match, and entries without a string
/// `bannerName`, are never inspected further. Returns `Ok(None)` when nothing
/// matches or the matched entry carries no usable id.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body or the matched entry's
/// `jumpPara` is not the expected JSON.
pub fn find_activity_id(body: &str) -> Result<Option<ActivityId>, ApiError> {
    let listing: BannerListResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(format!("banner list: {e}")))?;

    let Some(matched) = listing.result.into_iter().find(|entry| {
        entry
            .get("bannerName")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|name| CHECKIN_BANNER_MARKERS.iter().any(|m| name.contains(m)))
    }) else {
        return Ok(None);
    };
    let entry: BannerEntry = serde_json::from_value(matched)
        .map_err(|e| ApiError::Parse(format!("banner entry: {e}")))?;

    let Some(raw) = entry.jump_para.as_deref() else {
        return Ok(None);
    };
    let jump: JumpPara =
        serde_json::from_str(raw).map_err(|e| ApiError::Parse(format!("jumpPara: {e}")))?;

    Ok(jump.activity_id.filter(ActivityId::is_usable))
}

/// Campaign id derived from the calendar month of `date`.
///
/// Counts months from the anchor; months before it give smaller ids and
/// the result is not clamped.
pub fn fallback_activity_id(date: &impl Datelike) -> ActivityId {
    let years = i64::from(date.year() - ANCHOR_YEAR);
    let months = i64::from(date.month()) - i64::from(ANCHOR_MONTH);
    ActivityId::Number(ANCHOR_ACTIVITY_ID + years * 12 + months)
}
