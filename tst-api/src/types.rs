//! Wire types for the vendor API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the currently running check-in campaign.
///
/// The banner endpoint hands it out either as a number or as a numeric
/// string; whichever form arrives is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityId {
    /// Integer form.
    Number(i64),
    /// String form, e.g. `"62"`.
    Text(String),
}

impl ActivityId {
    /// Whether the id can be sent to the check-in endpoint.
    ///
    /// Zero and blank strings are treated as missing.
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0,
            Self::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl From<i64> for ActivityId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Body of the banner/campaign listing request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerListRequest {
    pub shop_id: String,
    pub birthday: String,
    pub gender: u8,
    pub nick_name: Option<String>,
    pub phone: String,
}

/// Response of the banner/campaign listing endpoint.
///
/// Entries stay raw so that one odd banner cannot spoil the whole listing;
/// only the matched entry is decoded into a [`BannerEntry`].
#[derive(Debug, Clone, Deserialize)]
pub struct BannerListResponse {
    pub result: Vec<serde_json::Value>,
}

/// One campaign banner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerEntry {
    /// Display name shown in the app.
    #[serde(default)]
    pub banner_name: Option<String>,
    /// JSON-encoded string with the campaign parameters.
    #[serde(default)]
    pub jump_para: Option<String>,
}

/// Decoded contents of [`BannerEntry::jump_para`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpPara {
    #[serde(default)]
    pub activity_id: Option<ActivityId>,
}

/// Body of the check-in request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest<'a> {
    pub activity_id: &'a ActivityId,
    pub member_name: &'a str,
    pub member_phone: &'a str,
}

impl<'a> SignRequest<'a> {
    /// Request for `activity_id` with the blank member fields the app sends.
    pub fn new(activity_id: &'a ActivityId) -> Self {
        Self {
            activity_id,
            member_name: "",
            member_phone: "",
        }
    }
}

/// `result` object of a successful check-in response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResult {
    pub reward_info_list: Vec<RewardInfo>,
}

/// One granted reward.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardInfo {
    #[serde(default)]
    pub reward_name: Option<String>,
    /// Points granted; a number or a numeric string.
    #[serde(default)]
    pub point: Option<serde_json::Value>,
}
