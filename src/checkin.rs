//! Single-account check-in: resolve the campaign, sign, classify, report.

use crate::account::mask_token;
use crate::notify::NotificationAggregator;
use chrono::{DateTime, Local};
use tst_api::{ApiError, CheckinApi, fallback_activity_id, interpret_sign_response};

/// Timestamp format used in notification bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fallback reason when the server gives none.
pub const UNKNOWN_REASON: &str = "未知错误";

/// Terminal state of one account's check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
    /// The server granted a reward.
    Success { reward: String },
    /// The server answered but its `code` was not 200.
    BusinessFailure {
        code: String,
        message: Option<String>,
        raw_body: String,
    },
    /// No 200 response within the retry budget.
    RequestFailed,
    /// A response arrived but could not be read or understood.
    ParseException { detail: String },
}

/// Result of one account's check-in, ready for reporting.
#[derive(Debug, Clone)]
pub struct CheckinReport {
    pub masked_token: String,
    pub outcome: CheckinOutcome,
    pub attempted_at: DateTime<Local>,
}

impl CheckinReport {
    pub fn success(&self) -> bool {
        matches!(self.outcome, CheckinOutcome::Success { .. })
    }

    /// Short human-readable result line.
    pub fn message(&self) -> String {
        match &self.outcome {
            CheckinOutcome::Success { reward } => format!("签到成功，获得: {reward}"),
            CheckinOutcome::BusinessFailure {
                message, raw_body, ..
            } => message
                .clone()
                .unwrap_or_else(|| format!("签到失败: {raw_body}")),
            CheckinOutcome::RequestFailed => "请求失败".to_owned(),
            CheckinOutcome::ParseException { detail } => format!("解析签到响应异常: {detail}"),
        }
    }

    /// Title of the notification entry for this outcome.
    pub fn title(&self) -> &'static str {
        match self.outcome {
            CheckinOutcome::Success { .. } => "签到成功",
            CheckinOutcome::BusinessFailure { .. } => "签到失败",
            CheckinOutcome::RequestFailed => "签到请求失败",
            CheckinOutcome::ParseException { .. } => "签到异常",
        }
    }

    /// Body of the notification entry: account, detail line, time.
    pub fn body(&self) -> String {
        let mut lines = vec![format!("账号: {}", self.masked_token)];
        match &self.outcome {
            CheckinOutcome::Success { reward } => lines.push(format!("结果: 获得 {reward}")),
            CheckinOutcome::BusinessFailure { message, .. } => lines.push(format!(
                "原因: {}",
                message.as_deref().unwrap_or(UNKNOWN_REASON)
            )),
            CheckinOutcome::RequestFailed => {}
            CheckinOutcome::ParseException { detail } => lines.push(format!("错误: {detail}")),
        }
        lines.push(format!("时间: {}", self.attempted_at.format(TIMESTAMP_FORMAT)));
        lines.join("\n")
    }
}

/// Check in one account and record exactly one notification entry.
///
/// Falls back to the calendar-derived campaign id when discovery yields
/// nothing. Never fails: every problem becomes a non-success outcome.
pub async fn checkin<A: CheckinApi>(
    api: &A,
    token: &str,
    notifications: &mut NotificationAggregator,
) -> CheckinReport {
    let activity_id = match api.resolve_activity_id(token).await {
        Some(id) => id,
        None => {
            let id = fallback_activity_id(&Local::now());
            tracing::info!(activity_id = %id, "using computed activity id");
            id
        }
    };

    let outcome = match api.sign(token, &activity_id).await {
        Err(ApiError::HttpStatus(detail)) => {
            tracing::error!(%detail, "check-in request failed");
            CheckinOutcome::RequestFailed
        }
        Err(err) => CheckinOutcome::ParseException {
            detail: err.to_string(),
        },
        Ok(body) => classify(body),
    };

    let report = CheckinReport {
        masked_token: mask_token(token),
        outcome,
        attempted_at: Local::now(),
    };
    notifications.record(report.title(), &report.body());
    report
}

fn classify(body: String) -> CheckinOutcome {
    match interpret_sign_response(&body) {
        Ok(reward) => CheckinOutcome::Success { reward },
        Err(ApiError::Business { code, message }) => {
            tracing::warn!(
                %code,
                reason = message.as_deref().unwrap_or(UNKNOWN_REASON),
                "check-in rejected by server"
            );
            CheckinOutcome::BusinessFailure {
                code,
                message,
                raw_body: body,
            }
        }
        Err(err) => CheckinOutcome::ParseException {
            detail: err.to_string(),
        },
    }
}
