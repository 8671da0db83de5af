//! Batch orchestration: run every configured account, then notify once.
//!
//! Accounts are processed strictly one after another in input order. A
//! panic while handling one account is caught and logged so the remaining
//! accounts still run.

use crate::account::{account_token, mask_token, parse_accounts};
use crate::checkin::checkin;
use crate::notify::{NotificationAggregator, NotificationSink};
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tst_api::CheckinApi;

/// Title of the entry recorded when no account is configured.
pub const CONFIG_ERROR_TITLE: &str = "配置错误";

/// Body of the entry recorded when no account is configured.
pub const CONFIG_ERROR_BODY: &str = "未找到有效账号配置，请检查环境变量tst_tk_env";

/// What happened to one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountResult {
    pub masked_token: String,
    pub success: bool,
    pub message: String,
}

/// Summary of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One result per processed account, in input order.
    pub accounts: Vec<AccountResult>,
    /// The batched notification text, if anything was recorded.
    pub notification: Option<String>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.accounts.iter().filter(|a| a.success).count()
    }
}

/// Run the check-in for every account listed in `raw_accounts`.
///
/// An empty list records a single configuration-error entry and returns
/// without any network traffic: no vendor calls and no delivery to `sink`.
/// Otherwise the collected entries are flushed to `sink` exactly once.
pub async fn run_batch<A: CheckinApi>(
    raw_accounts: &str,
    api: &A,
    sink: &dyn NotificationSink,
    notify_title: &str,
) -> RunReport {
    let mut notifications = NotificationAggregator::new();
    let mut accounts = Vec::new();

    let lines = parse_accounts(raw_accounts);
    if lines.is_empty() {
        tracing::error!("no valid account configuration found");
        notifications.record(CONFIG_ERROR_TITLE, CONFIG_ERROR_BODY);
        return RunReport {
            accounts,
            notification: notifications.render(),
        };
    }
    tracing::info!(count = lines.len(), "starting check-in run");

    for line in lines {
        let token = account_token(line);
        let masked = mask_token(token);
        tracing::info!(account = %masked, "processing account");

        let attempt = AssertUnwindSafe(checkin(api, token, &mut notifications))
            .catch_unwind()
            .await;

        match attempt {
            Ok(report) => {
                let message = report.message();
                tracing::info!(account = %masked, %message, "check-in finished");
                accounts.push(AccountResult {
                    masked_token: masked,
                    success: report.success(),
                    message,
                });
            }
            Err(panic) => {
                let detail = panic_detail(panic.as_ref());
                tracing::error!(account = %masked, error = %detail, "account processing failed");
                accounts.push(AccountResult {
                    masked_token: masked,
                    success: false,
                    message: format!("处理账号异常: {detail}"),
                });
            }
        }
    }

    notifications.flush(sink, notify_title).await;
    let report = RunReport {
        accounts,
        notification: notifications.render(),
    };
    tracing::info!(
        processed = report.accounts.len(),
        succeeded = report.succeeded(),
        "check-in run finished"
    );
    report
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}
