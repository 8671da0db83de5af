//! tst-checkin: daily loyalty-program check-in for one or more accounts.
//!
//! A run reads the account list, checks each account in turn, and reports
//! all outcomes in a single batched notification:
//! accounts → check-in (campaign id → sign → classify) → aggregator → sink
//!
//! # Architecture
//!
//! - **Accounts**: newline-separated tokens, optional `|`-suffixed options
//! - **Check-in**: one vendor round trip per account via [`tst_api`]
//! - **Notifications**: per-run [`notify::NotificationAggregator`] flushed
//!   once to a pluggable [`notify::NotificationSink`]
//! - **Batch**: sequential processing with per-account panic isolation

pub mod account;
pub mod batch;
pub mod checkin;
pub mod config;
pub mod error;
pub mod notify;

pub use batch::{AccountResult, RunReport, run_batch};
pub use checkin::{CheckinOutcome, CheckinReport, checkin};
pub use config::AppConfig;
pub use error::{CheckinError, Result};
pub use notify::{NotificationAggregator, NotificationSink};
