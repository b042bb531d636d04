//! Shared dashboard state
//!
//! - [`store`]: the status aggregate (single writer, many read-only views)
//! - [`lifetime`]: request tickets used to drop stale responses
//! - [`notify`]: transient notifications for failures and successes

pub mod lifetime;
pub mod notify;
pub mod store;

pub use lifetime::{Lifetime, Slot, Ticket};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use store::{status_store, DashboardSnapshot, StatusView, StatusWriter};
