//! Alps event bus and lead notification.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`]: what happened to which stored record.
//! - [`LeadNotifier`]: background service that turns `lead.created` events
//!   into the (simulated) team notification email.

pub mod bus;
pub mod notifier;

pub use bus::{DomainEvent, EventBus};
pub use notifier::{LeadNotifier, NotificationEmail};
