//! Broadcast hub for record events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

/// Published after a lead has been stored.
pub const LEAD_CREATED: &str = "lead.created";

/// Something that happened to a stored record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    /// Dot-separated event name, e.g. [`LEAD_CREATED`].
    pub kind: &'static str,
    pub record_id: String,
    /// Snapshot of the record at publish time.
    pub data: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(kind: &'static str, record_id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            kind,
            record_id: record_id.into(),
            data,
            occurred_at: Utc::now(),
        }
    }
}

/// Fan-out of [`DomainEvent`]s to every live subscriber, shared as
/// `Arc<EventBus>`.
///
/// Slow subscribers lose the oldest events once `capacity` are buffered.
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Deliver `event` and return how many subscribers will see it.
    pub fn publish(&self, event: DomainEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                tracing::debug!(kind = event.kind, record_id = %event.record_id, "No subscribers for event");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_event(id: &str) -> DomainEvent {
        DomainEvent::new(LEAD_CREATED, id, serde_json::json!({ "name": "Jane" }))
    }

    #[tokio::test]
    async fn every_subscriber_sees_each_event() {
        let bus = EventBus::default();
        let mut notifier = bus.subscribe();
        let mut audit = bus.subscribe();

        assert_eq!(bus.publish(lead_event("lead_1")), 2);

        for rx in [&mut notifier, &mut audit] {
            let event = rx.recv().await.unwrap();
            assert_eq!(event.kind, LEAD_CREATED);
            assert_eq!(event.record_id, "lead_1");
            assert_eq!(event.data["name"], "Jane");
        }
    }

    #[test]
    fn publishing_without_subscribers_is_dropped() {
        assert_eq!(EventBus::default().publish(lead_event("lead_1")), 0);
    }

    #[tokio::test]
    async fn slow_subscriber_lags() {
        let bus = EventBus::with_capacity(1);
        let mut rx = bus.subscribe();
        bus.publish(lead_event("lead_1"));
        bus.publish(lead_event("lead_2"));

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
        assert_eq!(rx.recv().await.unwrap().record_id, "lead_2");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(lead_event("lead_1")).unwrap();
        assert_eq!(json["recordId"], "lead_1");
        assert!(json.get("occurredAt").is_some());
    }
}
