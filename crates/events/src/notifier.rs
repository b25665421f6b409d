//! Simulated team notification for new leads.
//!
//! [`LeadNotifier`] subscribes to the [`EventBus`](crate::bus::EventBus) and,
//! for every `lead.created` event, composes the notification email the sales
//! team would receive. No mail is sent: the composed message is emitted as a
//! structured log record.

use alps_db::models::lead::Lead;
use tokio::sync::broadcast;

use crate::bus::{DomainEvent, LEAD_CREATED};

pub const SUBJECT: &str = "New Lead from Website";

/// A composed (not sent) notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Build the `lead.created` event carrying the full lead record.
pub fn lead_created_event(lead: &Lead) -> DomainEvent {
    DomainEvent::new(
        LEAD_CREATED,
        lead.id.clone(),
        serde_json::to_value(lead).unwrap_or_default(),
    )
}

fn or_unspecified<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}

/// Compose the team notification for `lead`.
pub fn compose(lead: &Lead, recipient: &str) -> NotificationEmail {
    let body = format!(
        "New lead received from {name}\n\
         \n\
         Contact Information:\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         \n\
         Trip Details:\n\
         - Start Date: {start}\n\
         - End Date: {end}\n\
         - Adults: {adults}\n\
         - Children: {children}\n\
         - Package Interest: {package}\n\
         \n\
         Message:\n\
         {notes}\n\
         \n\
         Source: {source}\n\
         Lead ID: {id}\n\
         Submitted: {created}\n",
        name = lead.name,
        email = lead.email,
        phone = lead.phone.as_deref().unwrap_or("Not provided"),
        start = or_unspecified(lead.start_date.as_deref()),
        end = or_unspecified(lead.end_date.as_deref()),
        adults = or_unspecified(lead.adults),
        children = or_unspecified(lead.children),
        package = or_unspecified(lead.package_id.as_deref()),
        notes = lead.notes.as_deref().unwrap_or("No additional message"),
        source = lead.source.as_str(),
        id = lead.id,
        created = lead.created_at.to_rfc3339(),
    );

    NotificationEmail {
        to: recipient.to_string(),
        subject: SUBJECT.to_string(),
        body,
    }
}

/// Background service that logs a simulated email for every new lead.
pub struct LeadNotifier {
    recipient: String,
}

impl LeadNotifier {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// Run the notification loop until the bus is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Some(email) = self.handle(&event) {
                        tracing::info!(
                            to = %email.to,
                            subject = %email.subject,
                            lead_id = %event.record_id,
                            body = %email.body,
                            "Email notification (simulated)"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Lead notifier lagged, some notifications were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, lead notifier shutting down");
                    break;
                }
            }
        }
    }

    /// Compose the notification for `event`, if it is a readable `lead.created`.
    pub fn handle(&self, event: &DomainEvent) -> Option<NotificationEmail> {
        if event.kind != LEAD_CREATED {
            return None;
        }
        match serde_json::from_value::<Lead>(event.data.clone()) {
            Ok(lead) => Some(compose(&lead, &self.recipient)),
            Err(e) => {
                tracing::error!(error = %e, "Malformed lead.created payload");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alps_core::lead::LeadSource;

    use super::*;
    use crate::bus::EventBus;

    fn lead() -> Lead {
        Lead {
            id: "lead_abc".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            start_date: Some("2027-01-10".into()),
            end_date: Some("2027-01-17".into()),
            adults: Some(2),
            children: None,
            package_id: Some("family-ski-week".into()),
            notes: None,
            source: LeadSource::Referral,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn compose_fills_fallbacks() {
        let email = compose(&lead(), "team@example.com");
        assert_eq!(email.to, "team@example.com");
        assert_eq!(email.subject, SUBJECT);
        assert!(email.body.starts_with("New lead received from Jane Doe"));
        assert!(email.body.contains("- Phone: Not provided"));
        assert!(email.body.contains("- Adults: 2"));
        assert!(email.body.contains("- Children: Not specified"));
        assert!(email.body.contains("No additional message"));
        assert!(email.body.contains("Source: referral"));
        assert!(email.body.contains("Lead ID: lead_abc"));
    }

    #[test]
    fn handle_ignores_other_events() {
        let notifier = LeadNotifier::new("team@example.com");
        let other = DomainEvent::new("booking.updated", "draft_1", serde_json::json!({}));
        assert!(notifier.handle(&other).is_none());

        let malformed = DomainEvent::new(LEAD_CREATED, "lead_1", serde_json::json!({"bad": 1}));
        assert!(notifier.handle(&malformed).is_none());
    }

    #[test]
    fn handle_round_trips_the_event_payload() {
        let notifier = LeadNotifier::new("team@example.com");
        let email = notifier.handle(&lead_created_event(&lead())).unwrap();
        assert!(email.body.contains("Package Interest: family-ski-week"));
    }

    #[tokio::test]
    async fn run_stops_when_bus_is_dropped() {
        let bus = EventBus::default();
        let handle = tokio::spawn(LeadNotifier::new("team@example.com").run(bus.subscribe()));

        bus.publish(lead_created_event(&lead()));
        drop(bus);

        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("notifier should stop")
            .unwrap();
    }
}
