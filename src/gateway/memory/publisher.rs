use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order so they can be inspected later.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}

// Rejects every event.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingPublisher {
    attempts: Mutex<usize>,
}

#[cfg(test)]
impl FailingPublisher {
    pub(crate) async fn attempts(&self) -> usize {
        *self.attempts.lock().await
    }
}

#[cfg(test)]
#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        *self.attempts.lock().await += 1;
        Err(LibraryError::runtime(format!("cannot publish {}", event.name).as_str(), Some("503".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::{FailingPublisher, MemoryPublisher};

    #[tokio::test]
    async fn test_should_keep_published_events() {
        let publisher = MemoryPublisher::new();
        let added = DomainEvent::added("book_added", "catalog", "111", &HashMap::new(), &"111").expect("build event");
        let issued = DomainEvent::updated("book_issued", "checkout", "111", &HashMap::new(), &"111").expect("build event");
        publisher.publish(&added).await.expect("should publish");
        publisher.publish(&issued).await.expect("should publish");
        let events = publisher.events().await;
        assert_eq!(2, events.len());
        assert_eq!(added.event_id, events[0].event_id);
        assert_eq!("book_issued", events[1].name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_events() {
        let publisher = FailingPublisher::default();
        let added = DomainEvent::added("book_added", "catalog", "111", &HashMap::new(), &"111").expect("build event");
        assert!(publisher.publish(&added).await.is_err());
        assert_eq!(1, publisher.attempts().await);
    }
}
