use async_trait::async_trait;
use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// Publishes an event for a change that has already been committed. The change
// stands either way, so a failure here is logged rather than returned.
pub async fn publish_committed(publisher: &dyn EventPublisher, event: serde_json::Result<DomainEvent>) {
    let res = match event {
        Ok(event) => publisher.publish(&event).await,
        Err(err) => Err(LibraryError::from(err)),
    };
    if let Err(err) = res {
        warn!(error = %err, "failed to publish domain event");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::publish_committed;
    use crate::gateway::memory::publisher::{FailingPublisher, MemoryPublisher};

    #[tokio::test]
    async fn test_should_publish_committed_event() {
        let publisher = MemoryPublisher::new();
        publish_committed(&publisher, DomainEvent::added("book_added", "catalog", "111", &HashMap::new(), &"111")).await;
        assert_eq!(1, publisher.events().await.len());
    }

    #[tokio::test]
    async fn test_should_swallow_failed_publish() {
        let publisher = FailingPublisher::default();
        publish_committed(&publisher, DomainEvent::added("book_added", "catalog", "111", &HashMap::new(), &"111")).await;
        assert_eq!(1, publisher.attempts().await);
    }
}
