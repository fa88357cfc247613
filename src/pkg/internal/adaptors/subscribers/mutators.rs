use crate::pkg::internal::email::SendEmail;
use crate::pkg::internal::store::ContentStore;
use crate::prelude::Result;

pub struct SubscriberMutator<'a> {
    store: &'a mut ContentStore,
}

impl<'a> SubscriberMutator<'a> {
    pub fn new(store: &'a mut ContentStore) -> Self {
        SubscriberMutator { store }
    }

    // Registration is gated on the welcome delivery: a failed send leaves
    // the registry untouched and surfaces the error to the caller.
    pub async fn subscribe<T: SendEmail + Sync>(
        &mut self,
        email: &str,
        welcome: &T,
    ) -> Result<bool> {
        welcome.send(email).await?;
        let inserted = if self.store.subscribers.iter().any(|s| s == email) {
            false
        } else {
            self.store.subscribers.push(email.to_string());
            self.store.persist_subscribers().await?;
            true
        };
        self.store.user_email = Some(email.to_string());
        self.store.persist_user_email().await?;
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::store::tests::test_store;
    use crate::prelude::{Result, StandardError};

    struct AlwaysDelivers;

    #[async_trait::async_trait]
    impl SendEmail for AlwaysDelivers {
        async fn send(&self, _email: &str) -> Result<()> {
            Ok(())
        }
    }

    struct NeverDelivers;

    #[async_trait::async_trait]
    impl SendEmail for NeverDelivers {
        async fn send(&self, _email: &str) -> Result<()> {
            Err(StandardError::new("ERR-MAIL-004"))
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_subscribe_is_idempotent() -> Result<()> {
        let (_dir, mut store) = test_store().await;
        let mut mutator = SubscriberMutator::new(&mut store);
        assert!(mutator.subscribe("student@emory.edu", &AlwaysDelivers).await?);
        assert!(!mutator.subscribe("student@emory.edu", &AlwaysDelivers).await?);
        assert_eq!(
            store
                .subscribers
                .iter()
                .filter(|s| *s == "student@emory.edu")
                .count(),
            1
        );
        assert_eq!(store.user_email.as_deref(), Some("student@emory.edu"));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_subscribe_preserves_insertion_order() -> Result<()> {
        let (_dir, mut store) = test_store().await;
        let mut mutator = SubscriberMutator::new(&mut store);
        mutator.subscribe("a@emory.edu", &AlwaysDelivers).await?;
        mutator.subscribe("b@emory.edu", &AlwaysDelivers).await?;
        mutator.subscribe("a@emory.edu", &AlwaysDelivers).await?;
        assert_eq!(store.subscribers, vec!["a@emory.edu", "b@emory.edu"]);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_welcome_blocks_registration() {
        let (_dir, mut store) = test_store().await;
        let outcome = SubscriberMutator::new(&mut store)
            .subscribe("student@emory.edu", &NeverDelivers)
            .await;
        assert!(outcome.is_err());
        assert!(store.subscribers.is_empty());
        assert!(store.user_email.is_none());
    }
}
