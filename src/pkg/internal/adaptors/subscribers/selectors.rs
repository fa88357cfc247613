use crate::pkg::internal::store::ContentStore;

pub struct SubscriberSelector<'a> {
    store: &'a ContentStore,
}

impl<'a> SubscriberSelector<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        SubscriberSelector { store }
    }

    pub fn list(&self) -> &[String] {
        &self.store.subscribers
    }

    // Last subscribed address, and whether it is still in the registry.
    pub fn subscription(&self) -> (Option<&str>, bool) {
        let email = self.store.user_email.as_deref();
        let subscribed = email
            .map(|email| self.store.subscribers.iter().any(|s| s == email))
            .unwrap_or(false);
        (email, subscribed)
    }
}

pub fn mask(email: &str) -> String {
    match email.find('@') {
        Some(at) if at >= 2 => format!("{}***{}", &email[..2], &email[at..]),
        _ => email.to_string(),
    }
}
