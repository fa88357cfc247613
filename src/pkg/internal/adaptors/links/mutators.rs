use super::spec::LinkSettings;
use crate::pkg::internal::store::ContentStore;
use crate::pkg::server::handlers::links::UpdateLinksInput;
use crate::prelude::Result;

pub struct LinkMutator<'a> {
    store: &'a mut ContentStore,
}

impl<'a> LinkMutator<'a> {
    pub fn new(store: &'a mut ContentStore) -> Self {
        LinkMutator { store }
    }

    pub async fn update(&mut self, patch: UpdateLinksInput) -> Result<LinkSettings> {
        if let Some(linkedin) = patch.linkedin {
            self.store.links.linkedin = linkedin;
        }
        if let Some(instagram) = patch.instagram {
            self.store.links.instagram = instagram;
        }
        if let Some(member_application) = patch.member_application {
            self.store.links.member_application = member_application;
        }
        if let Some(events_calendar) = patch.events_calendar {
            self.store.links.events_calendar = events_calendar;
        }
        if let Some(feedback_form) = patch.feedback_form {
            self.store.links.feedback_form = feedback_form;
        }
        self.store.persist_links().await?;
        tracing::info!("updated link settings");
        Ok(self.store.links.clone())
    }
}
