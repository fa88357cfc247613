use super::spec::{MentorKind, MentorRecord, DEFAULT_IMAGE};
use crate::pkg::internal::store::ContentStore;
use crate::pkg::server::handlers::mentors::UpdateMentorInput;
use crate::prelude::Result;

pub struct MentorMutator<'a> {
    store: &'a mut ContentStore,
}

impl<'a> MentorMutator<'a> {
    pub fn new(store: &'a mut ContentStore) -> Self {
        MentorMutator { store }
    }

    // New mentors start blank and are filled in field by field.
    pub async fn create(&mut self) -> Result<MentorRecord> {
        let id = self
            .store
            .mentors
            .iter()
            .map(|mentor| mentor.id)
            .max()
            .map_or(1, |max| max + 1);
        let mentor = MentorRecord {
            id,
            name: String::new(),
            role: String::new(),
            company: String::new(),
            location: String::new(),
            grad_year: String::new(),
            expertise: vec![],
            image: DEFAULT_IMAGE.to_string(),
            kind: MentorKind::Alumni,
            email: String::new(),
            bio: None,
            linked_in: None,
            availability: None,
        };
        self.store.mentors.push(mentor.clone());
        self.store.persist_mentors().await?;
        tracing::info!("created mentor {}", id);
        Ok(mentor)
    }

    pub async fn update(
        &mut self,
        id: i32,
        patch: UpdateMentorInput,
    ) -> Result<Option<MentorRecord>> {
        let Some(mentor) = self.store.mentors.iter_mut().find(|mentor| mentor.id == id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            mentor.name = name;
        }
        if let Some(role) = patch.role {
            mentor.role = role;
        }
        if let Some(company) = patch.company {
            mentor.company = company;
        }
        if let Some(location) = patch.location {
            mentor.location = location;
        }
        if let Some(grad_year) = patch.grad_year {
            mentor.grad_year = grad_year;
        }
        if let Some(expertise) = patch.expertise {
            mentor.expertise = expertise;
        }
        if let Some(image) = patch.image {
            mentor.image = image;
        }
        if let Some(kind) = patch.kind {
            mentor.kind = kind;
        }
        if let Some(email) = patch.email {
            mentor.email = email;
        }
        if let Some(bio) = patch.bio {
            mentor.bio = Some(bio);
        }
        if let Some(linked_in) = patch.linked_in {
            mentor.linked_in = Some(linked_in);
        }
        if let Some(availability) = patch.availability {
            mentor.availability = Some(availability);
        }
        let mentor = mentor.clone();
        self.store.persist_mentors().await?;
        Ok(Some(mentor))
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let before = self.store.mentors.len();
        self.store.mentors.retain(|mentor| mentor.id != id);
        if self.store.mentors.len() == before {
            return Ok(false);
        }
        self.store.persist_mentors().await?;
        tracing::info!("deleted mentor {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::store::tests::test_store;
    use crate::prelude::Result;

    fn empty_patch() -> UpdateMentorInput {
        UpdateMentorInput {
            name: None,
            role: None,
            company: None,
            location: None,
            grad_year: None,
            expertise: None,
            image: None,
            kind: None,
            email: None,
            bio: None,
            linked_in: None,
            availability: None,
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_synthesizes_next_id() -> Result<()> {
        let (_dir, mut store) = test_store().await;
        let max = store.mentors.iter().map(|m| m.id).max().unwrap();
        let created = MentorMutator::new(&mut store).create().await?;
        assert_eq!(created.id, max + 1);
        assert_eq!(created.kind, MentorKind::Alumni);
        assert!(store.mentors.iter().any(|m| m.id == created.id));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_update_applies_only_present_fields() -> Result<()> {
        let (_dir, mut store) = test_store().await;
        let original = store.mentors[0].clone();
        let patch = UpdateMentorInput {
            company: Some("Stripe".into()),
            availability: Some("Fridays".into()),
            ..empty_patch()
        };
        let updated = MentorMutator::new(&mut store)
            .update(original.id, patch)
            .await?
            .expect("mentor found");
        assert_eq!(updated.company, "Stripe");
        assert_eq!(updated.availability.as_deref(), Some("Fridays"));
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.email, original.email);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_update_unknown_id() -> Result<()> {
        let (_dir, mut store) = test_store().await;
        let updated = MentorMutator::new(&mut store).update(999, empty_patch()).await?;
        assert!(updated.is_none());
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete() -> Result<()> {
        let (_dir, mut store) = test_store().await;
        let before = store.mentors.len();
        assert!(MentorMutator::new(&mut store).delete(1).await?);
        assert_eq!(store.mentors.len(), before - 1);
        assert!(!MentorMutator::new(&mut store).delete(1).await?);
        Ok(())
    }
}
