use super::spec::{MentorPublic, MentorRecord};
use crate::pkg::internal::store::ContentStore;

pub struct MentorSelector<'a> {
    store: &'a ContentStore,
}

impl<'a> MentorSelector<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        MentorSelector { store }
    }

    pub fn all(&self) -> &[MentorRecord] {
        &self.store.mentors
    }

    pub fn get_by_id(&self, id: i32) -> Option<&MentorRecord> {
        self.store.mentors.iter().find(|mentor| mentor.id == id)
    }

    pub fn directory(&self) -> Vec<MentorPublic> {
        self.store.mentors.iter().map(MentorPublic::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::store::tests::test_store;

    #[tokio::test]
    #[traced_test]
    async fn test_directory_matches_collection() {
        let (_dir, store) = test_store().await;
        let directory = MentorSelector::new(&store).directory();
        assert_eq!(directory.len(), store.mentors.len());
    }
}
