//! Data access for the `samples` collection.

use std::{str::FromStr, sync::Arc};

use bson::oid::ObjectId;
use docserve_core::{
    backend::StoreBackendBuilder,
    collection::TypedCollection,
    connection::ConnectionProvider,
    error::{StoreError, StoreResult},
};

use super::entity::{Sample, SampleInput};

/// Single-document operations over the shared store handle.
///
/// Identifiers arrive as the hex strings clients see and are parsed here; anything that
/// is not a well-formed `ObjectId` fails with [`StoreError::InvalidIdentifier`] before
/// the store is touched.
pub struct SampleModel<C: StoreBackendBuilder> {
    provider: Arc<ConnectionProvider<C>>,
}

impl<C: StoreBackendBuilder> SampleModel<C> {
    pub fn new(provider: Arc<ConnectionProvider<C>>) -> Self {
        Self { provider }
    }

    pub async fn create(&self, input: &SampleInput) -> StoreResult<ObjectId> {
        let store = self.provider.get_connection().await?;

        TypedCollection::<_, Sample>::new(&*store).insert(input).await
    }

    pub async fn list(&self) -> StoreResult<Vec<Sample>> {
        let store = self.provider.get_connection().await?;

        TypedCollection::<_, Sample>::new(&*store).list().await
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Sample>> {
        let id = parse_id(id)?;
        let store = self.provider.get_connection().await?;

        TypedCollection::<_, Sample>::new(&*store).get(id).await
    }

    /// Sets the fields present in `input` and returns the modified count.
    pub async fn update(&self, id: &str, input: &SampleInput) -> StoreResult<u64> {
        let id = parse_id(id)?;
        let store = self.provider.get_connection().await?;

        TypedCollection::<_, Sample>::new(&*store).update(id, input).await
    }

    /// Removes the sample and returns the deleted count.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        let id = parse_id(id)?;
        let store = self.provider.get_connection().await?;

        TypedCollection::<_, Sample>::new(&*store).delete(id).await
    }
}

fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::from_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{RecordingStore, memory_model};

    fn input(number: f64) -> SampleInput {
        SampleInput {
            sample_number: Some(number),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_stored_fields() {
        let model = memory_model();

        let id = model.create(&input(4.0)).await.unwrap();
        let sample = model.get_by_id(&id.to_hex()).await.unwrap().unwrap();

        assert_eq!(sample.id, id);
        assert_eq!(sample.sample_number, Some(4.0));
        assert_eq!(sample.sample_string, None);
    }

    #[tokio::test]
    async fn update_only_touches_the_given_fields() {
        let model = memory_model();
        let id = model
            .create(&SampleInput {
                sample_string: Some("keep".to_string()),
                sample_number: Some(1.0),
                sample_boolean: None,
            })
            .await
            .unwrap()
            .to_hex();

        assert_eq!(model.update(&id, &input(2.0)).await.unwrap(), 1);
        assert_eq!(model.update(&id, &input(2.0)).await.unwrap(), 0);

        let sample = model.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(sample.sample_string.as_deref(), Some("keep"));
        assert_eq!(sample.sample_number, Some(2.0));
    }

    #[tokio::test]
    async fn delete_reports_counts() {
        let model = memory_model();
        let id = model.create(&input(1.0)).await.unwrap().to_hex();

        assert_eq!(model.delete(&id).await.unwrap(), 1);
        assert_eq!(model.delete(&id).await.unwrap(), 0);
        assert!(model.get_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_ids_never_reach_the_store() {
        let (model, store) = RecordingStore::model();

        for result in [
            model.get_by_id("abc").await.map(|_| ()),
            model.update("abc", &input(1.0)).await.map(|_| ()),
            model.delete("abc").await.map(|_| ()),
        ] {
            assert!(matches!(result, Err(StoreError::InvalidIdentifier(ref id)) if id == "abc"));
        }

        assert_eq!(store.calls(), 0);
    }
}
