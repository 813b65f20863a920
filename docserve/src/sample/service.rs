//! Business logic for samples: logs every operation and orders the read-before-write
//! steps of update and delete.
//!
//! Store errors are logged once here and handed back unchanged; the controller decides
//! how they are rendered.

use docserve_core::{backend::StoreBackendBuilder, error::StoreResult};
use tracing::{error, info};

use super::{
    entity::{Sample, SampleInput},
    model::SampleModel,
};

/// Result of an update: the sample as it was before the write, and how many documents
/// the write modified.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub sample: Option<Sample>,
    pub modified_count: u64,
}

/// Result of a delete: the sample as it was before removal, and how many documents were
/// removed.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub sample: Option<Sample>,
    pub deleted_count: u64,
}

pub struct SampleService<C: StoreBackendBuilder> {
    model: SampleModel<C>,
}

impl<C: StoreBackendBuilder> SampleService<C> {
    pub fn new(model: SampleModel<C>) -> Self {
        Self { model }
    }

    /// Stores a new sample and returns its identifier as a hex string.
    pub async fn create_sample(&self, input: &SampleInput) -> StoreResult<String> {
        match self.model.create(input).await {
            Ok(id) => {
                let id = id.to_hex();
                info!(outcome = "success", "Sample created successfully with ID: {id}");
                Ok(id)
            }
            Err(err) => {
                error!("Error creating sample: {err}");
                Err(err)
            }
        }
    }

    pub async fn get_all_samples(&self) -> StoreResult<Vec<Sample>> {
        match self.model.list().await {
            Ok(samples) => {
                info!(outcome = "success", count = samples.len(), "All samples retrieved");
                Ok(samples)
            }
            Err(err) => {
                error!("Error getting samples: {err}");
                Err(err)
            }
        }
    }

    /// Looks up one sample. A missing sample is `Ok(None)`, not an error.
    pub async fn get_sample_by_id(&self, id: &str) -> StoreResult<Option<Sample>> {
        match self.model.get_by_id(id).await {
            Ok(Some(sample)) => {
                info!(outcome = "success", "Sample with id {id} retrieved");
                Ok(Some(sample))
            }
            Ok(None) => {
                info!("Sample with id {id} not found");
                Ok(None)
            }
            Err(err) => {
                error!("Error getting sample by ID: {err}");
                Err(err)
            }
        }
    }

    /// Reads the current sample, then applies `input` to it.
    ///
    /// The returned snapshot is the pre-update state. The write is issued even when the
    /// read found nothing; its modified count is then `0`.
    pub async fn update_sample(&self, id: &str, input: &SampleInput) -> StoreResult<UpdateOutcome> {
        let sample = self.get_sample_by_id(id).await.inspect_err(|err| {
            error!("Error updating sample: {err}");
        })?;

        let modified_count = match self.model.update(id, input).await {
            Ok(count) => count,
            Err(err) => {
                error!("Error updating sample: {err}");
                return Err(err);
            }
        };

        if sample.is_none() {
            error!("sample with id {id} not found");
        } else if modified_count > 0 {
            info!(outcome = "success", "Sample with id {id} updated/replaced using PUT operation");
        } else {
            info!("ModifiedCount is 0 for sample document with id {id}");
        }

        Ok(UpdateOutcome {
            sample,
            modified_count,
        })
    }

    /// Reads the current sample, then removes it.
    pub async fn delete_sample(&self, id: &str) -> StoreResult<DeleteOutcome> {
        let sample = self.get_sample_by_id(id).await.inspect_err(|err| {
            error!("Error deleting sample: {err}");
        })?;

        let deleted_count = match self.model.delete(id).await {
            Ok(count) => count,
            Err(err) => {
                error!("Error deleting sample: {err}");
                return Err(err);
            }
        };

        if deleted_count > 0 {
            info!(outcome = "success", "Sample with id {id} deleted");
        } else {
            error!("Sample with id {id} not found");
        }

        Ok(DeleteOutcome {
            sample,
            deleted_count,
        })
    }
}
