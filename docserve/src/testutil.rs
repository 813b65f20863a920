//! Store doubles and log capture shared by the unit tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use docserve_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    connection::ConnectionProvider,
    error::{StoreError, StoreResult},
};
use docserve_memory::InMemoryStore;
use tracing::{Event, Level, Subscriber, field::Field, subscriber::DefaultGuard};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

use crate::sample::{model::SampleModel, service::SampleService};

/// Hands out clones of a backend that already exists.
#[derive(Debug, Clone)]
pub(crate) struct StaticBuilder<B>(pub B);

#[async_trait]
impl<B> StoreBackendBuilder for StaticBuilder<B>
where
    B: StoreBackend + Clone + 'static,
{
    type Backend = B;

    async fn build(&self) -> StoreResult<B> {
        Ok(self.0.clone())
    }
}

fn connected<B>(store: B) -> Arc<ConnectionProvider<StaticBuilder<B>>>
where
    B: StoreBackend + Clone + 'static,
{
    Arc::new(ConnectionProvider::with_backend(
        StaticBuilder(store.clone()),
        store,
    ))
}

pub(crate) fn memory_model() -> SampleModel<StaticBuilder<InMemoryStore>> {
    SampleModel::new(connected(InMemoryStore::new()))
}

pub(crate) fn memory_service() -> Arc<SampleService<StaticBuilder<InMemoryStore>>> {
    Arc::new(SampleService::new(memory_model()))
}

pub(crate) fn failing_service() -> Arc<SampleService<StaticBuilder<FailingStore>>> {
    Arc::new(SampleService::new(SampleModel::new(connected(FailingStore))))
}

/// In-memory store that counts every operation it receives.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingStore {
    inner: InMemoryStore,
    calls: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn model() -> (SampleModel<StaticBuilder<RecordingStore>>, RecordingStore) {
        let store = RecordingStore::default();
        (SampleModel::new(connected(store.clone())), store)
    }

    pub fn service() -> (Arc<SampleService<StaticBuilder<RecordingStore>>>, RecordingStore) {
        let (model, store) = Self::model();
        (Arc::new(SampleService::new(model)), store)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreBackend for RecordingStore {
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<ObjectId> {
        self.record();
        self.inner.insert_one(document, collection).await
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.record();
        self.inner.find(collection).await
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        self.record();
        self.inner.find_one(id, collection).await
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        self.record();
        self.inner.update_one(id, set, collection).await
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        self.record();
        self.inner.delete_one(id, collection).await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.record();
        self.inner.ping().await
    }
}

/// In-memory store whose single-document reads fail.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReadFailingStore {
    inner: InMemoryStore,
    reads: Arc<AtomicUsize>,
}

impl ReadFailingStore {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn service() -> (Arc<SampleService<StaticBuilder<ReadFailingStore>>>, ReadFailingStore) {
        let store = ReadFailingStore::default();
        let service = SampleService::new(SampleModel::new(connected(store.clone())));
        (Arc::new(service), store)
    }
}

#[async_trait]
impl StoreBackend for ReadFailingStore {
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<ObjectId> {
        self.inner.insert_one(document, collection).await
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.inner.find(collection).await
    }

    async fn find_one(&self, _id: ObjectId, _collection: &str) -> StoreResult<Option<Document>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(lost())
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        self.inner.update_one(id, set, collection).await
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        self.inner.delete_one(id, collection).await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }
}

/// A store whose every operation fails.
#[derive(Debug, Clone)]
pub(crate) struct FailingStore;

fn lost() -> StoreError {
    StoreError::Backend("connection lost".to_string())
}

#[async_trait]
impl StoreBackend for FailingStore {
    async fn insert_one(&self, _document: Document, _collection: &str) -> StoreResult<ObjectId> {
        Err(lost())
    }

    async fn find(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        Err(lost())
    }

    async fn find_one(&self, _id: ObjectId, _collection: &str) -> StoreResult<Option<Document>> {
        Err(lost())
    }

    async fn update_one(&self, _id: ObjectId, _set: Document, _collection: &str) -> StoreResult<u64> {
        Err(lost())
    }

    async fn delete_one(&self, _id: ObjectId, _collection: &str) -> StoreResult<u64> {
        Err(lost())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(lost())
    }
}

/// Records the level and message of every event emitted while installed.
#[derive(Clone, Default)]
pub(crate) struct LogCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the capture as the current thread's subscriber until the guard drops.
    pub fn set_default(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn contains(&self, level: Level, message: &str) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .any(|(l, m)| *l == level && m == message)
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}
