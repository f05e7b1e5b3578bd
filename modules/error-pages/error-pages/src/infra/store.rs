use async_trait::async_trait;
use dashmap::DashMap;
use error_pages_sdk::{IncidentRecord, IncidentRecordStore};

/// Incident store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryIncidentStore {
    records: DashMap<u64, IncidentRecord>,
}

impl InMemoryIncidentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Later records replace earlier ones with the same id.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = IncidentRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub fn insert(&self, record: IncidentRecord) {
        self.records.insert(record.id, record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl IncidentRecordStore for InMemoryIncidentStore {
    async fn get_by_id(&self, id: u64) -> anyhow::Result<Option<IncidentRecord>> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }
}
