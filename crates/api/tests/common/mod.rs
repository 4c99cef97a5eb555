use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use api::gql::Arguments;
use infra::{Filter, MemoryStore, Record, Store, StoreError};

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[allow(dead_code)]
pub fn args(value: Value) -> Arguments {
    Arguments::from_map(record(value))
}

/// Memory store seeded with the standard collections.
#[allow(dead_code)]
pub fn seeded_store() -> Arc<dyn Store> {
    let mut collections = HashMap::new();
    collections.insert(
        "equipments".to_string(),
        vec![
            record(json!({"id": "notebook", "used_by": "developer", "count": 17, "new_or_used": "new"})),
            record(json!({"id": "monitor", "used_by": "developer", "count": 28, "new_or_used": "used"})),
            record(json!({"id": "ipad", "used_by": "planner", "count": 4, "new_or_used": "new"})),
        ],
    );
    collections.insert(
        "supplies".to_string(),
        vec![
            record(json!({"id": "ergonomic mouse", "team": 1})),
            record(json!({"id": "notepad", "team": 2})),
            record(json!({"id": "desk fan", "team": 3})),
        ],
    );
    Arc::new(MemoryStore::from_collections(collections))
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub op: &'static str,
    pub collection: String,
    pub filter: Filter,
}

/// Store double: records every call and serves canned results, so tests can
/// assert exactly what reached the collaborator.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<RecordedCall>>,
    list_result: Vec<Record>,
    delete_result: u64,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_result(mut self, records: Vec<Record>) -> Self {
        self.list_result = records;
        self
    }

    pub fn with_delete_result(mut self, count: u64) -> Self {
        self.delete_result = count;
        self
    }

    /// Every call fails with the store's own error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Store for RecordingStore {
    async fn list_by_filter(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Record>, StoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            op: "list",
            collection: collection.to_string(),
            filter: filter.clone(),
        });
        if self.fail {
            return Err(StoreError::UnknownCollection(collection.to_string()));
        }
        Ok(self.list_result.clone())
    }

    async fn delete_by_filter(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<u64, StoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            op: "delete",
            collection: collection.to_string(),
            filter: filter.clone(),
        });
        if self.fail {
            return Err(StoreError::UnknownCollection(collection.to_string()));
        }
        Ok(self.delete_result)
    }
}
