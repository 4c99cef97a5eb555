use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::store::{Filter, Record, Store, StoreError};

/// In-memory reference store, seeded from flat JSON files at startup.
///
/// One `<collection>.json` file per collection, each holding a JSON array of
/// records. Collections live behind a single `RwLock`; reads take a shared
/// guard, deletes an exclusive one.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::from_collections(HashMap::new())
    }

    pub fn from_collections(collections: HashMap<String, Vec<Record>>) -> Self {
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Loads every `*.json` file in `dir` as a collection named after the
    /// file stem.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| StoreError::SeedIo {
            path: dir.display().to_string(),
            source,
        })?;

        let mut collections = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::SeedIo {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let records = load_seed_file(&path)?;
            tracing::info!(collection = name, records = records.len(), "Loaded seed collection");
            collections.insert(name.to_string(), records);
        }

        Ok(Self::from_collections(collections))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn load_seed_file(path: &Path) -> Result<Vec<Record>, StoreError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
        path: display.clone(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| StoreError::SeedDecode {
        path: display.clone(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(StoreError::SeedShape { path: display });
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            _ => Err(StoreError::SeedShape {
                path: display.clone(),
            }),
        })
        .collect()
}

fn matches(record: &Record, filter: &Filter) -> bool {
    filter.iter().all(|(key, value)| record.get(key) == Some(value))
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_by_filter(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Record>, StoreError> {
        let collections = self.collections.read();
        let records = collections
            .get(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;
        Ok(records
            .iter()
            .filter(|record| matches(record, filter))
            .cloned()
            .collect())
    }

    async fn delete_by_filter(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write();
        let records = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;
        let before = records.len();
        records.retain(|record| !matches(record, filter));
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn filter(value: Value) -> Filter {
        record(value)
    }

    fn supplies_store() -> MemoryStore {
        let mut collections = HashMap::new();
        collections.insert(
            "supplies".to_string(),
            vec![
                record(json!({"id": "ergonomic mouse", "team": 1})),
                record(json!({"id": "mini fridge", "team": 3})),
                record(json!({"id": "desk fan", "team": 3})),
            ],
        );
        MemoryStore::from_collections(collections)
    }

    #[tokio::test]
    async fn list_matches_on_every_filter_attribute() {
        let store = supplies_store();

        let all = store
            .list_by_filter("supplies", &Filter::new())
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let team_three = store
            .list_by_filter("supplies", &filter(json!({"team": 3})))
            .await
            .unwrap();
        assert_eq!(team_three.len(), 2);

        let one = store
            .list_by_filter("supplies", &filter(json!({"team": 3, "id": "desk fan"})))
            .await
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0]["id"], json!("desk fan"));
    }

    #[tokio::test]
    async fn delete_removes_matches_and_reports_count() {
        let store = supplies_store();

        let removed = store
            .delete_by_filter("supplies", &filter(json!({"team": 3})))
            .await
            .unwrap();
        assert_eq!(removed, 2);

        let remaining = store
            .list_by_filter("supplies", &Filter::new())
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);

        let removed_again = store
            .delete_by_filter("supplies", &filter(json!({"team": 3})))
            .await
            .unwrap();
        assert_eq!(removed_again, 0);
    }

    #[tokio::test]
    async fn unknown_collection_is_an_error() {
        let store = supplies_store();

        let err = store
            .list_by_filter("people", &Filter::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownCollection(name) if name == "people"));
    }
}
