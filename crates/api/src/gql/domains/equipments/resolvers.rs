use std::sync::Arc;

use serde_json::Value;

use infra::Store;

use crate::gql::error::FieldError;
use crate::gql::resolver::{handler, Arguments, ResolverMap};

use super::types::{Equipment, EquipmentFilter};

const COLLECTION: &str = "equipments";

pub fn resolvers() -> ResolverMap {
    ResolverMap::new()
        .query("equipments", handler(equipments))
        .mutation("deleteEquipment", handler(delete_equipment))
}

/// Query.equipments — records matching the filter arguments.
async fn equipments(store: Arc<dyn Store>, arguments: Arguments) -> Result<Value, FieldError> {
    let filter: EquipmentFilter = arguments.parse("equipments")?;
    let records = store
        .list_by_filter(COLLECTION, &filter.into_document())
        .await?;

    let items: Vec<Equipment> = records
        .into_iter()
        .map(|record| serde_json::from_value(Value::Object(record)))
        .collect::<Result<_, _>>()
        .map_err(|source| FieldError::Decode {
            collection: COLLECTION.to_string(),
            source,
        })?;

    serde_json::to_value(items).map_err(|source| FieldError::Decode {
        collection: COLLECTION.to_string(),
        source,
    })
}

/// Mutation.deleteEquipment — removes matching records, returns the count.
async fn delete_equipment(
    store: Arc<dyn Store>,
    arguments: Arguments,
) -> Result<Value, FieldError> {
    let filter: EquipmentFilter = arguments.parse("deleteEquipment")?;
    let removed = store
        .delete_by_filter(COLLECTION, &filter.into_document())
        .await?;
    Ok(Value::from(removed))
}
