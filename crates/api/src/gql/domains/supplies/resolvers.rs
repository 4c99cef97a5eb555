use std::sync::Arc;

use serde_json::Value;

use infra::Store;

use crate::gql::error::FieldError;
use crate::gql::resolver::{handler, Arguments, ResolverMap};

use super::types::{Supply, SupplyFilter};

const COLLECTION: &str = "supplies";

pub fn resolvers() -> ResolverMap {
    ResolverMap::new()
        .query("supplies", handler(supplies))
        .mutation("deleteSupply", handler(delete_supply))
}

/// Query.supplies — records matching the filter arguments.
async fn supplies(store: Arc<dyn Store>, arguments: Arguments) -> Result<Value, FieldError> {
    let filter: SupplyFilter = arguments.parse("supplies")?;
    let records = store
        .list_by_filter(COLLECTION, &filter.into_document())
        .await?;

    let items: Vec<Supply> = records
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

/// Mutation.deleteSupply — removes matching records, returns the count.
async fn delete_supply(store: Arc<dyn Store>, arguments: Arguments) -> Result<Value, FieldError> {
    let filter: SupplyFilter = arguments.parse("deleteSupply")?;
    let removed = store
        .delete_by_filter(COLLECTION, &filter.into_document())
        .await?;
    Ok(Value::from(removed))
}
