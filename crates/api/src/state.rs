use std::sync::Arc;

use crate::gql::{ComposedSchema, DispatchTable};
use infra::Store;

/// Shared request-handling state: the store handle and the composed outputs,
/// built once at startup and read-only for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    schema: Arc<ComposedSchema>,
    table: Arc<DispatchTable>,
    introspection_enabled: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, schema: ComposedSchema, table: DispatchTable) -> Self {
        let introspection_enabled = std::env::var("GQL_INTROSPECTION")
            .map(|v| v == "true")
            .unwrap_or(false);

        Self {
            store,
            schema: Arc::new(schema),
            table: Arc::new(table),
            introspection_enabled,
        }
    }

    pub fn schema(&self) -> &ComposedSchema {
        &self.schema
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    pub fn introspection_enabled(&self) -> bool {
        self.introspection_enabled
    }
}
