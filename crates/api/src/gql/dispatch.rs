use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use infra::Store;

use super::error::{DispatchError, FieldError};
use super::fragment::OperationRoot;
use super::resolver::{Arguments, Handler};

/// The merged dispatch table: `(root, field)` to handler, built once by the
/// composer and read-only afterwards.
pub struct DispatchTable {
    entries: HashMap<OperationRoot, HashMap<String, Handler>>,
    keys: Vec<(OperationRoot, String)>,
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("keys", &self.keys)
            .finish()
    }
}

impl DispatchTable {
    pub(crate) fn new(
        entries: HashMap<OperationRoot, HashMap<String, Handler>>,
        keys: Vec<(OperationRoot, String)>,
    ) -> Self {
        Self { entries, keys }
    }

    pub fn contains(&self, root: OperationRoot, field: &str) -> bool {
        self.entries
            .get(&root)
            .is_some_and(|per_root| per_root.contains_key(field))
    }

    /// Every `(root, field)` key in registration order.
    pub fn keys(&self) -> &[(OperationRoot, String)] {
        &self.keys
    }

    /// Routes one field request to its handler. An absent key fails with
    /// `UnknownField` before any handler runs; a present handler is awaited
    /// exactly once and its result or failure returned as-is.
    pub async fn dispatch(
        &self,
        root: OperationRoot,
        field: &str,
        arguments: Arguments,
        store: Arc<dyn Store>,
    ) -> Result<Value, DispatchError> {
        let handler = self
            .entries
            .get(&root)
            .and_then(|per_root| per_root.get(field))
            .ok_or_else(|| DispatchError::UnknownField {
                root,
                field: field.to_string(),
            })?;

        tracing::debug!(root = %root, field, "Dispatching field");
        handler(store, arguments).await.map_err(DispatchError::from)
    }
}

/// One parsed request: an operation root plus `field -> argument object`
/// entries.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub operation: OperationRoot,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct ResponseError {
    pub message: String,
    pub path: Vec<String>,
}

/// Partial-result response: a failed field is null under its key in `data`
/// with the failure detail listed in `errors`.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

/// Resolves every field of a request through the dispatch table, one at a
/// time. Fields are independent: a failure is scoped to its own key and
/// never disturbs siblings.
pub async fn execute(
    table: &DispatchTable,
    store: Arc<dyn Store>,
    request: QueryRequest,
) -> QueryResponse {
    let mut data = Map::new();
    let mut errors = Vec::new();

    for (field, raw_arguments) in request.fields {
        let outcome = match to_arguments(raw_arguments) {
            Ok(arguments) => {
                table
                    .dispatch(request.operation, &field, arguments, store.clone())
                    .await
            }
            Err(message) => Err(DispatchError::Handler(FieldError::InvalidArguments {
                field: field.clone(),
                message,
            })),
        };

        match outcome {
            Ok(value) => {
                data.insert(field, value);
            }
            Err(error) => {
                tracing::error!(field = %field, "Field resolution failed: {error}");
                errors.push(ResponseError {
                    message: error.to_string(),
                    path: vec![field.clone()],
                });
                data.insert(field, Value::Null);
            }
        }
    }

    QueryResponse { data, errors }
}

fn to_arguments(value: Value) -> Result<Arguments, String> {
    match value {
        Value::Null => Ok(Arguments::new()),
        Value::Object(map) => Ok(Arguments::from_map(map)),
        other => Err(format!("arguments must be an object, got {other}")),
    }
}
