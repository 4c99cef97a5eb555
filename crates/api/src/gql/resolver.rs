use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use infra::Store;

use super::error::FieldError;
use super::fragment::{OperationRoot, TypeFragment};

/// Arguments supplied for one field request, keyed by argument name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Decodes the argument object into the field's declared argument schema.
    /// Unknown or mistyped attributes fail here, before any store call.
    pub fn parse<T: DeserializeOwned>(&self, field: &str) -> Result<T, FieldError> {
        serde_json::from_value(Value::Object(self.0.clone())).map_err(|source| {
            FieldError::InvalidArguments {
                field: field.to_string(),
                message: source.to_string(),
            }
        })
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

pub type HandlerFuture = BoxFuture<'static, Result<Value, FieldError>>;

/// A field handler: invoked with the data-access collaborator handle and the
/// request arguments, yields the field value or the original failure.
pub type Handler = Arc<dyn Fn(Arc<dyn Store>, Arguments) -> HandlerFuture + Send + Sync>;

/// Boxes an async handler function into the shape the dispatch table stores.
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Arc<dyn Store>, Arguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, FieldError>> + Send + 'static,
{
    Arc::new(move |store, arguments| -> HandlerFuture { Box::pin(f(store, arguments)) })
}

/// One module's resolver contributions, in declaration order. Key uniqueness
/// across the whole composed table is enforced by the composer.
#[derive(Clone, Default)]
pub struct ResolverMap {
    entries: Vec<(OperationRoot, String, Handler)>,
}

impl ResolverMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(self, field: impl Into<String>, handler: Handler) -> Self {
        self.entry(OperationRoot::Query, field, handler)
    }

    pub fn mutation(self, field: impl Into<String>, handler: Handler) -> Self {
        self.entry(OperationRoot::Mutation, field, handler)
    }

    pub fn entry(mut self, root: OperationRoot, field: impl Into<String>, handler: Handler) -> Self {
        self.entries.push((root, field.into(), handler));
        self
    }

    /// Direct handler lookup, bypassing composition. Used to call a module's
    /// resolver on its own.
    pub fn get(&self, root: OperationRoot, field: &str) -> Option<&Handler> {
        self.entries
            .iter()
            .find(|(r, f, _)| *r == root && f == field)
            .map(|(_, _, handler)| handler)
    }

    pub(crate) fn into_entries(self) -> Vec<(OperationRoot, String, Handler)> {
        self.entries
    }
}

/// A domain module: its schema fragments paired with its resolvers. Modules
/// are independent leaves; they meet only at the composer.
pub struct ModuleBundle {
    pub name: &'static str,
    pub type_defs: Vec<TypeFragment>,
    pub resolvers: ResolverMap,
}
