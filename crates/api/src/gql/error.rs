use thiserror::Error;

use infra::StoreError;

use super::fragment::OperationRoot;

/// Startup-time schema merge failures. Any of these abort composition; a
/// partial schema is never served.
#[derive(Debug, Error)]
pub enum CompositionError {
    #[error("duplicate field `{field}` on {root}")]
    DuplicateRootField { root: OperationRoot, field: String },

    #[error("duplicate type definition `{name}`")]
    DuplicateType { name: String },

    #[error("duplicate enum definition `{name}`")]
    DuplicateEnum { name: String },

    #[error("`{scope}.{field}` references undefined type `{reference}`")]
    UnresolvedType {
        scope: String,
        field: String,
        reference: String,
    },

    #[error("duplicate resolver for {root}.{field}")]
    DuplicateResolver { root: OperationRoot, field: String },

    #[error("declared field {root}.{field} has no resolver")]
    MissingResolver { root: OperationRoot, field: String },

    #[error("resolver {root}.{field} matches no declared field")]
    OrphanResolver { root: OperationRoot, field: String },
}

/// A failure raised inside a single field resolver.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid arguments for `{field}`: {message}")]
    InvalidArguments { field: String, message: String },

    #[error("malformed record in `{collection}`")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Dispatch-time failure for one field request. Handler failures pass through
/// unchanged so the caller sees the original detail.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown field {root}.{field}")]
    UnknownField { root: OperationRoot, field: String },

    #[error(transparent)]
    Handler(#[from] FieldError),
}
