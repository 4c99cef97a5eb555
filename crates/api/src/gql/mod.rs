pub mod compose;
pub mod dispatch;
pub mod domains;
pub mod enums;
pub mod error;
pub mod fragment;
pub mod resolver;
pub mod roots;
pub mod schema;

pub use compose::{compose, ComposedSchema, ObjectType, SchemaFragment};
pub use dispatch::{execute, DispatchTable, QueryRequest, QueryResponse};
pub use error::{CompositionError, DispatchError, FieldError};
pub use fragment::{EnumFragment, FieldSignature, OperationRoot, TypeFragment, TypeRef};
pub use resolver::{handler, Arguments, Handler, ModuleBundle, ResolverMap};
pub use schema::{build_schema, compose_bundles};
