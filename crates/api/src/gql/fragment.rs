use std::fmt;

use serde::Deserialize;

/// Top-level entry points of the query surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRoot {
    Query,
    Mutation,
}

impl OperationRoot {
    pub const ALL: [OperationRoot; 2] = [OperationRoot::Query, OperationRoot::Mutation];

    pub fn type_name(self) -> &'static str {
        match self {
            OperationRoot::Query => "Query",
            OperationRoot::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for OperationRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Reference to a named type, possibly wrapped in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// The innermost named type this reference points at.
    pub fn base(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) => inner.base(),
        }
    }

    pub fn is_builtin_scalar(name: &str) -> bool {
        matches!(name, "String" | "Int" | "Float" | "Boolean" | "ID")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDef {
    pub name: String,
    pub ty: TypeRef,
    pub nullable: bool,
}

/// One declared field: name, result type, nullability and argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSignature {
    pub name: String,
    pub ty: TypeRef,
    pub nullable: bool,
    pub arguments: Vec<ArgumentDef>,
}

impl FieldSignature {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            arguments: Vec::new(),
        }
    }

    pub fn non_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn argument(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.arguments.push(ArgumentDef {
            name: name.into(),
            ty,
            nullable: true,
        });
        self
    }
}

/// Where a fragment's fields land: a domain object type, or one of the root
/// operations (a root-scoped fragment extends Query/Mutation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeScope {
    Object(String),
    Root(OperationRoot),
}

/// An immutable schema contribution authored by one module. Root skeletons
/// are root-scoped fragments with an empty field list; domain fragments add
/// their object types and root fields on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFragment {
    pub scope: TypeScope,
    pub fields: Vec<FieldSignature>,
}

impl TypeFragment {
    pub fn object(name: impl Into<String>, fields: Vec<FieldSignature>) -> Self {
        Self {
            scope: TypeScope::Object(name.into()),
            fields,
        }
    }

    pub fn root(root: OperationRoot, fields: Vec<FieldSignature>) -> Self {
        Self {
            scope: TypeScope::Root(root),
            fields,
        }
    }

    pub fn skeleton(root: OperationRoot) -> Self {
        Self::root(root, Vec::new())
    }
}

/// A named closed set of symbolic values, shared across module schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumFragment {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumFragment {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}
