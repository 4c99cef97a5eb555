use std::collections::HashMap;
use std::fmt::Write as _;

use super::dispatch::DispatchTable;
use super::error::CompositionError;
use super::fragment::{
    EnumFragment, FieldSignature, OperationRoot, TypeFragment, TypeRef, TypeScope,
};
use super::resolver::{Handler, ResolverMap};

/// One ordered composition input: a type fragment or an enum fragment.
/// Callers supply fragments in dependency order; the composer never reorders.
pub enum SchemaFragment {
    Type(TypeFragment),
    Enum(EnumFragment),
}

impl From<TypeFragment> for SchemaFragment {
    fn from(fragment: TypeFragment) -> Self {
        SchemaFragment::Type(fragment)
    }
}

impl From<EnumFragment> for SchemaFragment {
    fn from(fragment: EnumFragment) -> Self {
        SchemaFragment::Enum(fragment)
    }
}

/// An object type after composition: its consolidated field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub fields: Vec<FieldSignature>,
}

/// The merged, process-lifetime schema. Built once at startup, immutable and
/// safe to share across concurrent dispatch calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedSchema {
    query_fields: Vec<FieldSignature>,
    mutation_fields: Vec<FieldSignature>,
    objects: Vec<ObjectType>,
    enums: Vec<EnumFragment>,
}

impl ComposedSchema {
    pub fn root_fields(&self, root: OperationRoot) -> &[FieldSignature] {
        match root {
            OperationRoot::Query => &self.query_fields,
            OperationRoot::Mutation => &self.mutation_fields,
        }
    }

    pub fn objects(&self) -> &[ObjectType] {
        &self.objects
    }

    pub fn enums(&self) -> &[EnumFragment] {
        &self.enums
    }

    fn defines(&self, name: &str) -> bool {
        TypeRef::is_builtin_scalar(name)
            || self.objects.iter().any(|object| object.name == name)
            || self.enums.iter().any(|fragment| fragment.name == name)
    }

    /// Renders the schema as SDL text: roots first, then object types and
    /// enums in composition order.
    pub fn sdl(&self) -> String {
        let mut out = String::new();
        render_fields_block(&mut out, "Query", &self.query_fields);
        out.push('\n');
        render_fields_block(&mut out, "Mutation", &self.mutation_fields);
        for object in &self.objects {
            out.push('\n');
            render_fields_block(&mut out, &object.name, &object.fields);
        }
        for fragment in &self.enums {
            out.push('\n');
            let _ = writeln!(out, "enum {} {{", fragment.name);
            for value in &fragment.values {
                let _ = writeln!(out, "  {value}");
            }
            out.push_str("}\n");
        }
        out
    }
}

fn render_fields_block(out: &mut String, name: &str, fields: &[FieldSignature]) {
    let _ = writeln!(out, "type {name} {{");
    for field in fields {
        let _ = write!(out, "  {}", field.name);
        if !field.arguments.is_empty() {
            let rendered: Vec<String> = field
                .arguments
                .iter()
                .map(|arg| format!("{}: {}", arg.name, render_type(&arg.ty, arg.nullable)))
                .collect();
            let _ = write!(out, "({})", rendered.join(", "));
        }
        let _ = writeln!(out, ": {}", render_type(&field.ty, field.nullable));
    }
    out.push_str("}\n");
}

fn render_type(ty: &TypeRef, nullable: bool) -> String {
    let rendered = match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::List(inner) => format!("[{}]", render_type(inner, true)),
    };
    if nullable {
        rendered
    } else {
        format!("{rendered}!")
    }
}

/// Merges type fragments and resolver maps into one schema and one dispatch
/// table. Pure: same inputs, same outputs. Every failure mode is a
/// `CompositionError`; composition never partially succeeds.
pub fn compose(
    fragments: Vec<SchemaFragment>,
    resolvers: Vec<ResolverMap>,
) -> Result<(ComposedSchema, DispatchTable), CompositionError> {
    let schema = merge_fragments(fragments)?;
    validate_references(&schema)?;
    let table = merge_resolvers(resolvers)?;
    validate_coverage(&schema, &table)?;
    Ok((schema, table))
}

/// Structural merge: root-scoped fragments are collected into one
/// consolidated field list per root operation, object and enum fragments are
/// gathered into a single type namespace.
fn merge_fragments(fragments: Vec<SchemaFragment>) -> Result<ComposedSchema, CompositionError> {
    let mut schema = ComposedSchema {
        query_fields: Vec::new(),
        mutation_fields: Vec::new(),
        objects: Vec::new(),
        enums: Vec::new(),
    };

    for fragment in fragments {
        match fragment {
            SchemaFragment::Type(TypeFragment {
                scope: TypeScope::Root(root),
                fields,
            }) => {
                let target = match root {
                    OperationRoot::Query => &mut schema.query_fields,
                    OperationRoot::Mutation => &mut schema.mutation_fields,
                };
                for field in fields {
                    if target.iter().any(|existing| existing.name == field.name) {
                        return Err(CompositionError::DuplicateRootField {
                            root,
                            field: field.name,
                        });
                    }
                    target.push(field);
                }
            }
            SchemaFragment::Type(TypeFragment {
                scope: TypeScope::Object(name),
                fields,
            }) => {
                if schema.objects.iter().any(|object| object.name == name)
                    || schema.enums.iter().any(|fragment| fragment.name == name)
                {
                    return Err(CompositionError::DuplicateType { name });
                }
                schema.objects.push(ObjectType { name, fields });
            }
            SchemaFragment::Enum(fragment) => {
                if schema.enums.iter().any(|existing| existing.name == fragment.name) {
                    return Err(CompositionError::DuplicateEnum {
                        name: fragment.name,
                    });
                }
                if schema.objects.iter().any(|object| object.name == fragment.name) {
                    return Err(CompositionError::DuplicateType {
                        name: fragment.name,
                    });
                }
                schema.enums.push(fragment);
            }
        }
    }

    Ok(schema)
}

/// Every type reference in a field signature or argument must resolve to a
/// defined object, enum, or built-in scalar in the union.
fn validate_references(schema: &ComposedSchema) -> Result<(), CompositionError> {
    let scopes = OperationRoot::ALL
        .iter()
        .map(|root| (root.type_name(), schema.root_fields(*root)))
        .chain(
            schema
                .objects()
                .iter()
                .map(|object| (object.name.as_str(), object.fields.as_slice())),
        );

    for (scope, fields) in scopes {
        for field in fields {
            let mut references = vec![field.ty.base()];
            references.extend(field.arguments.iter().map(|arg| arg.ty.base()));
            for reference in references {
                if !schema.defines(reference) {
                    return Err(CompositionError::UnresolvedType {
                        scope: scope.to_string(),
                        field: field.name.clone(),
                        reference: reference.to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Checked shallow merge of the resolver maps, keyed by operation root then
/// field name. Duplicate keys fail instead of overwriting.
fn merge_resolvers(resolvers: Vec<ResolverMap>) -> Result<DispatchTable, CompositionError> {
    let mut entries: HashMap<OperationRoot, HashMap<String, Handler>> = HashMap::new();
    let mut keys: Vec<(OperationRoot, String)> = Vec::new();

    for map in resolvers {
        for (root, field, handler) in map.into_entries() {
            let per_root = entries.entry(root).or_default();
            if per_root.contains_key(&field) {
                return Err(CompositionError::DuplicateResolver { root, field });
            }
            keys.push((root, field.clone()));
            per_root.insert(field, handler);
        }
    }

    Ok(DispatchTable::new(entries, keys))
}

/// Exactly one resolver per declared root field, and no resolver without a
/// declared field.
fn validate_coverage(
    schema: &ComposedSchema,
    table: &DispatchTable,
) -> Result<(), CompositionError> {
    for root in OperationRoot::ALL {
        for field in schema.root_fields(root) {
            if !table.contains(root, &field.name) {
                return Err(CompositionError::MissingResolver {
                    root,
                    field: field.name.clone(),
                });
            }
        }
    }

    for (root, field) in table.keys() {
        let declared = schema
            .root_fields(*root)
            .iter()
            .any(|signature| signature.name == *field);
        if !declared {
            return Err(CompositionError::OrphanResolver {
                root: *root,
                field: field.clone(),
            });
        }
    }

    Ok(())
}
