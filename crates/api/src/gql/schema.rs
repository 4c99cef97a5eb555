use super::compose::{compose, ComposedSchema, SchemaFragment};
use super::dispatch::DispatchTable;
use super::domains::{equipments, supplies};
use super::error::CompositionError;
use super::resolver::ModuleBundle;
use super::{enums, roots};

/// Composes the full schema served for the process lifetime: every domain
/// bundle plus the shared root and enum fragments.
pub fn build_schema() -> Result<(ComposedSchema, DispatchTable), CompositionError> {
    compose_bundles(vec![equipments::module(), supplies::module()])
}

/// Merges an explicit bundle list. Fragment order follows the documented
/// convention: root skeletons first, then domain fragments in bundle order,
/// then the shared enum declarations.
pub fn compose_bundles(
    bundles: Vec<ModuleBundle>,
) -> Result<(ComposedSchema, DispatchTable), CompositionError> {
    let mut fragments: Vec<SchemaFragment> = roots::fragments()
        .into_iter()
        .map(SchemaFragment::from)
        .collect();
    let mut resolvers = Vec::with_capacity(bundles.len());

    for bundle in bundles {
        tracing::debug!(module = bundle.name, "Adding module bundle");
        fragments.extend(bundle.type_defs.into_iter().map(SchemaFragment::from));
        resolvers.push(bundle.resolvers);
    }

    fragments.extend(enums::fragments().into_iter().map(SchemaFragment::from));
    compose(fragments, resolvers)
}
