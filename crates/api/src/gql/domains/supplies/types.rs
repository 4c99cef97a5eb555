use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gql::fragment::{FieldSignature, OperationRoot, TypeFragment, TypeRef};

/// Office supply: consumables tracked per team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    pub id: String,
    pub team: i64,
}

/// Argument schema for both supply operations. Unknown attributes are
/// rejected before the store is reached.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplyFilter {
    pub id: Option<String>,
    pub team: Option<i64>,
}

impl SupplyFilter {
    /// Collapses the set arguments into the store's filter document.
    pub fn into_document(self) -> infra::Filter {
        let mut filter = infra::Filter::new();
        if let Some(id) = self.id {
            filter.insert("id".to_string(), Value::String(id));
        }
        if let Some(team) = self.team {
            filter.insert("team".to_string(), Value::from(team));
        }
        filter
    }
}

pub fn type_defs() -> Vec<TypeFragment> {
    vec![
        TypeFragment::object(
            "Supply",
            vec![
                FieldSignature::new("id", TypeRef::named("String")),
                FieldSignature::new("team", TypeRef::named("Int")),
            ],
        ),
        TypeFragment::root(
            OperationRoot::Query,
            vec![FieldSignature::new(
                "supplies",
                TypeRef::list(TypeRef::named("Supply")),
            )
            .argument("id", TypeRef::named("String"))
            .argument("team", TypeRef::named("Int"))],
        ),
        TypeFragment::root(
            OperationRoot::Mutation,
            vec![FieldSignature::new("deleteSupply", TypeRef::named("Int"))
                .argument("id", TypeRef::named("String"))
                .argument("team", TypeRef::named("Int"))],
        ),
    ]
}
