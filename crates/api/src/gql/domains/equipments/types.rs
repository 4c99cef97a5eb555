use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gql::fragment::{FieldSignature, OperationRoot, TypeFragment, TypeRef};

/// A piece of office equipment, assigned to a role.
///
/// `used_by` and `new_or_used` hold the raw symbolic values today; the
/// matching `Role` and `NewOrUsed` enums are declared in the shared enum
/// fragments but not wired to these attributes yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub used_by: String,
    pub count: i64,
    pub new_or_used: String,
}

/// Argument schema for both equipment operations. Unknown attributes are
/// rejected before the store is reached.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipmentFilter {
    pub id: Option<String>,
    pub used_by: Option<String>,
    pub count: Option<i64>,
    pub new_or_used: Option<String>,
}

impl EquipmentFilter {
    /// Collapses the set arguments into the store's filter document.
    pub fn into_document(self) -> infra::Filter {
        let mut filter = infra::Filter::new();
        if let Some(id) = self.id {
            filter.insert("id".to_string(), Value::String(id));
        }
        if let Some(used_by) = self.used_by {
            filter.insert("used_by".to_string(), Value::String(used_by));
        }
        if let Some(count) = self.count {
            filter.insert("count".to_string(), Value::from(count));
        }
        if let Some(new_or_used) = self.new_or_used {
            filter.insert("new_or_used".to_string(), Value::String(new_or_used));
        }
        filter
    }
}

pub fn type_defs() -> Vec<TypeFragment> {
    vec![
        TypeFragment::object(
            "Equipment",
            vec![
                FieldSignature::new("id", TypeRef::named("String")),
                FieldSignature::new("used_by", TypeRef::named("String")),
                FieldSignature::new("count", TypeRef::named("Int")),
                FieldSignature::new("new_or_used", TypeRef::named("String")),
            ],
        ),
        TypeFragment::root(
            OperationRoot::Query,
            vec![FieldSignature::new(
                "equipments",
                TypeRef::list(TypeRef::named("Equipment")),
            )
            .argument("id", TypeRef::named("String"))
            .argument("used_by", TypeRef::named("String"))
            .argument("count", TypeRef::named("Int"))
            .argument("new_or_used", TypeRef::named("String"))],
        ),
        TypeFragment::root(
            OperationRoot::Mutation,
            vec![FieldSignature::new("deleteEquipment", TypeRef::named("Int"))
                .argument("id", TypeRef::named("String"))
                .argument("used_by", TypeRef::named("String"))
                .argument("count", TypeRef::named("Int"))
                .argument("new_or_used", TypeRef::named("String"))],
        ),
    ]
}
