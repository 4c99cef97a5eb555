use super::fragment::{OperationRoot, TypeFragment};

/// Root-operation skeletons. `Query` and `Mutation` start as empty
/// containers; every domain bundle contributes its own fields to them and
/// the composer consolidates the result.
pub fn fragments() -> Vec<TypeFragment> {
    vec![
        TypeFragment::skeleton(OperationRoot::Query),
        TypeFragment::skeleton(OperationRoot::Mutation),
    ]
}
