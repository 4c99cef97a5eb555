pub mod resolvers;
pub mod types;

pub use types::{Supply, SupplyFilter};

use crate::gql::resolver::ModuleBundle;

/// The supplies module: type fragments paired with resolvers, composed with
/// the other domains at startup.
pub fn module() -> ModuleBundle {
    ModuleBundle {
        name: "supplies",
        type_defs: types::type_defs(),
        resolvers: resolvers::resolvers(),
    }
}
