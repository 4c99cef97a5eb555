pub mod resolvers;
pub mod types;

pub use types::{Equipment, EquipmentFilter};

use crate::gql::resolver::ModuleBundle;

/// The equipments module: type fragments paired with resolvers, composed
/// with the other domains at startup.
pub fn module() -> ModuleBundle {
    ModuleBundle {
        name: "equipments",
        type_defs: types::type_defs(),
        resolvers: resolvers::resolvers(),
    }
}
