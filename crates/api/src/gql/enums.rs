use super::fragment::EnumFragment;

/// Shared enum declarations, composed after the domain fragments.
///
/// Neither enum is referenced by a field yet; they are declared and emitted
/// so the value sets stay reserved for the attributes they were staged for.
pub fn fragments() -> Vec<EnumFragment> {
    vec![role(), new_or_used()]
}

pub fn role() -> EnumFragment {
    EnumFragment::new("Role", ["developer", "designer", "planner"])
}

pub fn new_or_used() -> EnumFragment {
    EnumFragment::new("NewOrUsed", ["new", "used"])
}
