//! Union merge for permission mappings.
//!
//! One generic algorithm serves both the code-only mapping and the
//! object-rich mapping: a role's grants are folded into a domain's running
//! mappings key by key, unioning the value sets.

use crate::domain::entities::PermissionMap;
use std::hash::Hash;

/// Union `source` into `target` in place.
///
/// For every permission type in `source`: if `target` already has the type,
/// the value sets are unioned; otherwise the type is inserted with a copy of
/// `source`'s set. No key is ever removed.
pub fn merge_permission_map<T>(target: &mut PermissionMap<T>, source: &PermissionMap<T>)
where
    T: Eq + Hash + Clone,
{
    for (permission_type, values) in source {
        match target.get_mut(permission_type) {
            Some(existing) => {
                existing.extend(values.iter().cloned());
            }
            None => {
                target.insert(permission_type.clone(), values.clone());
            }
        }
    }
}
