//! The structural "connectable" capability.
//!
//! A type must be registered here before instances of it may participate in
//! connections, and before it may be marked concatenation-eligible (see
//! [`crate::concat`]). The registry is written at load time and is read-only
//! for the remainder of the process.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::log::debug;
use crate::signal::Port;

lazy_static! {
    static ref CONNECTABLE: RwLock<HashSet<TypeId>> =
        RwLock::new(HashSet::from([TypeId::of::<Port>()]));
}

/// Registers `T` as connectable. Idempotent.
pub fn register_connectable<T: Any>() {
    let mut connectable = CONNECTABLE.write().unwrap();
    if connectable.insert(TypeId::of::<T>()) {
        debug!(
            "registered connectable type {}",
            crate::params::short_type_name(std::any::type_name::<T>())
        );
    }
}

/// Returns whether the type identified by `id` may participate in
/// connections.
pub fn is_connectable_type(id: TypeId) -> bool {
    CONNECTABLE.read().unwrap().contains(&id)
}

/// Returns whether `value`'s type may participate in connections.
pub fn is_connectable(value: &dyn Any) -> bool {
    is_connectable_type(value.type_id())
}
