//! Elaboration-visibility marking for bound calls.
//!
//! An opaque marker meaning "instances of this type are significant to the
//! external elaborator" when found bound to a design attribute. No further
//! behavior is inferred here; the downstream contract belongs to the
//! elaboration subsystem.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::log::debug;
use crate::primitive::PrimitiveCall;

lazy_static! {
    static ref INSTANTIABLE: RwLock<HashSet<TypeId>> =
        RwLock::new(HashSet::from([TypeId::of::<PrimitiveCall>()]));
}

/// Marks instances of `T` for special handling during elaboration.
/// Idempotent.
pub fn mark_instantiable<T: Any>() {
    let mut instantiable = INSTANTIABLE.write().unwrap();
    if instantiable.insert(TypeId::of::<T>()) {
        debug!(
            "marked type {} for elaboration",
            crate::params::short_type_name(std::any::type_name::<T>())
        );
    }
}

/// Returns whether the elaborator must recognize `value` specially.
pub fn is_instantiable(value: &dyn Any) -> bool {
    INSTANTIABLE.read().unwrap().contains(&value.type_id())
}
