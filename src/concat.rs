//! The concatenation-marker protocol.
//!
//! Marks a type as eligible for concatenation into aggregate multi-wire
//! structures. Marking requires the type to already satisfy the connectable
//! capability (see [`crate::connect`]); the record is process-wide and
//! write-once per type.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::connect::is_connectable_type;
use crate::error::{Error, Result};
use crate::log::debug;

lazy_static! {
    static ref CONCATABLE: RwLock<HashSet<TypeId>> = RwLock::new(HashSet::new());
}

/// Marks `T` as eligible for concatenation.
///
/// Fails with [`Error::Capability`] if `T` is not connectable; on failure no
/// marking occurs. Idempotent on connectable types.
pub fn mark_concatable<T: Any>() -> Result<()> {
    let name = crate::params::short_type_name(std::any::type_name::<T>());
    if !is_connectable_type(TypeId::of::<T>()) {
        return Err(Error::Capability(name));
    }
    let mut concatable = CONCATABLE.write().unwrap();
    if concatable.insert(TypeId::of::<T>()) {
        debug!("marked type {} concatenation-eligible", name);
    }
    Ok(())
}

/// Returns whether `value`'s type was previously marked
/// concatenation-eligible. False for unmarked types.
pub fn is_concatable(value: &dyn Any) -> bool {
    CONCATABLE.read().unwrap().contains(&value.type_id())
}
