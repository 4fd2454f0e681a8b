//! The parameter-schema mechanism backing primitive definitions.
//!
//! Each primitive family declares a schema type implementing [`Params`]:
//! a typed, defaulted record with a post-construction value check. A
//! [`Primitive`](crate::primitive::Primitive) stores the [`ParamType`]
//! descriptor of its schema, and binding a call validates the supplied
//! value against that descriptor.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::log::debug;

/// A typed, defaulted, value-checked record describing a primitive's
/// configurable values.
pub trait Params: Any + std::fmt::Debug + Send + Sync {
    /// A short name identifying this schema in error messages.
    fn type_name(&self) -> &'static str;

    /// Upcasts to [`Any`], for downcasting to the concrete schema.
    fn as_any(&self) -> &dyn Any;

    /// Value checks run after construction and defaulting.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A static descriptor of a parameter-schema type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamType {
    id: TypeId,
    name: &'static str,
}

impl ParamType {
    /// The descriptor of schema type `P`.
    pub fn of<P: Params>() -> Self {
        Self {
            id: TypeId::of::<P>(),
            name: short_type_name(std::any::type_name::<P>()),
        }
    }

    /// The identity of the schema type.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The short name of the schema type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An empty schema for primitives that are not parameterized.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct NoParams;

impl Params for NoParams {
    fn type_name(&self) -> &'static str {
        "NoParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

lazy_static! {
    /// Schema types a [`Primitive`](crate::primitive::Primitive) may bind.
    ///
    /// Pre-populated with the built-in family schemas; written only via
    /// [`register`] thereafter.
    static ref RECOGNIZED: RwLock<HashSet<TypeId>> = RwLock::new(builtin_schemas());
}

fn builtin_schemas() -> HashSet<TypeId> {
    use crate::primitive::catalog::{
        BipolarParams, CapacitorParams, CurrentSourceParams, DcVoltageSourceParams, DiodeParams,
        InductorParams, MosParams, PhysicalShortParams, PulseVoltageSourceParams, ResistorParams,
    };
    HashSet::from([
        TypeId::of::<NoParams>(),
        TypeId::of::<MosParams>(),
        TypeId::of::<BipolarParams>(),
        TypeId::of::<DiodeParams>(),
        TypeId::of::<ResistorParams>(),
        TypeId::of::<CapacitorParams>(),
        TypeId::of::<InductorParams>(),
        TypeId::of::<PhysicalShortParams>(),
        TypeId::of::<DcVoltageSourceParams>(),
        TypeId::of::<PulseVoltageSourceParams>(),
        TypeId::of::<CurrentSourceParams>(),
    ])
}

/// Registers `P` as a recognized parameter-schema type.
///
/// Built-in family schemas are pre-registered; this is only needed for
/// schemas defined outside this crate. Idempotent.
pub fn register<P: Params>() {
    let mut recognized = RECOGNIZED.write().unwrap();
    if recognized.insert(TypeId::of::<P>()) {
        debug!(
            "registered parameter schema {}",
            short_type_name(std::any::type_name::<P>())
        );
    }
}

/// Returns whether the given schema type is recognized.
pub fn is_recognized(param_type: ParamType) -> bool {
    RECOGNIZED.read().unwrap().contains(&param_type.id)
}

/// Strips the module path from a fully-qualified type name.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}
