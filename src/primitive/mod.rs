//! Leaf-level primitive component definitions and their bound calls.

use std::collections::{HashMap, HashSet};

use arcstr::ArcStr;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::log::trace;
use crate::params::{self, NoParams, ParamType, Params};
use crate::signal::{Port, Visibility};

pub mod catalog;

/// An enumeration of primitive categories.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// An abstract circuit-theoretic element, e.g. an ideal resistor.
    Ideal,
    /// An abstraction of a fabricable device, requiring later
    /// technology-specific translation, e.g. a transistor.
    Physical,
}

/// A leaf-level hardware component type.
///
/// Primitives are not built from sub-components; they terminate the
/// composition hierarchy of a design. Construction validates the parameter
/// schema and the port list; the descriptor is immutable thereafter.
#[derive(Clone, Debug, Builder)]
#[builder(build_fn(validate = "PrimitiveBuilder::validate", error = "crate::error::Error"))]
pub struct Primitive {
    /// The primitive's name.
    #[builder(setter(into))]
    name: ArcStr,
    /// A one-line description.
    #[builder(setter(into))]
    desc: ArcStr,
    /// The ordered port list.
    port_list: Vec<Port>,
    /// The schema type of valid parameters.
    param_type: ParamType,
    /// Ideal vs physical category.
    kind: PrimitiveKind,
}

impl PrimitiveBuilder {
    fn validate(&self) -> Result<()> {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| arcstr::literal!("unnamed"));
        if let Some(param_type) = self.param_type {
            if !params::is_recognized(param_type) {
                return Err(Error::Configuration {
                    param_type: param_type.name(),
                    primitive: name,
                });
            }
        }
        if let Some(ports) = &self.port_list {
            validate_ports(&name, ports)?;
        }
        Ok(())
    }
}

fn validate_ports(primitive: &ArcStr, ports: &[Port]) -> Result<()> {
    let mut seen = HashSet::with_capacity(ports.len());
    for port in ports {
        if port.name().is_empty() {
            return Err(Error::PortDefinition {
                port: port.name().clone(),
                primitive: primitive.clone(),
                reason: "ports must be named",
            });
        }
        if port.visibility() != Visibility::Port {
            return Err(Error::PortDefinition {
                port: port.name().clone(),
                primitive: primitive.clone(),
                reason: "primitive ports must have PORT visibility",
            });
        }
        if !seen.insert(port.name().clone()) {
            return Err(Error::PortDefinition {
                port: port.name().clone(),
                primitive: primitive.clone(),
                reason: "duplicate port name",
            });
        }
    }
    Ok(())
}

impl Primitive {
    /// Creates a builder for a [`Primitive`].
    #[inline]
    pub fn builder() -> PrimitiveBuilder {
        PrimitiveBuilder::default()
    }

    /// The name of this primitive.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// A one-line description of this primitive.
    #[inline]
    pub fn desc(&self) -> &ArcStr {
        &self.desc
    }

    /// The ideal/physical category of this primitive.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// The schema type of this primitive's parameters.
    #[inline]
    pub fn params(&self) -> ParamType {
        self.param_type
    }

    /// The ordered port list.
    #[inline]
    pub fn port_list(&self) -> &[Port] {
        &self.port_list
    }

    /// A name-keyed map of this primitive's ports.
    ///
    /// Port names are unique by construction.
    pub fn ports(&self) -> HashMap<ArcStr, Port> {
        self.port_list
            .iter()
            .map(|p| (p.name().clone(), p.clone()))
            .collect()
    }

    /// Binds concrete parameter values to this primitive, validating them
    /// against the primitive's schema.
    pub fn call(&self, params: impl Params) -> Result<PrimitiveCall> {
        PrimitiveCall::new(self.clone(), Box::new(params))
    }

    /// Binds this primitive with no parameters.
    ///
    /// Fails unless the primitive's schema is [`NoParams`].
    #[inline]
    pub fn call_noparams(&self) -> Result<PrimitiveCall> {
        self.call(NoParams)
    }
}

/// A primitive bound to concrete, validated parameter values.
///
/// Produced by calling a [`Primitive`]; immutable, and consumed by design
/// elaboration wherever it is found bound to a design attribute (see
/// [`crate::elab`]).
#[derive(Debug)]
pub struct PrimitiveCall {
    prim: Primitive,
    params: Box<dyn Params>,
}

impl PrimitiveCall {
    /// Creates a call, validating that `params` is an instance of the
    /// primitive's schema type and that its values are in domain.
    pub fn new(prim: Primitive, params: Box<dyn Params>) -> Result<Self> {
        if params.as_any().type_id() != prim.param_type.id() {
            return Err(Error::ParameterType {
                actual: format!("{params:?}"),
                expected: prim.param_type.name(),
            });
        }
        params.validate()?;
        trace!("bound {} parameters to {}", params.type_name(), prim.name);
        Ok(Self { prim, params })
    }

    /// The bound primitive.
    #[inline]
    pub fn primitive(&self) -> &Primitive {
        &self.prim
    }

    /// The bound parameter values.
    #[inline]
    pub fn params(&self) -> &dyn Params {
        &*self.params
    }

    /// Downcasts the bound parameters to their concrete schema type.
    pub fn params_as<P: Params>(&self) -> Option<&P> {
        self.params.as_any().downcast_ref()
    }

    /// The bound primitive's port map. Identical to
    /// [`Primitive::ports`] on [`Self::primitive`].
    #[inline]
    pub fn ports(&self) -> HashMap<ArcStr, Port> {
        self.prim.ports()
    }
}
