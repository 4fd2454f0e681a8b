//! Leaf-level primitive device definitions for hierarchical circuit design.
//!
//! Primitives are components a design author does not build from
//! sub-components: transistors, diodes, resistors, capacitors, inductors,
//! and ideal sources. They terminate the composition hierarchy of a design.
//!
//! Each primitive is either `Ideal` (an abstract circuit-theoretic element)
//! or `Physical` (an abstraction of a fabricable device requiring later
//! technology-specific translation).
//!
//! The [`primitive::catalog`] module provides the fixed set of named
//! primitives; [`primitive::Primitive::call`] binds concrete, validated
//! parameter values to a primitive, producing the
//! [`primitive::PrimitiveCall`] consumed by design elaboration.

pub mod concat;
pub mod connect;
pub mod elab;
pub mod error;
pub mod params;
pub mod primitive;
pub mod signal;

pub(crate) mod log;
