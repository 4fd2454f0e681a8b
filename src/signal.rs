//! The port and visibility model for primitive terminals.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// An enumeration of signal visibilities.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub enum Visibility {
    /// Externally visible terminal.
    #[default]
    Port,
    /// Internal signal, not exposed outside its parent.
    Internal,
}

/// A named terminal of a primitive.
///
/// Primitive ports must carry [`Visibility::Port`]; this is enforced when a
/// [`Primitive`](crate::primitive::Primitive) is constructed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Port {
    name: ArcStr,
    visibility: Visibility,
}

impl Port {
    /// Creates a port with [`Visibility::Port`].
    #[inline]
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Port,
        }
    }

    /// Creates a port with the given visibility.
    #[inline]
    pub fn with_visibility(name: impl Into<ArcStr>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
        }
    }

    /// The name of this port.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The visibility of this port.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}
